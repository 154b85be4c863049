//! Modules compiled into this binary.

use super::Module;

/// Module shipped with the binary, identified by a static name.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinModule {
    name: &'static str,
    description: &'static str,
}

impl BuiltinModule {
    /// Modules available in every build.
    pub const ALL: &'static [BuiltinModule] = &[
        BuiltinModule::new("system", "Host information: OS version, uptime, hardware"),
        BuiltinModule::new("service", "List, start, and stop system services"),
        BuiltinModule::new("process", "List running processes"),
    ];

    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

impl Module for BuiltinModule {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }
}
