//! Module registry implementation.

use std::collections::BTreeMap;

use tracing::warn;

use super::{BuiltinModule, Module};

/// Mapping from module name to implementation.
///
/// Populated by the application before configuration loads; configuration
/// only queries membership.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Box<dyn Module>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every module compiled into this binary.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for module in BuiltinModule::ALL {
            registry.register(Box::new(*module));
        }
        registry
    }

    /// Register a module under its own name, replacing any previous entry.
    pub fn register(&mut self, module: Box<dyn Module>) {
        self.modules.insert(module.name().to_string(), module);
    }

    /// Whether a module is registered under `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.values().map(|m| m.as_ref())
    }

    /// Keep the requested names that are registered.
    ///
    /// Order and duplicates are preserved. Unknown names are dropped with a
    /// warning; the result may be empty.
    pub fn filter(&self, requested: &[String]) -> Vec<String> {
        requested
            .iter()
            .filter(|name| {
                let known = self.exists(name);
                if !known {
                    warn!(configuration = "modules", module = %name, "module not available, skipping");
                }
                known
            })
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&'static str]) -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        for name in names {
            registry.register(Box::new(BuiltinModule::new(*name, "test")));
        }
        registry
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_drops_unknown_and_keeps_order() {
        let registry = registry(&["a", "b"]);
        assert_eq!(
            registry.filter(&strings(&["a", "x", "b"])),
            strings(&["a", "b"])
        );
        assert_eq!(registry.filter(&strings(&["b", "a"])), strings(&["b", "a"]));
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let registry = registry(&["a", "b"]);
        assert_eq!(registry.filter(&strings(&["a", "a"])), strings(&["a", "a"]));
    }

    #[test]
    fn test_filter_can_be_empty() {
        let registry = registry(&["a"]);
        assert!(registry.filter(&strings(&["x", "y"])).is_empty());
        assert!(ModuleRegistry::new().filter(&strings(&["a"])).is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let registry = registry(&["a"]);
        assert!(registry.filter(&strings(&["A", " a"])).is_empty());
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ModuleRegistry::builtin();
        assert_eq!(registry.names().count(), BuiltinModule::ALL.len());
        assert!(registry.exists("system"));
        assert!(registry.exists("service"));
        assert!(registry.exists("process"));
        assert!(!registry.exists("unknown"));
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["process", "service", "system"]
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = registry(&["a"]);
        registry.register(Box::new(BuiltinModule::new("a", "replacement")));
        assert_eq!(registry.names().count(), 1);
        assert_eq!(registry.iter().next().unwrap().description(), "replacement");
    }
}
