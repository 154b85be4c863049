//! Functional modules and the registry configuration resolves against.

mod builtin;
mod module_trait;
mod registry;

pub use builtin::BuiltinModule;
pub use module_trait::Module;
pub use registry::ModuleRegistry;
