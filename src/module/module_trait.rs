//! Module trait definition.

/// A functional module the service can enable.
pub trait Module: Send + Sync {
    /// Key the module registers under.
    fn name(&self) -> &str;

    /// Short human-readable description.
    fn description(&self) -> &str;
}
