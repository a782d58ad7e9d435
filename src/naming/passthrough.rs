use super::PeakNameResolver;

/// Resolver returning every name unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl PeakNameResolver for Passthrough {
    fn resolve(&self, name: &str) -> String {
        name.to_string()
    }

    fn describe(&self) -> String {
        "passthrough".to_string()
    }
}
