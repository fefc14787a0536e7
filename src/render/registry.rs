// Backend registry: ordered capability providers, resolved once at startup

use super::backend::RenderBackend;
use super::backends;
use crate::error::NoBackendAvailable;

/// Registry for rendering backends
pub struct BackendRegistry {
    backends: Vec<Box<dyn RenderBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Registry holding every backend compiled into this build
    pub fn with_default_backends() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "direct")]
        registry.register(Box::new(backends::DirectBackend::new()));
        #[cfg(feature = "scaled")]
        registry.register(Box::new(backends::ScaledBackend::new()));
        registry
    }

    /// Register a backend
    ///
    /// Backends are kept sorted by priority; equal priorities keep
    /// registration order.
    pub fn register(&mut self, backend: Box<dyn RenderBackend>) {
        self.backends.push(backend);
        self.backends.sort_by_key(|b| b.priority());
    }

    /// Names of all registered backends, in preference order
    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Take the first available backend
    pub fn select(self) -> Result<Box<dyn RenderBackend>, NoBackendAvailable> {
        for backend in self.backends {
            if backend.is_available() {
                log::info!("Using '{}' rendering backend", backend.name());
                return Ok(backend);
            }
            log::debug!("Backend '{}' is not available", backend.name());
        }
        Err(NoBackendAvailable)
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::path::Path;

    struct FakeBackend {
        name: &'static str,
        available: bool,
        priority: i32,
    }

    impl RenderBackend for FakeBackend {
        fn name(&self) -> &str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn render(&self, _: &Path, _: u32, _: &Path) -> Result<(), RenderError> {
            Ok(())
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    fn fake(name: &'static str, available: bool, priority: i32) -> Box<dyn RenderBackend> {
        Box::new(FakeBackend {
            name,
            available,
            priority,
        })
    }

    #[test]
    fn test_empty_registry_has_no_backend() {
        assert!(BackendRegistry::new().select().is_err());
    }

    #[test]
    fn test_prefers_lower_priority() {
        let mut registry = BackendRegistry::new();
        registry.register(fake("second", true, 20));
        registry.register(fake("first", true, 10));
        assert_eq!(registry.names(), vec!["first", "second"]);
        assert_eq!(registry.select().unwrap().name(), "first");
    }

    #[test]
    fn test_falls_back_when_primary_unavailable() {
        let mut registry = BackendRegistry::new();
        registry.register(fake("primary", false, 10));
        registry.register(fake("fallback", true, 20));
        assert_eq!(registry.select().unwrap().name(), "fallback");
    }

    #[test]
    fn test_fails_when_nothing_available() {
        let mut registry = BackendRegistry::new();
        registry.register(fake("primary", false, 10));
        registry.register(fake("fallback", false, 20));
        assert!(registry.select().is_err());
    }

    #[test]
    fn test_default_backends_follow_features() {
        let registry = BackendRegistry::with_default_backends();
        let names = registry.names();
        assert_eq!(names.contains(&"direct"), cfg!(feature = "direct"));
        assert_eq!(names.contains(&"scaled"), cfg!(feature = "scaled"));
    }

    #[cfg(all(feature = "direct", feature = "scaled"))]
    #[test]
    fn test_default_order() {
        let registry = BackendRegistry::with_default_backends();
        assert_eq!(registry.names(), vec!["direct", "scaled"]);
        assert_eq!(registry.select().unwrap().name(), "direct");
    }
}
