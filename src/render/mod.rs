// Icon rendering: backend trait, registry and implementations

pub mod backend;
pub mod backends;
pub mod registry;

pub use backend::RenderBackend;
pub use registry::BackendRegistry;
