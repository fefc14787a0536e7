// Render backend trait for the pluggable vector-to-raster pipeline

use crate::error::RenderError;
use std::path::Path;

/// Trait for rendering capabilities
///
/// Each backend turns the vector template into a square raster icon.
/// Backends are interchangeable; the registry picks the first one that
/// reports itself available.
pub trait RenderBackend {
    /// Name of this backend (for logging and diagnostics)
    fn name(&self) -> &str;

    /// Whether this backend can be used in the current build
    fn is_available(&self) -> bool {
        true
    }

    /// Render `source_path` into a `size` x `size` PNG at `output_path`
    fn render(&self, source_path: &Path, size: u32, output_path: &Path)
        -> Result<(), RenderError>;

    /// Priority of this backend (lower = preferred)
    fn priority(&self) -> i32 {
        100
    }
}
