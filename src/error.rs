use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning the template into a raster icon
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SVG {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: usvg::Error,
    },

    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("could not allocate a {0}x{1} pixmap")]
    Pixmap(u32, u32),

    #[error("failed to write {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },
}

/// None of the compiled-in rendering backends can be used
#[derive(Debug, Error)]
#[error("no rendering backend is available")]
pub struct NoBackendAvailable;

impl NoBackendAvailable {
    /// Installation hint naming every backend the build could have carried
    pub fn install_hint(&self) -> String {
        [
            "Rebuild with the `direct` backend:  cargo install icon-forge --features direct",
            "OR",
            "Rebuild with the `scaled` backend:  cargo install icon-forge --features scaled",
        ]
        .iter()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
    }
}
