// Rendering backend implementations

#[cfg(feature = "direct")]
pub mod direct;
#[cfg(feature = "scaled")]
pub mod scaled;

#[cfg(feature = "direct")]
pub use direct::DirectBackend;
#[cfg(feature = "scaled")]
pub use scaled::{scale_factor, Drawing, ScaledBackend};

use crate::error::RenderError;
use std::fs;
use std::path::Path;

/// Read and parse an SVG file
#[cfg_attr(not(any(feature = "direct", feature = "scaled")), allow(dead_code))]
pub(crate) fn load_tree(path: &Path) -> Result<usvg::Tree, RenderError> {
    let data = fs::read(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut opts = usvg::Options::default();
    // Relative hrefs in the template resolve against its own directory
    opts.resources_dir = path.parent().map(|p| p.to_path_buf());

    usvg::Tree::from_data(&data, &opts).map_err(|source| RenderError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg_attr(not(any(feature = "direct", feature = "scaled")), allow(dead_code))]
pub(crate) fn check_size(size: u32) -> Result<(), RenderError> {
    if size == 0 {
        return Err(RenderError::InvalidSize(size));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::fs;
    use std::path::PathBuf;

    /// 128x128 template: transparent background, opaque red square in the middle
    pub const TEMPLATE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="128" height="128" viewBox="0 0 128 128">
  <rect x="32" y="32" width="64" height="64" fill="#ff0000"/>
</svg>"##;

    /// Fresh scratch directory under the system temp dir
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "icon-forge-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("Failed to create scratch dir");
        dir
    }

    /// Scratch directory with the test template written into it
    pub fn template_dir(name: &str) -> (PathBuf, PathBuf) {
        let dir = scratch_dir(name);
        let svg = dir.join("icon-template.svg");
        fs::write(&svg, TEMPLATE_SVG).expect("Failed to write template");
        (dir, svg)
    }
}
