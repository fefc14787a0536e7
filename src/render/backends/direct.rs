// Direct backend: SVG straight to a PNG of the requested size

use super::{check_size, load_tree};
use crate::error::RenderError;
use crate::render::backend::RenderBackend;
use std::path::Path;
use tiny_skia::{Pixmap, Transform};

pub struct DirectBackend;

impl DirectBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for DirectBackend {
    fn name(&self) -> &str {
        "direct"
    }

    fn render(
        &self,
        source_path: &Path,
        size: u32,
        output_path: &Path,
    ) -> Result<(), RenderError> {
        check_size(size)?;
        let tree = load_tree(source_path)?;

        // Fit the template into the target, keeping its aspect ratio
        let svg_size = tree.size();
        let scale_x = size as f32 / svg_size.width();
        let scale_y = size as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);
        log::debug!("direct: {}px at scale {}", size, scale);

        let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Pixmap(size, size))?;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        pixmap
            .save_png(output_path)
            .map_err(|e| RenderError::Encode {
                path: output_path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn priority(&self) -> i32 {
        10
    }
}
