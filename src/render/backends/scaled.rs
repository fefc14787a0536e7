// Scaled backend: parse into a drawing, rescale it, then rasterize
//
// Assumes the template's native size (128px) instead of reading it from the
// file, so output can differ from the direct backend for templates authored
// at other sizes.

use super::{check_size, load_tree};
use crate::error::RenderError;
use crate::icon::NATIVE_SIZE;
use crate::render::backend::RenderBackend;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;
use tiny_skia::{Pixmap, Transform};

/// Ratio between target and native size
pub fn scale_factor(size: u32, native_size: f32) -> f32 {
    size as f32 / native_size
}

/// Parsed vector drawing with an output canvas and a scale
pub struct Drawing {
    tree: usvg::Tree,
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Drawing {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let tree = load_tree(path)?;
        let size = tree.size();
        Ok(Self {
            width: size.width(),
            height: size.height(),
            scale_x: 1.0,
            scale_y: 1.0,
            tree,
        })
    }

    /// Resize the canvas to `size` and scale the content to match
    pub fn rescale(&mut self, size: u32, native_size: f32) {
        let scale = scale_factor(size, native_size);
        self.width = size as f32;
        self.height = size as f32;
        self.scale_x = scale;
        self.scale_y = scale;
    }

    pub fn rasterize(&self) -> Result<RgbaImage, RenderError> {
        let width = self.width.round() as u32;
        let height = self.height.round() as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Pixmap(width, height))?;
        resvg::render(
            &self.tree,
            Transform::from_scale(self.scale_x, self.scale_y),
            &mut pixmap.as_mut(),
        );

        // tiny-skia stores premultiplied alpha, PNG wants straight alpha
        let mut image = RgbaImage::new(width, height);
        for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(image)
    }
}

pub struct ScaledBackend;

impl ScaledBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScaledBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for ScaledBackend {
    fn name(&self) -> &str {
        "scaled"
    }

    fn render(
        &self,
        source_path: &Path,
        size: u32,
        output_path: &Path,
    ) -> Result<(), RenderError> {
        check_size(size)?;
        let mut drawing = Drawing::load(source_path)?;
        drawing.rescale(size, NATIVE_SIZE);
        log::debug!("scaled: {}px at scale {}", size, drawing.scale_x);

        drawing
            .rasterize()?
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(|e| RenderError::Encode {
                path: output_path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn priority(&self) -> i32 {
        20
    }
}
