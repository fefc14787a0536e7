use crate::error::RenderError;
use crate::icon::IconSet;
use crate::render::RenderBackend;
use std::path::PathBuf;

/// Renders every icon in an `IconSet` with one backend
pub struct Generator {
    backend: Box<dyn RenderBackend>,
    icons: IconSet,
}

impl Generator {
    pub fn new(backend: Box<dyn RenderBackend>, icons: IconSet) -> Self {
        Self { backend, icons }
    }

    /// Render each size in order, stopping at the first failure
    ///
    /// Prints one confirmation line per written file and returns the
    /// generated `(path, size)` pairs.
    pub fn run(&self) -> Result<Vec<(PathBuf, u32)>, RenderError> {
        let mut generated = Vec::with_capacity(self.icons.jobs.len());

        for job in &self.icons.jobs {
            log::debug!(
                "Rendering {} -> {}",
                self.icons.source_path.display(),
                job.output_path.display()
            );
            self.backend
                .render(&self.icons.source_path, job.size, &job.output_path)?;

            println!(
                "Generated {} ({}x{})",
                job.output_path.display(),
                job.size,
                job.size
            );
            generated.push((job.output_path.clone(), job.size));
        }

        log::info!(
            "Rendered {} icons with '{}'",
            generated.len(),
            self.backend.name()
        );
        Ok(generated)
    }
}
