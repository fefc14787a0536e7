use std::path::{Path, PathBuf};

/// Output sizes, in generation order
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// The template is authored on a 128x128 canvas
pub const NATIVE_SIZE: f32 = 128.0;

pub const TEMPLATE_FILE: &str = "icon-template.svg";

/// File name for the icon of the given size
pub fn output_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// A single render request: one size, one output file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconJob {
    pub size: u32,
    pub output_path: PathBuf,
}

/// The template plus every icon derived from it
#[derive(Clone, Debug)]
pub struct IconSet {
    pub source_path: PathBuf,
    pub jobs: Vec<IconJob>,
}

impl IconSet {
    /// Build the fixed icon set rooted at `assets_dir`
    pub fn in_dir(assets_dir: &Path) -> Self {
        let jobs = ICON_SIZES
            .iter()
            .map(|&size| IconJob {
                size,
                output_path: assets_dir.join(output_file_name(size)),
            })
            .collect();

        Self {
            source_path: assets_dir.join(TEMPLATE_FILE),
            jobs,
        }
    }

    pub fn output_paths(&self) -> impl Iterator<Item = &Path> {
        self.jobs.iter().map(|job| job.output_path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_layout() {
        let set = IconSet::in_dir(Path::new("/tmp/assets"));
        assert_eq!(set.source_path, Path::new("/tmp/assets/icon-template.svg"));

        let sizes: Vec<u32> = set.jobs.iter().map(|j| j.size).collect();
        assert_eq!(sizes, vec![16, 48, 128]);

        let names: Vec<String> = set
            .output_paths()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["icon16.png", "icon48.png", "icon128.png"]);
    }

    #[test]
    fn test_outputs_share_template_dir() {
        let set = IconSet::in_dir(Path::new("assets"));
        for path in set.output_paths() {
            assert_eq!(path.parent(), set.source_path.parent());
        }
    }
}
