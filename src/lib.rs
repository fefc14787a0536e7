//! Renders the vector icon template into fixed-size PNG icons.

pub mod config;
pub mod error;
pub mod generate;
pub mod icon;
pub mod render;

pub use config::Config;
pub use error::{NoBackendAvailable, RenderError};
pub use generate::Generator;
pub use icon::{IconJob, IconSet, ICON_SIZES, NATIVE_SIZE};
pub use render::{BackendRegistry, RenderBackend};
