pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::{PageSpec, TomlConfig};
pub use crate::core::generator::PageGenerator;
pub use domain::model::{GeneratorConfig, RenderSummary, DATA_MARKER};
pub use domain::ports::ConfigProvider;
pub use utils::error::{PageError, Result};
