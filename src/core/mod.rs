pub mod generator;
pub mod lines;
pub mod sampling;

pub use crate::domain::model::{GeneratorConfig, RenderSummary, DATA_MARKER};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
