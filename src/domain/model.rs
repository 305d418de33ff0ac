use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Substring that marks the template line replaced by data records.
pub const DATA_MARKER: &str = "DATA";

pub const DEFAULT_DATA_PATH: &str = "python-packages-data.txt";
pub const DEFAULT_TEMPLATE_PATH: &str = "python-packages-template.html";
pub const DEFAULT_RECORD_COUNT: usize = 299_594;

/// Sources for one generator: the data file, the template, and the number of
/// records the data file is expected to hold.
///
/// `record_count` bounds valid sample sizes. It is not checked against the
/// file; see [`crate::PageGenerator::count_records`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
    #[serde(default = "default_record_count")]
    pub record_count: usize,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_PATH)
}

fn default_record_count() -> usize {
    DEFAULT_RECORD_COUNT
}

impl GeneratorConfig {
    pub fn new(
        data_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        record_count: usize,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            template_path: template_path.into(),
            record_count,
        }
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self::new(
            provider.data_path(),
            provider.template_path(),
            provider.record_count(),
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH, DEFAULT_TEMPLATE_PATH, DEFAULT_RECORD_COUNT)
    }
}

impl ConfigProvider for GeneratorConfig {
    fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn template_path(&self) -> &Path {
        &self.template_path
    }

    fn record_count(&self) -> usize {
        self.record_count
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        validate_path("template_path", &self.template_path)?;
        Ok(())
    }
}

/// Counts collected while rendering one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub template_lines: usize,
    pub markers: usize,
    pub records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_packages_page() {
        let config = GeneratorConfig::default();
        assert_eq!(config.data_path, PathBuf::from("python-packages-data.txt"));
        assert_eq!(
            config.template_path,
            PathBuf::from("python-packages-template.html")
        );
        assert_eq!(config.record_count, 299_594);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let config = GeneratorConfig::new("", "template.html", 1);
        assert!(config.validate().is_err());
    }
}
