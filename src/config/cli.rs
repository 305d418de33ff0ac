use crate::domain::model::{DEFAULT_DATA_PATH, DEFAULT_RECORD_COUNT, DEFAULT_TEMPLATE_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_sample_size, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "page-generator")]
#[command(about = "Fill an HTML template with lines from a data file")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,

    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template_path: PathBuf,

    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT, help = "Number of records in the data file")]
    pub record_count: usize,

    #[arg(short, long, default_value = "python-packages-full.html")]
    pub output: PathBuf,

    #[arg(short = 'k', long, help = "Emit a random sample of this many records instead of all")]
    pub sample: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
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

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        validate_path("template_path", &self.template_path)?;
        validate_path("output", &self.output)?;
        if let Some(k) = self.sample {
            validate_sample_size(k, self.record_count)?;
        }
        Ok(())
    }
}
