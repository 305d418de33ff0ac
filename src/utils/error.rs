use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Cannot open {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed reading {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid sample size {requested}: must be between 0 and {record_count}")]
    InvalidArgument { requested: usize, record_count: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Argument,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::MissingFile { .. } | PageError::ReadFailure { .. } => ErrorCategory::Input,
            PageError::WriteFailure { .. } => ErrorCategory::Output,
            PageError::InvalidArgument { .. } => ErrorCategory::Argument,
            PageError::ConfigError { .. }
            | PageError::ConfigValidationError { .. }
            | PageError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 嚴重程度決定 CLI 的退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            // 輸出檔可能已被截斷
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PageError::MissingFile { path, .. } => format!(
                "Check that {} exists and is readable",
                path.display()
            ),
            PageError::ReadFailure { path, .. } => format!(
                "Make sure {} is valid UTF-8 text and not modified while rendering",
                path.display()
            ),
            PageError::WriteFailure { path, .. } => format!(
                "Check permissions and free space for {}; the file may be partially written",
                path.display()
            ),
            PageError::InvalidArgument { record_count, .. } => format!(
                "Request at most {} records, or omit the sample size to emit all",
                record_count
            ),
            PageError::ConfigError { .. } => "Review the configuration file syntax".to_string(),
            PageError::ConfigValidationError { field, .. }
            | PageError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Output => format!("Could not write page: {}", self),
            ErrorCategory::Argument => format!("Invalid argument: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
