use crate::utils::error::{PageError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks a requested sample size against the configured record count.
pub fn validate_sample_size(requested: usize, record_count: usize) -> Result<()> {
    if requested > record_count {
        return Err(PageError::InvalidArgument {
            requested,
            record_count,
        });
    }
    Ok(())
}

pub fn validate_unique_paths<'a, I>(field_name: &str, paths: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut seen = HashSet::new();
    for path in paths {
        if !seen.insert(path) {
            return Err(PageError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: path.to_string_lossy().to_string(),
                reason: "Output path listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(PageError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}
