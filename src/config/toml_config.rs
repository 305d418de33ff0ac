use crate::domain::model::GeneratorConfig;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{
    validate_non_empty, validate_path, validate_sample_size, validate_unique_paths, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A batch of pages rendered from the same sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: GeneratorConfig,
    pub pages: Vec<PageSpec>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub output: PathBuf,
    /// Absent means every record.
    pub sample: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| PageError::MissingFile {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PageError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.source.validate()?;
        validate_non_empty("pages", &self.pages)?;

        for page in &self.pages {
            validate_path("pages.output", &page.output)?;
            if let Some(k) = page.sample {
                validate_sample_size(k, self.source.record_count)?;
            }
        }

        validate_unique_paths("pages.output", self.pages.iter().map(|p| p.output.as_path()))
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
data_path = "python-packages-data.txt"
template_path = "python-packages-template.html"
record_count = 299594

[[pages]]
output = "python-packages-2000.html"
sample = 2000

[[pages]]
output = "python-packages-full.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.record_count, 299_594);
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.pages[0].sample, Some(2000));
        assert_eq!(config.pages[1].sample, None);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_defaults() {
        let toml_content = r#"
[[pages]]
output = "page.html"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source, GeneratorConfig::default());
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PAGE_GEN_TEST_DATA_DIR", "/srv/packages");

        let toml_content = r#"
[source]
data_path = "${PAGE_GEN_TEST_DATA_DIR}/data.txt"
template_path = "${PAGE_GEN_TEST_UNSET_VAR}/template.html"
record_count = 10

[[pages]]
output = "out.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.data_path,
            PathBuf::from("/srv/packages/data.txt")
        );
        assert_eq!(
            config.source.template_path,
            PathBuf::from("${PAGE_GEN_TEST_UNSET_VAR}/template.html")
        );

        std::env::remove_var("PAGE_GEN_TEST_DATA_DIR");
    }

    #[test]
    fn test_sample_over_record_count_fails_validation() {
        let toml_content = r#"
[source]
record_count = 5

[[pages]]
output = "out.html"
sample = 6
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PageError::InvalidArgument {
                requested: 6,
                record_count: 5
            })
        ));
    }

    #[test]
    fn test_duplicate_outputs_fail_validation() {
        let toml_content = r#"
[[pages]]
output = "out.html"

[[pages]]
output = "out.html"
sample = 1
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_pages_fail_validation() {
        let config = TomlConfig::from_toml_str("pages = []").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[[pages]\noutput =");
        assert!(matches!(
            result,
            Err(PageError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[pages]]\noutput = \"file-test.html\"\nsample = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pages[0].output, PathBuf::from("file-test.html"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(PageError::MissingFile { .. })));
    }
}
