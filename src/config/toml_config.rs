use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// `compact` (default) or `json`
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        if let Some(token) = &self.api.token {
            validation::validate_non_empty_string("api.token", token)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format.to_ascii_lowercase().as_str()) {
                return Err(ClientError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
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
[api]
base_url = "https://tracker.example/api"
timeout_seconds = 15

[logging]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://tracker.example/api");
        assert_eq!(config.api.timeout_seconds, Some(15));
        assert!(config.api.token.is_none());
        assert!(config.json_logs());
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ARCADIA_CLIENT_TEST_TOKEN", "secret-token");

        let toml_content = r#"
[api]
base_url = "https://tracker.example/api"
token = "${ARCADIA_CLIENT_TEST_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.token.as_deref(), Some("secret-token"));

        std::env::remove_var("ARCADIA_CLIENT_TEST_TOKEN");
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let toml_content = r#"
[api]
base_url = "https://tracker.example/api"
token = "${ARCADIA_CLIENT_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api.token.as_deref(),
            Some("${ARCADIA_CLIENT_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[api]
base_url = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[api]
base_url = "https://tracker.example/api"

[logging]
format = "xml"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_api_section_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[logging]\nformat = \"json\"\n");
        assert!(matches!(
            result,
            Err(ClientError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
base_url = "http://localhost:8080/api"
user_agent = "arcadia-client-tests"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.user_agent.as_deref(), Some("arcadia-client-tests"));
    }
}
