use crate::config::ClientConfig;
use crate::utils::error::{ApiError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔的頂層結構：
///
/// ```toml
/// [client]
/// base_url = "${CAFE_API_URL}"
/// timeout_secs = 10
/// max_retries = 2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub client: Option<ClientConfig>,
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;

        let file: ConfigFile = toml::from_str(&processed).map_err(|e| ApiError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;

        file.client.ok_or_else(|| ApiError::MissingConfig {
            field: "client".to_string(),
        })
    }
}

/// 替換 `${VAR_NAME}`；未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApiError::Config {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackoffKind;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_partial_client_table() {
        let config = ClientConfig::from_toml_str(
            r#"
[client]
base_url = "http://localhost:8000/api"
max_retries = 3
backoff = "exponential"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff, BackoffKind::Exponential);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.cache_busting);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAFE_CLIENT_TEST_API_URL", "https://staging.tokyokafe.uz/api");

        let config = ClientConfig::from_toml_str(
            r#"
[client]
base_url = "${CAFE_CLIENT_TEST_API_URL}"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://staging.tokyokafe.uz/api");

        std::env::remove_var("CAFE_CLIENT_TEST_API_URL");
    }

    #[test]
    fn test_unset_variable_fails_validation() {
        let config = ClientConfig::from_toml_str(
            r#"
[client]
base_url = "${CAFE_CLIENT_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "${CAFE_CLIENT_TEST_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_client_table() {
        let err = ClientConfig::from_toml_str("[other]\nkey = 1\n").unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig { .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ClientConfig::from_toml_str("[client\nbase_url = ").unwrap_err();
        assert!(matches!(err, ApiError::Config { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[client]\nbase_url = \"https://api.tokyokafe.uz/api\"\ntimeout_secs = 3\n")
            .unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.timeout_secs, 3);
    }
}
