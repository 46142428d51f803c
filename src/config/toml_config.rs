use crate::core::RankingMode;
use crate::utils::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub extract: ExtractConfig,
    pub load: LoadConfig,
    pub venues: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub ranking: Option<RankingMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    pub output_formats: Option<Vec<String>>,
    pub bundle: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${UNTAPPD_BASE_URL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var regex"));

        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
base_url = "https://untappd.com/v/"
timeout_seconds = 3
user_agent = "brewbot"

[extract]
ranking = "contiguous"

[load]
output_path = "./out"
output_formats = ["csv", "json"]
bundle = true

[venues]
corner = "corner-tap/123"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.timeout_seconds, Some(3));
        assert_eq!(config.source.user_agent.as_deref(), Some("brewbot"));
        assert_eq!(config.extract.ranking, Some(RankingMode::Contiguous));
        assert_eq!(config.load.bundle, Some(true));
        assert_eq!(config.venues.get("corner").unwrap(), "corner-tap/123");
    }

    #[test]
    fn test_every_section_is_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.base_url.is_none());
        assert!(config.extract.ranking.is_none());
        assert!(config.venues.is_empty());
    }

    #[test]
    fn test_unknown_ranking_is_rejected() {
        let result = TomlConfig::from_toml_str("[extract]\nranking = \"alphabetical\"\n");
        assert!(matches!(
            result,
            Err(ScrapeError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BREW_SCRAPE_TEST_BASE", "https://mirror.example.com/v/");

        let config =
            TomlConfig::from_toml_str("[source]\nbase_url = \"${BREW_SCRAPE_TEST_BASE}\"\n")
                .unwrap();
        assert_eq!(
            config.source.base_url.as_deref(),
            Some("https://mirror.example.com/v/")
        );

        std::env::remove_var("BREW_SCRAPE_TEST_BASE");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config =
            TomlConfig::from_toml_str("[venues]\nx = \"${BREW_SCRAPE_SURELY_UNSET}\"\n").unwrap();
        assert_eq!(config.venues["x"], "${BREW_SCRAPE_SURELY_UNSET}");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[venues]\nfile-bar = \"file-bar/9\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.venues["file-bar"], "file-bar/9");
    }
}
