#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;
pub mod venues;

use crate::core::fetcher::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::core::{ConfigProvider, RankingMode};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_one_of, validate_path, validate_positive_number, validate_url, Validate,
};
use std::time::Duration;
use toml_config::TomlConfig;
use venues::VenueRegistry;

pub const OUTPUT_FORMATS: [&str; 3] = ["csv", "tsv", "json"];

/// Effective settings after merging defaults, the TOML file and CLI flags.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
    pub ranking: RankingMode,
    pub output_path: Option<String>,
    pub output_formats: Vec<String>,
    pub bundle: bool,
    pub venues: VenueRegistry,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            ranking: RankingMode::default(),
            output_path: None,
            output_formats: vec!["csv".to_string(), "json".to_string()],
            bundle: false,
            venues: VenueRegistry::builtin(),
        }
    }
}

impl From<TomlConfig> for ScrapeSettings {
    fn from(file: TomlConfig) -> Self {
        let defaults = Self::default();
        let mut venues = defaults.venues;
        venues.extend(file.venues);

        Self {
            base_url: file.source.base_url.unwrap_or(defaults.base_url),
            timeout_seconds: file
                .source
                .timeout_seconds
                .unwrap_or(defaults.timeout_seconds),
            user_agent: file.source.user_agent,
            ranking: file.extract.ranking.unwrap_or(defaults.ranking),
            output_path: file.load.output_path,
            output_formats: file.load.output_formats.unwrap_or(defaults.output_formats),
            bundle: file.load.bundle.unwrap_or(defaults.bundle),
            venues,
        }
    }
}

impl Validate for ScrapeSettings {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.base_url)?;
        validate_positive_number("source.timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(path) = &self.output_path {
            validate_path("load.output_path", path)?;
        }
        validate_one_of("load.output_formats", &self.output_formats, &OUTPUT_FORMATS)?;
        self.venues.validate()
    }
}

impl ConfigProvider for ScrapeSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn ranking_mode(&self) -> RankingMode {
        self.ranking
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn bundle_output(&self) -> bool {
        self.bundle
    }
}
