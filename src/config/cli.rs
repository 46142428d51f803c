use crate::config::toml_config::TomlConfig;
use crate::config::ScrapeSettings;
use crate::core::RankingMode;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "brew-scrape")]
#[command(about = "Scrape a venue's beverage menu and check-in leaderboard")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to export results into
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Export formats (csv, tsv, json)
    #[arg(long, global = true, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Bundle exports into one ZIP file
    #[arg(long, global = true)]
    pub bundle: bool,

    /// Number patrons 1..n over extracted entries instead of by page position
    #[arg(long, global = true)]
    pub contiguous_ranks: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Override the venue base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show a venue's current menu
    Menu {
        /// Short name of the venue
        venue: String,
    },
    /// Show a venue's check-in leaderboard
    Leaderboard {
        /// Short name of the venue
        venue: String,
    },
    /// List known venues
    Venues,
}

impl CliConfig {
    /// Loads the TOML file (if any) and applies command-line overrides on top.
    pub fn settings(&self) -> Result<ScrapeSettings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut settings = ScrapeSettings::from(file);
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut ScrapeSettings) {
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
        if let Some(output) = &self.output {
            settings.output_path = Some(output.clone());
        }
        if !self.format.is_empty() {
            settings.output_formats = self.format.clone();
        }
        if self.bundle {
            settings.bundle = true;
        }
        if self.contiguous_ranks {
            settings.ranking = RankingMode::Contiguous;
        }
    }
}
