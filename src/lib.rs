pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{storage::LocalStorage, venues::VenueRegistry, ScrapeSettings};

pub use crate::core::{
    etl::EtlEngine,
    fetcher::Fetcher,
    pipeline::VenuePipeline,
    scrape::{scrape_document, Scraper},
};
pub use domain::model::{Menu, MenuItem, Patron, RankingMode, ScrapeResult};
pub use utils::error::{Result, ScrapeError};
