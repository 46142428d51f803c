pub mod assemble;
pub mod etl;
pub mod extract;
pub mod fetcher;
pub mod pipeline;
pub mod render;
pub mod scrape;
pub mod traversal;

pub use crate::domain::model::{
    Menu, MenuItem, Patron, RankingMode, RawPage, ScrapeReport, ScrapeResult, IBU_NOT_AVAILABLE,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
