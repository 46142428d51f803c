use crate::core::assemble::{assemble_menus, assemble_patrons};
use crate::core::fetcher::Fetcher;
use crate::core::traversal::{menu_sections, patron_credits};
use crate::core::{ConfigProvider, RankingMode, ScrapeResult};
use crate::utils::error::Result;
use scraper::Html;

/// Parses venue page HTML into menus and patrons. No network access.
pub fn scrape_document(html: &str, ranking: RankingMode) -> ScrapeResult {
    let document = Html::parse_document(html);

    let menus = assemble_menus(menu_sections(&document));
    let patrons = assemble_patrons(&patron_credits(&document), ranking);

    ScrapeResult { menus, patrons }
}

/// Fetch and parse in one call.
#[derive(Debug, Clone)]
pub struct Scraper {
    fetcher: Fetcher,
    ranking: RankingMode,
}

impl Scraper {
    pub fn new(fetcher: Fetcher, ranking: RankingMode) -> Self {
        Self { fetcher, ranking }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(Fetcher::from_config(config)?, config.ranking_mode()))
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn ranking(&self) -> RankingMode {
        self.ranking
    }

    pub async fn scrape(&self, venue_path: &str) -> Result<ScrapeResult> {
        let page = self.fetcher.fetch(venue_path).await?;
        Ok(scrape_document(&page.html, self.ranking))
    }
}
