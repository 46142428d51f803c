use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for a menu item without a bitterness segment.
pub const IBU_NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// One beverage line. All fields are cleaned text, never parsed numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub brewery: String,
    pub style: String,
    pub abv: String,
    pub ibu: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub name: String,
    pub check_ins: u64,
    pub rank: u64,
}

/// How patron ranks are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Every patron element with a non-empty title consumes a rank, even when
    /// its title does not parse. Emitted ranks may skip numbers.
    #[default]
    Positional,
    /// Ranks count only patrons that were actually extracted: 1..=n.
    Contiguous,
}

/// HTML body of a venue page as returned by the fetcher.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub venue_path: String,
    pub url: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub menus: Vec<Menu>,
    pub patrons: Vec<Patron>,
}

impl ScrapeResult {
    pub fn item_count(&self) -> usize {
        self.menus.iter().map(|m| m.items.len()).sum()
    }
}

/// Metadata written alongside exports.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport<'a> {
    pub venue: &'a str,
    pub url: &'a str,
    pub scraped_at: DateTime<Utc>,
    pub menus: &'a [Menu],
    pub patrons: &'a [Patron],
}
