use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::BTreeMap;

/// Short venue names mapped to their page path under the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRegistry {
    venues: BTreeMap<String, String>,
}

impl VenueRegistry {
    pub fn builtin() -> Self {
        let mut venues = BTreeMap::new();
        venues.insert(
            "hbs".to_string(),
            "homebrewstuff-craft-bottle-shop-and-taproom/960464".to_string(),
        );
        venues.insert(
            "brownbeard".to_string(),
            "brown-beard-brewing-company/11844307".to_string(),
        );
        Self { venues }
    }

    /// Adds or replaces entries; names are matched case-insensitively.
    pub fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, entries: I) {
        for (name, path) in entries {
            self.venues.insert(name.to_lowercase(), path);
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.resolve_entry(name).map(|(_, path)| path)
    }

    /// Registered name and path for `name`. The registered name is the
    /// lowercase key, so callers get one spelling per venue.
    pub fn resolve_entry(&self, name: &str) -> Result<(&str, &str)> {
        self.venues
            .get_key_value(&name.to_lowercase())
            .map(|(key, path)| (key.as_str(), path.as_str()))
            .ok_or_else(|| ScrapeError::UnknownVenue {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.venues.keys().map(String::as_str)
    }
}

impl Default for VenueRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Validate for VenueRegistry {
    fn validate(&self) -> Result<()> {
        for (name, path) in &self.venues {
            validate_non_empty_string(&format!("venues.{}", name), path)?;
        }
        Ok(())
    }
}
