use crate::core::{ConfigProvider, RawPage};
use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://untappd.com/v/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = concat!("brew-scrape/", env!("CARGO_PKG_VERSION"));

/// Resolves venue paths against the base URL and downloads the page.
///
/// Every fetch is a single GET with no retries. The client timeout bounds the
/// whole request; dropping the returned future cancels it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    base: Url,
    client: Client,
}

impl Fetcher {
    pub fn new(base_url: &str, timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| ScrapeError::InvalidConfigValueError {
            field: "source.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .map_err(|source| ScrapeError::Fetch {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { base, client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.request_timeout(),
            config.user_agent(),
        )
    }

    /// Appends the venue path's segments to the base URL.
    ///
    /// Leading, trailing and doubled slashes are ignored. Empty paths and
    /// `.`/`..` segments are rejected so a registry entry can never climb out
    /// of the base path.
    pub fn build_url(&self, venue_path: &str) -> Result<Url> {
        let fail = |reason: &str| ScrapeError::UrlConstruction {
            venue: venue_path.to_string(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = venue_path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(fail("venue path is empty"));
        }
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(fail("relative path segments are not allowed"));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| fail("base url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub async fn fetch(&self, venue_path: &str) -> Result<RawPage> {
        let url = self.build_url(venue_path)?;

        tracing::debug!("Fetching venue page: {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScrapeError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Venue page status: {}", status);
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Downloaded {} bytes from {}", html.len(), url);

        Ok(RawPage {
            venue_path: venue_path.to_string(),
            url: url.to_string(),
            html,
        })
    }
}
