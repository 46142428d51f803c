use crate::core::render::{leaderboard_table, menu_table};
use crate::core::scrape::{scrape_document, Scraper};
use crate::core::{ConfigProvider, Pipeline, RawPage, ScrapeReport, ScrapeResult, Storage};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// Scrapes one venue and exports the result through a [`Storage`].
pub struct VenuePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    scraper: Scraper,
    venue: String,
    venue_path: String,
}

impl<S: Storage, C: ConfigProvider> VenuePipeline<S, C> {
    pub fn new(storage: S, config: C, venue: &str, venue_path: &str) -> Result<Self> {
        let scraper = Scraper::from_config(&config)?;
        Ok(Self {
            storage,
            config,
            scraper,
            venue: venue.to_string(),
            venue_path: venue_path.to_string(),
        })
    }

    fn export_files(&self, result: &ScrapeResult) -> Result<Vec<(String, Vec<u8>)>> {
        let mut files = Vec::new();

        for format in self.config.output_formats() {
            match format.as_str() {
                "csv" | "tsv" => {
                    let delimiter = if format == "csv" { b',' } else { b'\t' };
                    let menu = menu_table(&result.menus, delimiter)?;
                    let leaderboard = leaderboard_table(&result.patrons, delimiter)?;
                    files.push((format!("menu.{}", format), menu.into_bytes()));
                    files.push((format!("leaderboard.{}", format), leaderboard.into_bytes()));
                }
                "json" => {
                    let url = self.scraper.fetcher().build_url(&self.venue_path)?;
                    let report = ScrapeReport {
                        venue: &self.venue,
                        url: url.as_str(),
                        scraped_at: chrono::Utc::now(),
                        menus: &result.menus,
                        patrons: &result.patrons,
                    };
                    files.push((
                        "scrape.json".to_string(),
                        serde_json::to_vec_pretty(&report)?,
                    ));
                }
                other => tracing::warn!("Ignoring unknown output format: {}", other),
            }
        }

        Ok(files)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for VenuePipeline<S, C> {
    async fn extract(&self) -> Result<RawPage> {
        self.scraper.fetcher().fetch(&self.venue_path).await
    }

    async fn transform(&self, page: RawPage) -> Result<ScrapeResult> {
        let result = scrape_document(&page.html, self.scraper.ranking());
        tracing::debug!(
            "Parsed {}: {} sections, {} items, {} patrons",
            page.url,
            result.menus.len(),
            result.item_count(),
            result.patrons.len()
        );
        Ok(result)
    }

    async fn load(&self, result: &ScrapeResult) -> Result<Option<String>> {
        let Some(output_path) = self.config.output_path() else {
            return Ok(None);
        };

        let files = self.export_files(result)?;
        if files.is_empty() {
            return Ok(None);
        }

        if self.config.bundle_output() {
            let bundle_name = format!("{}.zip", self.venue);
            tracing::debug!("Creating ZIP file with {} files", files.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, data) in &files {
                    zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                    zip.write_all(data)?;
                }
                zip.finish()?.into_inner()
            };

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(&bundle_name, &zip_data).await?;
            return Ok(Some(format!("{}/{}", output_path, bundle_name)));
        }

        for (name, data) in &files {
            let path = format!("{}/{}", self.venue, name);
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, data).await?;
        }

        Ok(Some(format!("{}/{}", output_path, self.venue)))
    }
}
