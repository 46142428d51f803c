use crate::core::{Pipeline, ScrapeResult};
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug)]
pub struct EtlOutcome {
    pub result: ScrapeResult,
    pub output_path: Option<String>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, parse and export in order. A fetch failure aborts the run
    /// before anything is exported.
    pub async fn run(&self) -> Result<EtlOutcome> {
        let started = Instant::now();

        tracing::debug!("Fetching venue page...");
        let page = self.pipeline.extract().await?;
        tracing::info!("Fetched {} ({} bytes)", page.url, page.html.len());

        let result = self.pipeline.transform(page).await?;
        tracing::info!(
            "Extracted {} menus ({} items) and {} patrons",
            result.menus.len(),
            result.item_count(),
            result.patrons.len()
        );

        let output_path = self.pipeline.load(&result).await?;
        if let Some(path) = &output_path {
            tracing::info!("Output saved to: {}", path);
        }

        tracing::debug!("Scrape finished in {:?}", started.elapsed());
        Ok(EtlOutcome {
            result,
            output_path,
        })
    }
}
