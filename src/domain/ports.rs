use crate::domain::model::{RankingMode, RawPage, ScrapeResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> Option<&str>;
    fn ranking_mode(&self) -> RankingMode;
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
    fn bundle_output(&self) -> bool;
}

/// Fetch → parse → export, one venue per run.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawPage>;
    async fn transform(&self, page: RawPage) -> Result<ScrapeResult>;
    /// Returns where the exports were written, or `None` when exporting is off.
    async fn load(&self, result: &ScrapeResult) -> Result<Option<String>>;
}
