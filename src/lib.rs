use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

pub mod charset;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod menu;
pub mod report;
pub mod utils;

mod data;
mod error;

#[cfg(test)]
mod test_utils;

pub use config::{Config, ParserConfig, SiteDescriptor};
pub use data::{DayMenu, RawFragmentBlock, ScrapeResultSet, SiteResult};
pub use error::{ConfigError, ErrorKind, ScrapeError};
pub use fetch::HttpSource;
pub use filter::SiteFilter;

/// A fetched page before decoding.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Where pages come from. One call is one outbound request.
#[async_trait::async_trait]
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Result<Page, ScrapeError>;
}

/// Scrapes every configured site concurrently.
pub struct MenuScraper<S> {
    source: Arc<S>,
    parser: Arc<ParserConfig>,
    today: NaiveDate,
}

impl<S> MenuScraper<S>
where
    S: PageSource + Send + Sync + 'static,
{
    pub fn new(source: S, parser: ParserConfig) -> Self {
        Self {
            source: Arc::new(source),
            parser: Arc::new(parser),
            today: utils::today(),
        }
    }

    /// Pins the date bare weekday names are resolved against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Spawns one task per site and waits for all of them.
    ///
    /// Always returns exactly one result per site. A failed or panicked task
    /// only affects its own result.
    pub async fn scrape(&self, sites: &[SiteDescriptor]) -> ScrapeResultSet {
        info!("Scraping {} sites", sites.len());

        let handles: Vec<_> = sites
            .iter()
            .cloned()
            .map(|site| {
                let source = Arc::clone(&self.source);
                let parser = Arc::clone(&self.parser);
                let today = self.today;
                tokio::spawn(async move {
                    fetch::scrape_site(source.as_ref(), &site, &parser, today).await
                })
            })
            .collect();

        let joined = futures::future::join_all(handles).await;

        let results: Vec<SiteResult> = sites
            .iter()
            .zip(joined)
            .map(|(site, joined)| match joined {
                Ok(result) => result,
                Err(e) => SiteResult::failure(&site.name, ScrapeError::Aborted(e.to_string())),
            })
            .collect();

        for result in &results {
            if let Some(e) = &result.error {
                warn!(site = %result.name, "Scraping failed: {}", e);
            }
        }

        let results = ScrapeResultSet::from(results);
        info!(
            "Scraped {} sites, {} failed",
            results.len(),
            results.failures().count()
        );
        results
    }
}
