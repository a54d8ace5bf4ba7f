use crate::{
    charset::decode_body,
    config::{HttpConfig, ParserConfig, SiteDescriptor},
    data::{RawFragmentBlock, SiteResult},
    error::{ConfigError, ScrapeError},
    extract::text_fragments,
    menu::build_menus,
    Page, PageSource,
};
use chrono::NaiveDate;
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Fetches pages over HTTP with a shared client. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: &HttpConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<Page, ScrapeError> {
        debug!("Visit {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("<unknown status code>")
                    .to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(Page { body, content_type })
    }
}

/// Text fragments of every node matching `selector`, one sequence per node.
///
/// No match is not an error, the page simply has no menu right now.
pub fn extract_fragments(html: &str, selector: &str) -> Result<RawFragmentBlock, ScrapeError> {
    let parsed = Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e.kind),
    })?;

    let doc = Html::parse_document(html);
    Ok(doc.select(&parsed).map(text_fragments).collect())
}

pub async fn fetch_fragments<S>(
    source: &S,
    site: &SiteDescriptor,
) -> Result<RawFragmentBlock, ScrapeError>
where
    S: PageSource + ?Sized,
{
    let page = source.fetch(&site.url).await?;
    let html = decode_body(&page.body, page.content_type.as_deref())?;
    extract_fragments(&html, &site.selector)
}

/// Scrapes one site. Every failure ends up in the returned result.
#[instrument(skip_all, fields(site = %site.name))]
pub async fn scrape_site<S>(
    source: &S,
    site: &SiteDescriptor,
    parser: &ParserConfig,
    today: NaiveDate,
) -> SiteResult
where
    S: PageSource + ?Sized,
{
    let menus = match fetch_fragments(source, site).await {
        Ok(raw) => build_menus(raw, parser, today),
        Err(e) => Err(e),
    };

    match menus {
        Ok(menus) => {
            debug!(days = menus.len(), "Menus parsed");
            SiteResult::success(&site.name, menus)
        }
        Err(e) => SiteResult::failure(&site.name, e),
    }
}
