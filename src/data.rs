use crate::error::ScrapeError;
use serde::{Serialize, Serializer};

/// Text fragments of one site, one inner sequence per selected DOM node.
pub type RawFragmentBlock = Vec<Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    pub day: String,
    /// `DD.MM.YYYY`, empty when neither scraped nor inferable.
    pub date: String,
    pub lines: Vec<String>,
}

/// Outcome of scraping one site. Menus are empty whenever `error` is set.
#[derive(Debug, Serialize)]
pub struct SiteResult {
    pub name: String,
    pub menus: Vec<DayMenu>,
    #[serde(serialize_with = "error_message")]
    pub error: Option<ScrapeError>,
}

impl SiteResult {
    pub fn success(name: impl Into<String>, menus: Vec<DayMenu>) -> Self {
        Self {
            name: name.into(),
            menus,
            error: None,
        }
    }

    pub fn failure(name: impl Into<String>, error: ScrapeError) -> Self {
        Self {
            name: name.into(),
            menus: vec![],
            error: Some(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

fn error_message<S: Serializer>(error: &Option<ScrapeError>, s: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => s.serialize_some(&e.to_string()),
        None => s.serialize_none(),
    }
}

/// All site results of one run, in completion order until sorted.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ScrapeResultSet {
    pub sites: Vec<SiteResult>,
}

impl ScrapeResultSet {
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteResult> {
        self.sites.iter()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SiteResult> {
        self.sites.iter().filter(|s| s.is_failure())
    }

    pub fn get(&self, name: &str) -> Option<&SiteResult> {
        self.sites.iter().find(|s| s.name == name)
    }

    /// Stable, so sites sharing a name keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.sites.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

impl From<Vec<SiteResult>> for ScrapeResultSet {
    fn from(sites: Vec<SiteResult>) -> Self {
        Self { sites }
    }
}
