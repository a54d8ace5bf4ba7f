use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path, time::Duration};

pub const DEFAULT_CONFIG_PATH: &str = "config/restaurants.toml";

const CZECH_WEEKDAYS: [&str; 7] = [
    "pondělí", "úterý", "středa", "čtvrtek", "pátek", "sobota", "neděle",
];

/// One restaurant page to scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    pub name: String,
    pub url: String,
    /// CSS selector of the region holding the menu, one match per day when the
    /// site allows it.
    pub selector: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Localized weekday names, Monday first.
///
/// Names are stored normalized (lowercase, no spaces) and compared against
/// fragments normalized the same way, so matching is exact on the closed set
/// of seven names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Weekdays([String; 7]);

impl Weekdays {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.len() != 7 {
            return Err(ConfigError::Weekdays(format!(
                "expected 7 names, got {}",
                names.len()
            )));
        }

        let normalized: Vec<String> = names.iter().map(|n| normalize(n.as_ref())).collect();
        if normalized.iter().any(String::is_empty) {
            return Err(ConfigError::Weekdays("empty weekday name".to_string()));
        }
        if normalized.iter().collect::<HashSet<_>>().len() != 7 {
            return Err(ConfigError::Weekdays("duplicate weekday name".to_string()));
        }

        let mut days: [String; 7] = Default::default();
        for (slot, name) in days.iter_mut().zip(normalized) {
            *slot = name;
        }
        Ok(Self(days))
    }

    /// Monday-based index of `fragment` if it is a bare weekday name.
    pub fn index_of(&self, fragment: &str) -> Option<usize> {
        let candidate = normalize(fragment);
        self.0.iter().position(|day| *day == candidate)
    }

    pub fn is_weekday(&self, fragment: &str) -> bool {
        self.index_of(fragment).is_some()
    }
}

impl Default for Weekdays {
    fn default() -> Self {
        Self(CZECH_WEEKDAYS.map(String::from))
    }
}

impl TryFrom<Vec<String>> for Weekdays {
    type Error = ConfigError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Weekdays::new(&names)
    }
}

fn normalize(s: &str) -> String {
    s.replace(' ', "").to_lowercase()
}

/// Knobs of the menu reconstruction heuristics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub weekdays: Weekdays,
    /// Currency marker ending a menu item, matched case-insensitively.
    pub price_marker: String,
    /// Fragments longer than this many characters may stand alone as an item.
    pub long_line_limit: usize,
    /// More raw blocks than this means the site folded the whole week into
    /// one stream that has to be re-split on weekday names.
    pub fold_threshold: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            weekdays: Weekdays::default(),
            price_marker: "kč".to_string(),
            long_line_limit: 25,
            fold_threshold: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("menu-scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sites: Vec<SiteDescriptor>,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
