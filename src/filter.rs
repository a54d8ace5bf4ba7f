use crate::{config::SiteDescriptor, data::ScrapeResultSet, utils::format_date};
use chrono::NaiveDate;
use itertools::Itertools;

/// Narrows the configured sites before anything is fetched.
///
/// Each component matches when any of its values matches, an empty component
/// matches every site. A site has to satisfy both components.
#[derive(Debug, Clone, Default)]
pub struct SiteFilter {
    pub tags: Vec<String>,
    pub names: Vec<String>,
}

impl SiteFilter {
    pub fn new(tags: Vec<String>, names: Vec<String>) -> Self {
        Self { tags, names }
    }

    pub fn matches(&self, site: &SiteDescriptor) -> bool {
        self.matches_tags(site) && self.matches_name(site)
    }

    fn matches_tags(&self, site: &SiteDescriptor) -> bool {
        self.tags.is_empty()
            || self
                .tags
                .iter()
                .cartesian_product(&site.tags)
                .any(|(wanted, tag)| wanted == tag)
    }

    fn matches_name(&self, site: &SiteDescriptor) -> bool {
        self.names.is_empty() || self.names.iter().any(|name| *name == site.name)
    }

    pub fn apply(&self, sites: Vec<SiteDescriptor>) -> Vec<SiteDescriptor> {
        sites.into_iter().filter(|s| self.matches(s)).collect()
    }
}

impl ScrapeResultSet {
    /// Keeps only the day menus dated `today`. Sites themselves are kept.
    pub fn retain_today(&mut self, today: NaiveDate) {
        let today = format_date(today);
        for site in &mut self.sites {
            site.menus.retain(|menu| menu.date == today);
        }
    }
}
