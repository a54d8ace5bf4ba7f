use crate::config::ParserConfig;
use tracing::debug;

/// Blocks shorter than this carry placeholder text rather than a menu.
const MIN_MENU_FRAGMENTS: usize = 5;

/// Joins the fragments of one day into menu item lines.
///
/// A line ends at a fragment holding the price marker, or at a long fragment
/// when the next signal ahead is another long fragment rather than a price.
/// Text after the last line end is dropped.
pub fn segment_lines(fragments: &[String], config: &ParserConfig) -> Vec<String> {
    if fragments.len() < MIN_MENU_FRAGMENTS {
        return fragments.to_vec();
    }

    let rules = Rules::new(config);
    let mut lines = vec![];
    let mut line = String::new();

    for (i, fragment) in fragments.iter().enumerate() {
        line.push(' ');
        line.push_str(fragment.trim());

        if rules.has_price(fragment)
            || (rules.is_long(fragment) && rules.must_split(&fragments[i + 1..]))
        {
            lines.push(std::mem::take(&mut line));
        }
    }

    if !line.is_empty() {
        debug!(dropped = %line.trim(), "Discarding unterminated menu line");
    }

    lines
}

struct Rules {
    price_marker: String,
    long_line_limit: usize,
}

impl Rules {
    fn new(config: &ParserConfig) -> Self {
        Self {
            price_marker: config.price_marker.to_lowercase(),
            long_line_limit: config.long_line_limit,
        }
    }

    fn has_price(&self, fragment: &str) -> bool {
        fragment.to_lowercase().contains(&self.price_marker)
    }

    fn is_long(&self, fragment: &str) -> bool {
        fragment.chars().count() > self.long_line_limit
    }

    /// Whether a long fragment stands alone: true when another long fragment
    /// comes before any price.
    fn must_split(&self, ahead: &[String]) -> bool {
        for fragment in ahead {
            if self.has_price(fragment) {
                return false;
            }
            if self.is_long(fragment) {
                return true;
            }
        }
        false
    }
}
