mod date;
mod lines;

pub use date::{date_of_weekday, parse_day_header, DayHeader};
pub use lines::segment_lines;

use crate::{
    config::{ParserConfig, Weekdays},
    data::{DayMenu, RawFragmentBlock},
    error::ScrapeError,
};
use chrono::NaiveDate;
use tracing::debug;

/// Turns the raw fragments of one site into dated day menus.
pub fn build_menus(
    raw: RawFragmentBlock,
    config: &ParserConfig,
    today: NaiveDate,
) -> Result<Vec<DayMenu>, ScrapeError> {
    let blocks = if raw.len() > config.fold_threshold {
        debug!(blocks = raw.len(), "Re-splitting folded week on weekday names");
        split_folded(raw, &config.weekdays)
    } else {
        raw
    };

    let mut menus = Vec::with_capacity(blocks.len());
    for block in blocks {
        if block.is_empty() {
            debug!("Skipping day block without text");
            continue;
        }

        let (header, rest) = parse_day_header(&block, &config.weekdays, today)?;
        menus.push(DayMenu {
            day: header.day,
            date: header.date,
            lines: segment_lines(rest, config),
        });
    }

    Ok(menus)
}

/// Regroups a week rendered as one stream into per-day blocks, starting a new
/// block at every bare weekday name.
pub fn split_folded(raw: RawFragmentBlock, weekdays: &Weekdays) -> RawFragmentBlock {
    let mut days = vec![];
    let mut current: Vec<String> = vec![];

    for fragment in raw.into_iter().flatten() {
        if fragment.is_empty() {
            continue;
        }
        if weekdays.is_weekday(&fragment) && !current.is_empty() {
            days.push(std::mem::take(&mut current));
        }
        current.push(fragment);
    }

    if !current.is_empty() {
        days.push(current);
    }
    days
}
