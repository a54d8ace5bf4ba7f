use crate::{config::Weekdays, error::ScrapeError, utils::format_date};
use chrono::{Datelike, Duration, NaiveDate};
use lazy_regex::regex;
use tracing::warn;

/// Weekday label and date found at the start of a day block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayHeader {
    pub day: String,
    pub date: String,
}

/// Splits a day block into its header and the remaining menu fragments.
///
/// Layouts are tried in a fixed order:
/// 1. day and date share the first fragment (`Pondělí 14.10.2024`),
/// 2. the date is the second fragment, possibly with stray spaces (`14. 10. 2024`),
/// 3. the first fragment is a bare weekday name, the date is inferred for the
///    current week.
///
/// When none applies the header stays empty and no fragment is consumed.
pub fn parse_day_header<'a>(
    fragments: &'a [String],
    weekdays: &Weekdays,
    today: NaiveDate,
) -> Result<(DayHeader, &'a [String]), ScrapeError> {
    let first = fragments
        .first()
        .ok_or(ScrapeError::MalformedInput("empty day block"))?;
    let date_re = regex!(r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}");

    if let Some(date) = date_re.find(first) {
        let header = DayHeader {
            day: first.split_whitespace().next().unwrap_or_default().to_string(),
            date: date.as_str().to_string(),
        };
        return Ok((header, &fragments[1..]));
    }

    if let Some(second) = fragments.get(1) {
        let compact = second.replace(' ', "");
        if let Some(date) = date_re.find(&compact) {
            let header = DayHeader {
                day: first.clone(),
                date: date.as_str().to_string(),
            };
            return Ok((header, &fragments[2..]));
        }
    }

    if let Some(index) = weekdays.index_of(first) {
        let header = DayHeader {
            day: first.replace(' ', ""),
            date: date_of_weekday(index, today),
        };
        return Ok((header, &fragments[1..]));
    }

    warn!(fragment = %first, "Unable to parse date and day from menu");
    Ok((DayHeader::default(), fragments))
}

/// Date of the Monday-based `weekday` in the week containing `today`.
pub fn date_of_weekday(weekday: usize, today: NaiveDate) -> String {
    let offset = weekday as i64 - i64::from(today.weekday().num_days_from_monday());
    format_date(today + Duration::days(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn english() -> Weekdays {
        Weekdays::new(&[
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ])
        .unwrap()
    }

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn day_and_date_in_first_fragment() {
        let block = strings(&["Monday 01.01.2024", "Soup", "Main 120 Kč"]);
        let (header, rest) = parse_day_header(&block, &english(), wednesday()).unwrap();

        assert_eq!(header.day, "Monday");
        assert_eq!(header.date, "01.01.2024");
        assert_eq!(rest, &strings(&["Soup", "Main 120 Kč"])[..]);
    }

    #[test]
    fn date_in_second_fragment_with_stray_spaces() {
        let block = strings(&["Úterý", "15. 10. 2024", "Polévka"]);
        let (header, rest) =
            parse_day_header(&block, &Weekdays::default(), wednesday()).unwrap();

        assert_eq!(header.day, "Úterý");
        assert_eq!(header.date, "15.10.2024");
        assert_eq!(rest, &strings(&["Polévka"])[..]);
    }

    #[test]
    fn first_fragment_date_wins_over_second() {
        let block = strings(&["Pátek 18.10.2024", "19.10.2024"]);
        let (header, rest) =
            parse_day_header(&block, &Weekdays::default(), wednesday()).unwrap();

        assert_eq!(header.day, "Pátek");
        assert_eq!(header.date, "18.10.2024");
        assert_eq!(rest, &strings(&["19.10.2024"])[..]);
    }

    #[test]
    fn bare_weekday_resolves_in_current_week() {
        let block = strings(&["Monday"]);
        let (header, rest) = parse_day_header(&block, &english(), wednesday()).unwrap();

        assert_eq!(header.day, "Monday");
        assert_eq!(header.date, "01.01.2024");
        assert!(rest.is_empty());
    }

    #[test]
    fn bare_weekday_keeps_case_but_drops_spaces() {
        let block = strings(&["ČT VRTEK", "Guláš"]);
        let (header, rest) =
            parse_day_header(&block, &Weekdays::default(), wednesday()).unwrap();

        assert_eq!(header.day, "ČTVRTEK");
        assert_eq!(header.date, "04.01.2024");
        assert_eq!(rest, &strings(&["Guláš"])[..]);
    }

    #[test]
    fn sunday_belongs_to_the_week_it_ends() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(date_of_weekday(0, sunday), "01.01.2024");
        assert_eq!(date_of_weekday(6, sunday), "07.01.2024");

        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_of_weekday(6, monday), "07.01.2024");
        assert_eq!(date_of_weekday(0, monday), "01.01.2024");

        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(date_of_weekday(0, new_year), "30.12.2024");
    }

    #[test]
    fn unrecognized_header_keeps_all_fragments() {
        let block = strings(&["Denní menu", "Polévka", "Guláš 120 Kč"]);
        let (header, rest) =
            parse_day_header(&block, &Weekdays::default(), wednesday()).unwrap();

        assert_eq!(header, DayHeader::default());
        assert_eq!(rest, &block[..]);
    }

    #[test]
    fn single_unrecognized_fragment_is_not_an_error() {
        let block = strings(&["Zavřeno"]);
        let (header, rest) =
            parse_day_header(&block, &Weekdays::default(), wednesday()).unwrap();

        assert_eq!(header, DayHeader::default());
        assert_eq!(rest, &block[..]);
    }

    #[test]
    fn empty_block_is_malformed() {
        let err = parse_day_header(&[], &Weekdays::default(), wednesday()).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedInput(_)));
    }
}
