use crate::data::{DayMenu, ScrapeResultSet, SiteResult};
use std::fmt;

const SEPARATOR: &str =
    "================================================================================";

impl fmt::Display for DayMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.day.is_empty(), self.date.is_empty()) {
            (false, false) => writeln!(f, "    {} ({})", self.day, self.date)?,
            (false, true) => writeln!(f, "    {}", self.day)?,
            (true, false) => writeln!(f, "    ({})", self.date)?,
            (true, true) => writeln!(f, "    ?")?,
        }
        for line in &self.lines {
            writeln!(f, "        {}", line.trim())?;
        }
        Ok(())
    }
}

impl fmt::Display for SiteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;

        if let Some(e) = &self.error {
            writeln!(f, "    Menu unavailable: {}", e)?;
        } else if self.menus.is_empty() {
            writeln!(f, "    No menu")?;
        }

        for menu in &self.menus {
            writeln!(f, "{}", menu)?;
        }

        writeln!(f, "{}", SEPARATOR)
    }
}

impl fmt::Display for ScrapeResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for site in self.iter() {
            writeln!(f, "{}", site)?;
        }
        Ok(())
    }
}

pub fn to_json(results: &ScrapeResultSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_menus_and_failures() {
        let results = ScrapeResultSet::from(vec![
            SiteResult::success(
                "U Kapra",
                vec![
                    DayMenu {
                        day: "Pondělí".to_string(),
                        date: "14.10.2024".to_string(),
                        lines: vec![" Guláš 120 Kč".to_string(), " Řízek 130 Kč".to_string()],
                    },
                    DayMenu {
                        day: String::new(),
                        date: String::new(),
                        lines: vec!["Zavřeno".to_string()],
                    },
                ],
            ),
            SiteResult::failure(
                "Bauman",
                ScrapeError::HttpStatus {
                    status: 503,
                    reason: "Service Unavailable".to_string(),
                },
            ),
        ]);

        let expected = format!(
            "U Kapra\n\
             \n    Pondělí (14.10.2024)\n        Guláš 120 Kč\n        Řízek 130 Kč\n\
             \n    ?\n        Zavřeno\n\
             \n{sep}\n\
             \nBauman\n\
             \n    Menu unavailable: status code error: 503 Service Unavailable\n\
             {sep}\n\n",
            sep = SEPARATOR
        );
        assert_eq!(results.to_string(), expected);
    }

    #[test]
    fn json_lists_sites_in_order() {
        let results = ScrapeResultSet::from(vec![
            SiteResult::success("A", vec![]),
            SiteResult::success("B", vec![]),
        ]);
        let json: serde_json::Value = serde_json::from_str(&to_json(&results).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "A");
        assert_eq!(json[1]["name"], "B");
        assert!(json[1]["error"].is_null());
    }
}
