use chrono::{Datelike, NaiveDate};

use crate::models::HistoricalEvent;

/// Events sharing the birth date's month and day-of-month, regardless of
/// year. Input order is preserved.
pub fn birthday_events(birth: NaiveDate, events: &[HistoricalEvent]) -> Vec<HistoricalEvent> {
    events
        .iter()
        .filter(|event| event.date.month() == birth.month() && event.date.day() == birth.day())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(y: i32, m: u32, d: u32, title: &str) -> HistoricalEvent {
        HistoricalEvent {
            date: date(y, m, d),
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_matches_ignore_year() {
        let events = vec![
            event(1912, 3, 15, "Older"),
            event(2007, 3, 15, "Newer"),
            event(2007, 3, 16, "Off by a day"),
        ];

        let matches = birthday_events(date(1990, 3, 15), &events);
        let titles: Vec<&str> = matches.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Older", "Newer"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let events = vec![event(2001, 9, 11, "9/11 Attacks")];
        assert!(birthday_events(date(1990, 3, 15), &events).is_empty());
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(birthday_events(date(1990, 3, 15), &[]).is_empty());
    }
}
