use chrono::{Datelike, NaiveDate};

/// Published calendar range for one sign. Every range spans a month
/// boundary; both ends are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct SignRange {
    pub name: &'static str,
    /// (month, day) of the first day in range.
    pub start: (u32, u32),
    /// (month, day) of the last day in range.
    pub end: (u32, u32),
}

impl SignRange {
    fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

/// The twelve ranges partition the year; exactly one matches any valid
/// month/day pair.
pub const SIGN_RANGES: [SignRange; 12] = [
    SignRange { name: "Aries", start: (3, 21), end: (4, 19) },
    SignRange { name: "Taurus", start: (4, 20), end: (5, 20) },
    SignRange { name: "Gemini", start: (5, 21), end: (6, 20) },
    SignRange { name: "Cancer", start: (6, 21), end: (7, 22) },
    SignRange { name: "Leo", start: (7, 23), end: (8, 22) },
    SignRange { name: "Virgo", start: (8, 23), end: (9, 22) },
    SignRange { name: "Libra", start: (9, 23), end: (10, 22) },
    SignRange { name: "Scorpio", start: (10, 23), end: (11, 21) },
    SignRange { name: "Sagittarius", start: (11, 22), end: (12, 21) },
    SignRange { name: "Capricorn", start: (12, 22), end: (1, 19) },
    SignRange { name: "Aquarius", start: (1, 20), end: (2, 18) },
    SignRange { name: "Pisces", start: (2, 19), end: (3, 20) },
];

/// Sign name for a month/day pair. `None` only for pairs no valid date can
/// produce.
pub fn sign_for_month_day(month: u32, day: u32) -> Option<&'static str> {
    SIGN_RANGES
        .iter()
        .find(|range| range.contains(month, day))
        .map(|range| range.name)
}

/// Sign name for a calendar date.
pub fn sign_for_date(date: NaiveDate) -> Option<&'static str> {
    sign_for_month_day(date.month(), date.day())
}

const CHINESE_ZODIAC_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Chinese zodiac animal for a birth year. The cycle anchors at 1900, the
/// year of the Rat.
pub fn chinese_zodiac(year: i32) -> &'static str {
    let index = (year - 1900).rem_euclid(12) as usize;
    CHINESE_ZODIAC_ANIMALS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_boundary_dates() {
        assert_eq!(sign_for_month_day(3, 21), Some("Aries"));
        assert_eq!(sign_for_month_day(4, 19), Some("Aries"));
        assert_eq!(sign_for_month_day(4, 20), Some("Taurus"));
        assert_eq!(sign_for_month_day(2, 19), Some("Pisces"));
        assert_eq!(sign_for_month_day(3, 20), Some("Pisces"));
        assert_eq!(sign_for_month_day(1, 19), Some("Capricorn"));
        assert_eq!(sign_for_month_day(1, 20), Some("Aquarius"));
    }

    #[test]
    fn test_all_range_endpoints_resolve_to_their_sign() {
        for range in SIGN_RANGES {
            assert_eq!(sign_for_month_day(range.start.0, range.start.1), Some(range.name));
            assert_eq!(sign_for_month_day(range.end.0, range.end.1), Some(range.name));
        }
    }

    #[test]
    fn test_year_wrap_at_capricorn() {
        assert_eq!(sign_for_month_day(12, 22), Some("Capricorn"));
        assert_eq!(sign_for_month_day(12, 31), Some("Capricorn"));
        assert_eq!(sign_for_month_day(1, 1), Some("Capricorn"));
    }

    #[test]
    fn test_every_day_of_a_leap_year_matches_exactly_one_sign() {
        let mut day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        while day <= end {
            let matches = SIGN_RANGES
                .iter()
                .filter(|r| r.contains(day.month(), day.day()))
                .count();
            assert_eq!(matches, 1, "{day}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_chinese_zodiac_cycle() {
        assert_eq!(chinese_zodiac(1900), "Rat");
        assert_eq!(chinese_zodiac(1912), "Rat");
        assert_eq!(chinese_zodiac(1990), "Horse");
        assert_eq!(chinese_zodiac(2000), "Dragon");
        // Pre-anchor years stay in cycle.
        assert_eq!(chinese_zodiac(1899), "Pig");
    }
}
