use chrono::{Duration, NaiveDate};

use super::age::days_alive;

/// First notable days-alive count.
const FIRST_MILESTONE: i64 = 10_000;

/// Spacing of milestones after the first.
const MILESTONE_STEP: i64 = 5_000;

/// A round days-alive count and the calendar date it will be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub day_count: i64,
    pub date: NaiveDate,
}

/// The smallest milestone strictly greater than the current days-alive:
/// 10000, then every 5000 after. The returned date is the day that count is
/// reached.
pub fn next_milestone(birth: NaiveDate, now: NaiveDate) -> Milestone {
    let days = days_alive(birth, now);
    let day_count = if days < FIRST_MILESTONE {
        FIRST_MILESTONE
    } else {
        (days / MILESTONE_STEP + 1) * MILESTONE_STEP
    };
    Milestone {
        day_count,
        date: birth + Duration::days(day_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_newborn_heads_for_ten_thousand() {
        let birth = date(2024, 1, 1);
        let milestone = next_milestone(birth, birth);
        assert_eq!(milestone.day_count, 10_000);
        assert_eq!(milestone.date, birth + Duration::days(10_000));
    }

    #[test]
    fn test_milestone_is_strictly_greater_than_days_alive() {
        let birth = date(1970, 5, 20);
        for offset in [0, 1, 9_999, 10_000, 10_001, 14_999, 30_000, 31_337] {
            let now = birth + Duration::days(offset);
            let milestone = next_milestone(birth, now);
            assert!(milestone.day_count > days_alive(birth, now), "offset {offset}");
        }
    }

    #[test]
    fn test_exact_milestone_day_advances_to_next() {
        let birth = date(1990, 1, 1);
        let now = birth + Duration::days(10_000);
        assert_eq!(next_milestone(birth, now).day_count, 15_000);
    }

    #[test]
    fn test_beyond_thirty_thousand_steps_by_five_thousand() {
        let birth = date(1930, 1, 1);
        let now = birth + Duration::days(33_000);
        let milestone = next_milestone(birth, now);
        assert_eq!(milestone.day_count, 35_000);
        assert_eq!(milestone.date, birth + Duration::days(35_000));
    }
}
