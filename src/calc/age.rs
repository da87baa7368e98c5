use chrono::{Datelike, Months, NaiveDate};

/// Elapsed calendar time between two dates: full years, then remaining
/// months, then remaining days. Civil-calendar period semantics, not naive
/// day division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgePeriod {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl std::fmt::Display for AgePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Calendar-aware age between `birth` and `now`. A `now` before `birth`
/// clamps to zero.
pub fn age_between(birth: NaiveDate, now: NaiveDate) -> AgePeriod {
    if now < birth {
        return AgePeriod::default();
    }

    let mut total_months =
        (now.year() - birth.year()) * 12 + now.month() as i32 - birth.month() as i32;
    // Anchor at birth plus whole months (day-of-month clamped to month end,
    // so Jan 31 + 1 month anchors at Feb 28/29); borrow one month when the
    // anchor overshoots.
    let mut anchor = birth + Months::new(total_months as u32);
    if anchor > now {
        total_months -= 1;
        anchor = birth + Months::new(total_months as u32);
    }

    AgePeriod {
        years: (total_months / 12) as u32,
        months: (total_months % 12) as u32,
        days: (now - anchor).num_days() as u32,
    }
}

/// Whole days elapsed between `birth` and `now`. Negative when `now`
/// precedes `birth`.
pub fn days_alive(birth: NaiveDate, now: NaiveDate) -> i64 {
    (now - birth).num_days()
}

/// Days from `today` until the next birthday anniversary. A birthday
/// falling on or before `today` this year counts toward next year.
pub fn days_until_birthday(birth: NaiveDate, today: NaiveDate) -> i64 {
    let this_year = anniversary(birth, today.year());
    let next = if this_year <= today {
        anniversary(birth, today.year() + 1)
    } else {
        this_year
    };
    (next - today).num_days()
}

// Feb 29 anniversaries land on Feb 28 in common years.
fn anniversary(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(birth))
}
