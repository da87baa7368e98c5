//! Pure, stateless calculators over birth dates.
//!
//! - `age`: calendar-aware elapsed years/months/days, days-alive,
//!   next-birthday countdown
//! - `zodiac`: month/day to sign-name lookup, Chinese zodiac by year
//! - `milestone`: next round days-alive count and its date
//! - `events`: birthday filter over historical events
//! - `planets`: elapsed days as orbital "years" per planet
//!
//! Everything here takes explicit dates; nothing reads the clock, so the
//! calculators are trivially testable and idempotent.

pub mod age;
pub mod events;
pub mod milestone;
pub mod planets;
pub mod zodiac;

pub use age::{age_between, days_alive, days_until_birthday, AgePeriod};
pub use events::birthday_events;
pub use milestone::{next_milestone, Milestone};
pub use planets::{planetary_ages, Planet, PLANETS};
pub use zodiac::{chinese_zodiac, sign_for_date, sign_for_month_day, SignRange, SIGN_RANGES};
