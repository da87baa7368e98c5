use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated historical event. Rows are immutable once seeded; the store only
/// ever replaces the full list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
}

impl HistoricalEvent {
    /// Identity used for list diffing: date plus title. There is no
    /// surrogate key at this level.
    pub fn diff_key(&self) -> String {
        format!("{}:{}", self.date, self.title)
    }
}
