use serde::{Deserialize, Serialize};

/// The twelve canonical sign names, in calendar order starting from the
/// spring equinox. These are the exact-match cache keys and the only names
/// the remote source recognizes.
pub const CANONICAL_SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// A zodiac sign with its descriptive attributes.
///
/// `name` is the stable identity - cache rows are keyed by it and
/// compatibility entries reference partner signs through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacSign {
    pub name: String,
    pub symbol: String,
    pub date_range: String,
    pub personality: String,
    pub ruling_planet: String,
    pub element: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub compatibilities: Vec<Compatibility>,
    /// Free-text that varies per remote fetch. Seeded rows start without one.
    #[serde(default)]
    pub daily_horoscope: Option<String>,
}

impl ZodiacSign {
    /// A record whose personality text is empty is a partial seed (name and
    /// symbol only) and is treated as a cache miss by the coordinator.
    pub fn is_complete(&self) -> bool {
        !self.personality.is_empty()
    }
}

/// A directed compatibility rating from one sign toward another.
/// Ratings are 1-5 by convention; not enforced. A's entry for B need not
/// mirror B's entry for A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    pub sign_name: String,
    pub rating: i32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_are_twelve_and_unique() {
        let mut names = CANONICAL_SIGN_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_completeness_heuristic() {
        let mut sign = ZodiacSign {
            name: "Aries".to_string(),
            symbol: "♈".to_string(),
            date_range: String::new(),
            personality: String::new(),
            ruling_planet: String::new(),
            element: String::new(),
            strengths: vec![],
            weaknesses: vec![],
            compatibilities: vec![],
            daily_horoscope: None,
        };
        assert!(!sign.is_complete());

        sign.personality = "Bold and ambitious.".to_string();
        assert!(sign.is_complete());
    }
}
