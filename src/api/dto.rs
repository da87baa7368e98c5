//! Wire types for the remote zodiac payload.
//!
//! Field names follow the remote's camelCase convention; the coordinator
//! converts these into the domain models before anything is cached.

use serde::{Deserialize, Serialize};

use crate::models::{Compatibility, ZodiacSign};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityDto {
    pub sign_name: String,
    pub rating: i32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacSignDto {
    pub name: String,
    pub symbol: String,
    pub date_range: String,
    pub personality: String,
    pub ruling_planet: String,
    pub element: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub compatibilities: Vec<CompatibilityDto>,
    /// Varies per call; absent from the static payload table, filled in by
    /// the mock per response.
    #[serde(default)]
    pub daily_horoscope: Option<String>,
}

impl From<CompatibilityDto> for Compatibility {
    fn from(dto: CompatibilityDto) -> Self {
        Compatibility {
            sign_name: dto.sign_name,
            rating: dto.rating,
            description: dto.description,
        }
    }
}

impl From<ZodiacSignDto> for ZodiacSign {
    fn from(dto: ZodiacSignDto) -> Self {
        ZodiacSign {
            name: dto.name,
            symbol: dto.symbol,
            date_range: dto.date_range,
            personality: dto.personality,
            ruling_planet: dto.ruling_planet,
            element: dto.element,
            strengths: dto.strengths,
            weaknesses: dto.weaknesses,
            compatibilities: dto.compatibilities.into_iter().map(Into::into).collect(),
            daily_horoscope: dto.daily_horoscope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_uses_camel_case_wire_names() {
        let json = r#"{
            "name": "Aries",
            "symbol": "♈",
            "dateRange": "Mar 21 - Apr 19",
            "personality": "Bold.",
            "rulingPlanet": "Mars",
            "element": "Fire",
            "strengths": ["Courageous"],
            "weaknesses": ["Impatient"],
            "compatibilities": [
                {"signName": "Leo", "rating": 5, "description": "Excellent match."}
            ],
            "dailyHoroscope": "A good day."
        }"#;

        let dto: ZodiacSignDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.date_range, "Mar 21 - Apr 19");
        assert_eq!(dto.compatibilities[0].sign_name, "Leo");

        let sign: ZodiacSign = dto.into();
        assert_eq!(sign.ruling_planet, "Mars");
        assert_eq!(sign.daily_horoscope.as_deref(), Some("A good day."));
    }

    #[test]
    fn test_daily_horoscope_defaults_when_absent() {
        let json = r#"{
            "name": "Aries",
            "symbol": "♈",
            "dateRange": "Mar 21 - Apr 19",
            "personality": "Bold.",
            "rulingPlanet": "Mars",
            "element": "Fire",
            "strengths": [],
            "weaknesses": [],
            "compatibilities": []
        }"#;

        let dto: ZodiacSignDto = serde_json::from_str(json).unwrap();
        assert!(dto.daily_horoscope.is_none());
    }
}
