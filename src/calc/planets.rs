/// A planet and its orbital period in Earth days.
#[derive(Debug, Clone, Copy)]
pub struct Planet {
    pub name: &'static str,
    pub orbital_period_days: f64,
}

/// The seven planets used for cosmetic age conversion, ordered by distance
/// from the sun.
pub const PLANETS: [Planet; 7] = [
    Planet { name: "Mercury", orbital_period_days: 87.97 },
    Planet { name: "Venus", orbital_period_days: 224.70 },
    Planet { name: "Mars", orbital_period_days: 686.98 },
    Planet { name: "Jupiter", orbital_period_days: 4332.59 },
    Planet { name: "Saturn", orbital_period_days: 10759.22 },
    Planet { name: "Uranus", orbital_period_days: 30688.5 },
    Planet { name: "Neptune", orbital_period_days: 60182.0 },
];

/// Elapsed Earth days expressed as "years" on each planet, rounded to one
/// decimal place.
pub fn planetary_ages(earth_days: i64) -> Vec<(&'static str, f64)> {
    PLANETS
        .iter()
        .map(|planet| {
            let age = earth_days as f64 / planet.orbital_period_days;
            (planet.name, round_one_decimal(age))
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_orbital_period_is_one_planet_year() {
        for planet in PLANETS {
            let ages = planetary_ages(planet.orbital_period_days.round() as i64);
            let (_, age) = ages
                .iter()
                .find(|(name, _)| *name == planet.name)
                .unwrap();
            assert!((age - 1.0).abs() < 0.05, "{}: {age}", planet.name);
        }
    }

    #[test]
    fn test_zero_days_is_zero_everywhere() {
        for (_, age) in planetary_ages(0) {
            assert_eq!(age, 0.0);
        }
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 10000 Earth days on Mars: 14.556... rounds to 14.6.
        let ages = planetary_ages(10_000);
        let (_, mars) = ages.iter().find(|(name, _)| *name == "Mars").unwrap();
        assert_eq!(*mars, 14.6);
    }

    #[test]
    fn test_covers_all_seven_planets() {
        let ages = planetary_ages(365);
        assert_eq!(ages.len(), 7);
        assert_eq!(ages[0].0, "Mercury");
        assert_eq!(ages[6].0, "Neptune");
    }
}
