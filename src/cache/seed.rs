//! Initial reference data for first launch.
//!
//! Twelve fully-populated signs and a table of historical events, written
//! into the store when it is empty so the app works offline from the start.
//! After seeding, rows are only ever replaced by coordinator cache writes.

use chrono::NaiveDate;

use crate::models::{Compatibility, HistoricalEvent, ZodiacSign};

fn compat(sign_name: &str, rating: i32, description: &str) -> Compatibility {
    Compatibility {
        sign_name: sign_name.to_string(),
        rating,
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn sign(
    name: &str,
    symbol: &str,
    date_range: &str,
    personality: &str,
    ruling_planet: &str,
    element: &str,
    strengths: &[&str],
    weaknesses: &[&str],
    compatibilities: Vec<Compatibility>,
) -> ZodiacSign {
    ZodiacSign {
        name: name.to_string(),
        symbol: symbol.to_string(),
        date_range: date_range.to_string(),
        personality: personality.to_string(),
        ruling_planet: ruling_planet.to_string(),
        element: element.to_string(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        weaknesses: weaknesses.iter().map(|s| s.to_string()).collect(),
        compatibilities,
        daily_horoscope: None,
    }
}

/// The twelve signs with complete information.
pub fn initial_signs() -> Vec<ZodiacSign> {
    vec![
        sign(
            "Aries",
            "♈",
            "Mar 21 - Apr 19",
            "Bold, ambitious, and energetic. Aries are natural leaders who love challenges and adventures.",
            "Mars",
            "Fire",
            &["Courageous", "Determined", "Confident", "Enthusiastic", "Optimistic"],
            &["Impatient", "Moody", "Short-tempered", "Impulsive", "Aggressive"],
            vec![
                compat("Leo", 5, "Excellent match with shared fire energy"),
                compat("Sagittarius", 5, "Dynamic duo with adventurous spirits"),
                compat("Gemini", 4, "Exciting but challenging combination"),
            ],
        ),
        sign(
            "Taurus",
            "♉",
            "Apr 20 - May 20",
            "Reliable, patient, and devoted. Taurus values stability and enjoys life's pleasures.",
            "Venus",
            "Earth",
            &["Reliable", "Patient", "Practical", "Devoted", "Responsible"],
            &["Stubborn", "Possessive", "Uncompromising"],
            vec![
                compat("Virgo", 5, "Perfect earth sign match"),
                compat("Capricorn", 4, "Stable and supportive relationship"),
                compat("Cancer", 4, "Emotional connection and loyalty"),
            ],
        ),
        sign(
            "Gemini",
            "♊",
            "May 21 - Jun 20",
            "Curious, adaptable, and communicative. Gemini loves learning and socializing.",
            "Mercury",
            "Air",
            &["Gentle", "Affectionate", "Curious", "Adaptable", "Quick learner"],
            &["Nervous", "Inconsistent", "Indecisive"],
            vec![
                compat("Libra", 5, "Intellectual and social harmony"),
                compat("Aquarius", 5, "Meeting of brilliant minds"),
                compat("Aries", 4, "Exciting but needs balance"),
            ],
        ),
        sign(
            "Cancer",
            "♋",
            "Jun 21 - Jul 22",
            "Intuitive, emotional, and protective. Cancer is deeply caring and family-oriented.",
            "Moon",
            "Water",
            &["Tenacious", "Loyal", "Emotional", "Sympathetic", "Persuasive"],
            &["Moody", "Pessimistic", "Suspicious", "Manipulative", "Insecure"],
            vec![
                compat("Scorpio", 5, "Deep emotional connection"),
                compat("Pisces", 5, "Intuitive and compassionate bond"),
                compat("Taurus", 4, "Nurturing and stable"),
            ],
        ),
        sign(
            "Leo",
            "♌",
            "Jul 23 - Aug 22",
            "Creative, passionate, and generous. Leo loves being in the spotlight and inspiring others.",
            "Sun",
            "Fire",
            &["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful", "Humorous"],
            &["Arrogant", "Stubborn", "Self-centered", "Inflexible"],
            vec![
                compat("Aries", 5, "Powerful fire sign combination"),
                compat("Sagittarius", 5, "Adventure and passion"),
                compat("Gemini", 4, "Fun but challenging"),
            ],
        ),
        sign(
            "Virgo",
            "♍",
            "Aug 23 - Sep 22",
            "Analytical, practical, and hardworking. Virgo pays attention to details and loves helping others.",
            "Mercury",
            "Earth",
            &["Loyal", "Analytical", "Kind", "Hardworking", "Practical"],
            &["Shyness", "Worry", "Overly critical", "Perfectionist"],
            vec![
                compat("Taurus", 5, "Grounded and harmonious"),
                compat("Capricorn", 5, "Shared values and goals"),
                compat("Cancer", 4, "Caring and supportive"),
            ],
        ),
        sign(
            "Libra",
            "♎",
            "Sep 23 - Oct 22",
            "Diplomatic, gracious, and fair-minded. Libra seeks balance and harmony in all things.",
            "Venus",
            "Air",
            &["Cooperative", "Diplomatic", "Gracious", "Fair-minded", "Social"],
            &["Indecisive", "Avoids confrontations", "Self-pity"],
            vec![
                compat("Gemini", 5, "Intellectual and social connection"),
                compat("Aquarius", 5, "Shared love for harmony"),
                compat("Leo", 4, "Attraction but different needs"),
            ],
        ),
        sign(
            "Scorpio",
            "♏",
            "Oct 23 - Nov 21",
            "Passionate, resourceful, and brave. Scorpio is intense and deeply emotional.",
            "Pluto",
            "Water",
            &["Resourceful", "Brave", "Passionate", "Stubborn", "True friend"],
            &["Distrusting", "Jealous", "Secretive", "Violent"],
            vec![
                compat("Cancer", 5, "Deep emotional understanding"),
                compat("Pisces", 5, "Intuitive and passionate"),
                compat("Virgo", 4, "Complementary strengths"),
            ],
        ),
        sign(
            "Sagittarius",
            "♐",
            "Nov 22 - Dec 21",
            "Optimistic, adventurous, and philosophical. Sagittarius loves freedom and exploration.",
            "Jupiter",
            "Fire",
            &["Generous", "Idealistic", "Great sense of humor"],
            &["Promises more than can deliver", "Impatient", "Tactless"],
            vec![
                compat("Aries", 5, "Adventurous and energetic"),
                compat("Leo", 5, "Passionate fire connection"),
                compat("Aquarius", 4, "Freedom-loving pair"),
            ],
        ),
        sign(
            "Capricorn",
            "♑",
            "Dec 22 - Jan 19",
            "Responsible, disciplined, and ambitious. Capricorn is focused on achieving goals.",
            "Saturn",
            "Earth",
            &["Responsible", "Disciplined", "Self-control", "Good managers"],
            &["Know-it-all", "Unforgiving", "Condescending", "Pessimistic"],
            vec![
                compat("Taurus", 5, "Stable and committed"),
                compat("Virgo", 5, "Practical and supportive"),
                compat("Scorpio", 4, "Ambitious power couple"),
            ],
        ),
        sign(
            "Aquarius",
            "♒",
            "Jan 20 - Feb 18",
            "Progressive, independent, and humanitarian. Aquarius thinks outside the box.",
            "Uranus",
            "Air",
            &["Progressive", "Original", "Independent", "Humanitarian"],
            &["Runs from emotional expression", "Temperamental", "Uncompromising"],
            vec![
                compat("Gemini", 5, "Intellectual and innovative"),
                compat("Libra", 5, "Social and idealistic"),
                compat("Sagittarius", 4, "Free-spirited connection"),
            ],
        ),
        sign(
            "Pisces",
            "♓",
            "Feb 19 - Mar 20",
            "Compassionate, artistic, and intuitive. Pisces is deeply empathetic and creative.",
            "Neptune",
            "Water",
            &["Compassionate", "Artistic", "Intuitive", "Gentle", "Wise", "Musical"],
            &["Fearful", "Overly trusting", "Sad", "Desire to escape reality"],
            vec![
                compat("Cancer", 5, "Emotional and nurturing"),
                compat("Scorpio", 5, "Deep spiritual connection"),
                compat("Taurus", 4, "Grounding and romance"),
            ],
        ),
    ]
}

fn event(year: i32, month: u32, day: u32, title: &str, description: &str) -> HistoricalEvent {
    HistoricalEvent {
        // Constants below are all valid calendar dates.
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Major world events, 1990-2020.
pub fn initial_events() -> Vec<HistoricalEvent> {
    vec![
        event(
            1990, 8, 2,
            "Invasion of Kuwait",
            "The Gulf War begins as Iraq invades its neighbor, Kuwait.",
        ),
        event(
            1991, 12, 26,
            "End of the Soviet Union",
            "The Soviet Union is officially dissolved, ending the Cold War.",
        ),
        event(
            1994, 5, 6,
            "Channel Tunnel Opens",
            "The Channel Tunnel opens, connecting the UK and France by rail for the first time.",
        ),
        event(
            1997, 7, 1,
            "Hong Kong Handover",
            "The United Kingdom hands over sovereignty of Hong Kong to China.",
        ),
        event(
            2001, 9, 11,
            "9/11 Attacks",
            "Coordinated terrorist attacks occur in the United States, changing global politics.",
        ),
        event(
            2007, 1, 9,
            "First iPhone Revealed",
            "Steve Jobs unveils the first iPhone, revolutionizing the mobile phone industry.",
        ),
        event(
            2008, 11, 4,
            "First Black US President",
            "Barack Obama is elected as the first African American President of the United States.",
        ),
        event(
            2015, 12, 12,
            "Paris Agreement",
            "196 countries adopt a landmark agreement to combat climate change.",
        ),
        event(
            2020, 3, 11,
            "COVID-19 Pandemic Declared",
            "The World Health Organization declares the COVID-19 outbreak a global pandemic.",
        ),
    ]
}
