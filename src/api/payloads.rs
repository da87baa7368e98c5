//! Canned response payloads for the mock backend.
//!
//! One detail payload per sign, keyed by exact canonical name. The document
//! is parsed once on first use; the mock clones an entry per request and
//! fills in the per-call horoscope.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::dto::ZodiacSignDto;

/// Detail payloads for the `/signs/{name}` endpoint, in the remote's
/// camelCase wire shape.
pub(super) static SIGN_DETAILS: Lazy<HashMap<String, ZodiacSignDto>> = Lazy::new(|| {
    serde_json::from_str(SIGN_DETAILS_JSON).expect("canned sign payloads must parse")
});

const SIGN_DETAILS_JSON: &str = r#"
{
    "Aries": {
        "name": "Aries",
        "symbol": "♈",
        "dateRange": "Mar 21 - Apr 19",
        "personality": "Bold, ambitious, and confident. Aries are natural-born leaders who aren't afraid to take charge. They possess incredible energy and enthusiasm that inspires others.",
        "rulingPlanet": "Mars",
        "element": "Fire",
        "strengths": ["Courageous", "Determined", "Confident", "Enthusiastic", "Optimistic", "Honest", "Passionate"],
        "weaknesses": ["Impatient", "Moody", "Short-tempered", "Impulsive", "Aggressive"],
        "compatibilities": [
            {"signName": "Leo", "rating": 5, "description": "Excellent match! Both fire signs with strong personalities and mutual respect."},
            {"signName": "Sagittarius", "rating": 5, "description": "Great compatibility with shared love for adventure and new experiences."},
            {"signName": "Gemini", "rating": 4, "description": "Good match with exciting dynamics and intellectual stimulation."}
        ]
    },
    "Taurus": {
        "name": "Taurus",
        "symbol": "♉",
        "dateRange": "Apr 20 - May 20",
        "personality": "Reliable, patient, and devoted. Taurus values stability, comfort, and the finer things in life. They are grounded and practical.",
        "rulingPlanet": "Venus",
        "element": "Earth",
        "strengths": ["Reliable", "Patient", "Practical", "Devoted", "Responsible", "Stable"],
        "weaknesses": ["Stubborn", "Possessive", "Uncompromising"],
        "compatibilities": [
            {"signName": "Virgo", "rating": 5, "description": "Perfect earth sign pairing with shared values."},
            {"signName": "Capricorn", "rating": 5, "description": "Excellent compatibility and mutual understanding."},
            {"signName": "Cancer", "rating": 4, "description": "Strong emotional connection and loyalty."}
        ]
    },
    "Gemini": {
        "name": "Gemini",
        "symbol": "♊",
        "dateRange": "May 21 - Jun 20",
        "personality": "Adaptable, outgoing, and intelligent. Gemini loves communication, learning, and social connections. They are versatile and curious.",
        "rulingPlanet": "Mercury",
        "element": "Air",
        "strengths": ["Gentle", "Affectionate", "Curious", "Adaptable", "Quick learner", "Witty"],
        "weaknesses": ["Nervous", "Inconsistent", "Indecisive"],
        "compatibilities": [
            {"signName": "Libra", "rating": 5, "description": "Perfect air sign match with intellectual harmony."},
            {"signName": "Aquarius", "rating": 5, "description": "Intellectually stimulating and innovative partnership."},
            {"signName": "Aries", "rating": 4, "description": "Exciting and dynamic relationship full of energy."}
        ]
    },
    "Cancer": {
        "name": "Cancer",
        "symbol": "♋",
        "dateRange": "Jun 21 - Jul 22",
        "personality": "Intuitive, emotional, and protective. Cancer is deeply caring and values family and home. They are nurturing and empathetic.",
        "rulingPlanet": "Moon",
        "element": "Water",
        "strengths": ["Tenacious", "Highly imaginative", "Loyal", "Emotional", "Sympathetic", "Persuasive"],
        "weaknesses": ["Moody", "Pessimistic", "Suspicious", "Manipulative", "Insecure"],
        "compatibilities": [
            {"signName": "Scorpio", "rating": 5, "description": "Deep emotional connection and mutual understanding."},
            {"signName": "Pisces", "rating": 5, "description": "Beautiful water sign pairing with emotional depth."},
            {"signName": "Taurus", "rating": 4, "description": "Stable and nurturing relationship."}
        ]
    },
    "Leo": {
        "name": "Leo",
        "symbol": "♌",
        "dateRange": "Jul 23 - Aug 22",
        "personality": "Creative, passionate, and generous. Leo loves being in the spotlight and inspiring others. They are natural performers with big hearts.",
        "rulingPlanet": "Sun",
        "element": "Fire",
        "strengths": ["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful", "Humorous"],
        "weaknesses": ["Arrogant", "Stubborn", "Self-centered", "Inflexible", "Lazy"],
        "compatibilities": [
            {"signName": "Aries", "rating": 5, "description": "Dynamic fire sign partnership with mutual admiration."},
            {"signName": "Sagittarius", "rating": 5, "description": "Fun-loving and adventurous match."},
            {"signName": "Gemini", "rating": 4, "description": "Playful and exciting relationship."}
        ]
    },
    "Virgo": {
        "name": "Virgo",
        "symbol": "♍",
        "dateRange": "Aug 23 - Sep 22",
        "personality": "Analytical, practical, and hardworking. Virgo seeks perfection and pays attention to every detail. They are helpful and organized.",
        "rulingPlanet": "Mercury",
        "element": "Earth",
        "strengths": ["Loyal", "Analytical", "Kind", "Hardworking", "Practical"],
        "weaknesses": ["Shyness", "Worry", "Overly critical", "Perfectionist"],
        "compatibilities": [
            {"signName": "Taurus", "rating": 5, "description": "Stable earth sign match with shared values."},
            {"signName": "Capricorn", "rating": 5, "description": "Goal-oriented and practical partnership."},
            {"signName": "Cancer", "rating": 4, "description": "Nurturing and supportive relationship."}
        ]
    },
    "Libra": {
        "name": "Libra",
        "symbol": "♎",
        "dateRange": "Sep 23 - Oct 22",
        "personality": "Diplomatic, fair-minded, and social. Libra values harmony, balance, and beauty. They are peacemakers who seek justice.",
        "rulingPlanet": "Venus",
        "element": "Air",
        "strengths": ["Cooperative", "Diplomatic", "Gracious", "Fair-minded", "Social"],
        "weaknesses": ["Indecisive", "Avoids confrontations", "Self-pity"],
        "compatibilities": [
            {"signName": "Gemini", "rating": 5, "description": "Intellectual air sign connection with great communication."},
            {"signName": "Aquarius", "rating": 5, "description": "Harmonious and balanced match."},
            {"signName": "Leo", "rating": 4, "description": "Complementary opposites attract."}
        ]
    },
    "Scorpio": {
        "name": "Scorpio",
        "symbol": "♏",
        "dateRange": "Oct 23 - Nov 21",
        "personality": "Passionate, resourceful, and brave. Scorpio is intensely focused and mysterious. They possess powerful emotions and determination.",
        "rulingPlanet": "Pluto",
        "element": "Water",
        "strengths": ["Resourceful", "Brave", "Passionate", "Stubborn", "True friend"],
        "weaknesses": ["Distrusting", "Jealous", "Secretive", "Violent"],
        "compatibilities": [
            {"signName": "Cancer", "rating": 5, "description": "Deeply emotional water sign bond."},
            {"signName": "Pisces", "rating": 5, "description": "Intuitive and passionate match."},
            {"signName": "Virgo", "rating": 4, "description": "Complementary strengths and loyalty."}
        ]
    },
    "Sagittarius": {
        "name": "Sagittarius",
        "symbol": "♐",
        "dateRange": "Nov 22 - Dec 21",
        "personality": "Optimistic, adventurous, and philosophical. Sagittarius loves freedom, travel, and exploring new ideas. They are enthusiastic seekers.",
        "rulingPlanet": "Jupiter",
        "element": "Fire",
        "strengths": ["Generous", "Idealistic", "Great sense of humor"],
        "weaknesses": ["Promises more than can deliver", "Impatient", "Tactless"],
        "compatibilities": [
            {"signName": "Aries", "rating": 5, "description": "Adventurous fire sign pairing with endless energy."},
            {"signName": "Leo", "rating": 5, "description": "Optimistic and fun-loving match."},
            {"signName": "Aquarius", "rating": 4, "description": "Freedom-loving partnership."}
        ]
    },
    "Capricorn": {
        "name": "Capricorn",
        "symbol": "♑",
        "dateRange": "Dec 22 - Jan 19",
        "personality": "Ambitious, disciplined, and responsible. Capricorn is goal-oriented and values tradition. They are patient climbers of success.",
        "rulingPlanet": "Saturn",
        "element": "Earth",
        "strengths": ["Responsible", "Disciplined", "Self-control", "Good managers"],
        "weaknesses": ["Know-it-all", "Unforgiving", "Condescending", "Pessimistic"],
        "compatibilities": [
            {"signName": "Taurus", "rating": 5, "description": "Stable and practical earth signs."},
            {"signName": "Virgo", "rating": 5, "description": "Hardworking and dedicated match."},
            {"signName": "Scorpio", "rating": 4, "description": "Ambitious and determined partnership."}
        ]
    },
    "Aquarius": {
        "name": "Aquarius",
        "symbol": "♒",
        "dateRange": "Jan 20 - Feb 18",
        "personality": "Progressive, independent, and humanitarian. Aquarius is innovative and values intellectual connections. They are unique visionaries.",
        "rulingPlanet": "Uranus",
        "element": "Air",
        "strengths": ["Progressive", "Original", "Independent", "Humanitarian"],
        "weaknesses": ["Runs from emotional expression", "Temperamental", "Uncompromising"],
        "compatibilities": [
            {"signName": "Gemini", "rating": 5, "description": "Intellectually exciting air sign match."},
            {"signName": "Libra", "rating": 5, "description": "Social and harmonious pairing."},
            {"signName": "Sagittarius", "rating": 4, "description": "Independent and free-spirited."}
        ]
    },
    "Pisces": {
        "name": "Pisces",
        "symbol": "♓",
        "dateRange": "Feb 19 - Mar 20",
        "personality": "Compassionate, artistic, and intuitive. Pisces is deeply empathetic and imaginative. They are dreamers with profound emotional depth.",
        "rulingPlanet": "Neptune",
        "element": "Water",
        "strengths": ["Compassionate", "Artistic", "Intuitive", "Gentle", "Wise", "Musical"],
        "weaknesses": ["Fearful", "Overly trusting", "Sad", "Escape reality", "Victim mentality"],
        "compatibilities": [
            {"signName": "Cancer", "rating": 5, "description": "Deeply emotional water sign connection."},
            {"signName": "Scorpio", "rating": 5, "description": "Intuitive and passionate match."},
            {"signName": "Taurus", "rating": 4, "description": "Grounding and nurturing relationship."}
        ]
    }
}
"#;

/// Per-call horoscope pool. The remote picks one at random per response to
/// simulate daily updates.
pub(super) const HOROSCOPE_VARIATIONS: [&str; 12] = [
    "Today brings exciting opportunities for growth and self-discovery.",
    "Your creativity will shine bright today. Trust your instincts.",
    "A great day for meaningful connections and deep conversations.",
    "Focus on your goals today. Success is within reach.",
    "Take time for self-care and reflection. Balance is key.",
    "Unexpected surprises await. Stay open to new possibilities.",
    "Your hard work is about to pay off. Keep pushing forward.",
    "Communication is highlighted today. Express yourself clearly.",
    "Trust your intuition today. It won't lead you astray.",
    "A perfect day for collaboration and teamwork.",
    "Embrace change today. New beginnings are on the horizon.",
    "Your patience and persistence will be rewarded soon.",
];
