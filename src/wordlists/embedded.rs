//! Embedded fallback word list
//!
//! A small set of common 5-letter words used when no word file is supplied.
//! The real deployment points `--words` at a full accepted-guess list.

/// Fallback accepted guesses
pub const FALLBACK: &[&str] = &[
    "ABOUT", "ABOVE", "AGAIN", "ALONE", "ANGEL", "APPLE", "ARISE", "BEGIN", "BIRTH", "BLESS",
    "BOARD", "BRAVE", "BREAD", "BRING", "BUILD", "CHARM", "CHILD", "CLEAN", "CLIMB", "CLOUD",
    "CRANE", "CROWN", "DAILY", "DREAM", "DRINK", "EARTH", "ERASE", "FAITH", "FEAST", "FIELD",
    "FIRST", "FLOOR", "FOCUS", "FRESH", "FRUIT", "GIVEN", "GLORY", "GRACE", "GRAIN", "GREAT",
    "GREEN", "GUARD", "GUIDE", "HAPPY", "HEARD", "HEART", "HONOR", "HOUSE", "HUMAN", "IRATE",
    "JUDGE", "KNEEL", "LEAST", "LIGHT", "LIVES", "LOVED", "MERCY", "MONTH", "MUSIC", "NIGHT",
    "NOBLE", "OFFER", "ORDER", "PEACE", "PLACE", "PLAIN", "POWER", "PRAYS", "PRIDE", "PROVE",
    "PSALM", "QUIET", "RAISE", "REACH", "RIGHT", "RIVER", "ROBOT", "ROUND", "SERVE", "SHARE",
    "SHEEP", "SHINE", "SLATE", "SPEAK", "SPEED", "SPENT", "SPIRE", "STAND", "START", "STONE",
    "STORY", "TEACH", "THANK", "THEIR", "THINK", "TIMES", "TRUST", "TRUTH", "UNITY", "VALUE",
    "VERSE", "VOICE", "WATCH", "WATER", "WHEAT", "WHOLE", "WORDS", "WORLD", "WORTH", "WRITE",
    "YIELD", "YOUNG", "YOURS",
];
