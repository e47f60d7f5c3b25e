//! The closed sentiment domain.
//!
//! A classifier label is an arbitrary string owned by the model artifact;
//! [`Sentiment`] is the four-value domain the rest of the app works in.
//! Parsing is the only constructor, and parsing an unknown label yields
//! absence rather than an error.
//!
//! The emoji/color projection deliberately lives in [`crate::ui`], not here:
//! the domain type stays presentation-free and the lookup table stays
//! independently testable.

use std::fmt;

/// One of the four sentiment categories the classifier vocabulary maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

impl Sentiment {
    /// Parse a classifier label.
    ///
    /// Matching is exact and case-sensitive: only the four canonical
    /// uppercase labels are recognized. Anything else (empty string,
    /// lowercase variants, unknown vocabulary) is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "POSITIVE" => Some(Sentiment::Positive),
            "NEGATIVE" => Some(Sentiment::Negative),
            "MIXED" => Some(Sentiment::Mixed),
            "NEUTRAL" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    /// The canonical label string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Mixed => "MIXED",
            Sentiment::Neutral => "NEUTRAL",
        }
    }

    /// All four categories, in display order.
    pub fn all() -> [Sentiment; 4] {
        [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Mixed,
            Sentiment::Neutral,
        ]
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_labels_parse() {
        assert_eq!(Sentiment::from_label("POSITIVE"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("NEGATIVE"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label("MIXED"), Some(Sentiment::Mixed));
        assert_eq!(Sentiment::from_label("NEUTRAL"), Some(Sentiment::Neutral));
    }

    #[test]
    fn test_unknown_labels_yield_absence() {
        assert_eq!(Sentiment::from_label(""), None);
        assert_eq!(Sentiment::from_label("UNKNOWN"), None);
        assert_eq!(Sentiment::from_label("MAYBE"), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Sentiment::from_label("positive"), None);
        assert_eq!(Sentiment::from_label("Positive"), None);
        assert_eq!(Sentiment::from_label("neutral"), None);
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert_eq!(Sentiment::from_label(" POSITIVE"), None);
        assert_eq!(Sentiment::from_label("POSITIVE\n"), None);
    }

    #[test]
    fn test_label_roundtrip() {
        for sentiment in Sentiment::all() {
            assert_eq!(Sentiment::from_label(sentiment.as_str()), Some(sentiment));
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Sentiment::Positive.to_string(), "POSITIVE");
        assert_eq!(Sentiment::Mixed.to_string(), "MIXED");
    }
}
