//! Locale value type and canonicalization.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The locale every resolution falls back to.
pub const DEFAULT_LOCALE: Locale = Locale::EnCa;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Canonical language/region tag. A small closed set: every raw input is
/// either canonicalized into one of these or defaults to `en-CA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Canadian English, `en-CA`. The default.
    #[default]
    EnCa,
    /// Canadian French, `fr-CA`.
    FrCa,
}

impl Locale {
    /// Canonicalize a raw locale tag. Never fails.
    ///
    /// Case-insensitive: `"en"` and `"en-CA"` map to [`Locale::EnCa`],
    /// `"fr"` and `"fr-CA"` to [`Locale::FrCa`]. Anything unrecognized
    /// silently defaults to `en-CA`.
    pub fn canonical(input: &str) -> Locale {
        match input.trim().to_ascii_lowercase().as_str() {
            "en" | "en-ca" => Locale::EnCa,
            "fr" | "fr-ca" => Locale::FrCa,
            _ => DEFAULT_LOCALE,
        }
    }

    /// The canonical tag for this locale.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EnCa => "en-CA",
            Locale::FrCa => "fr-CA",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Strict parsing
// ---------------------------------------------------------------------------

/// Error returned by the strict [`FromStr`] impl for unrecognized tags.
///
/// Runtime paths never surface this; they use [`Locale::canonical`] and
/// degrade silently. The strict parser exists for callers that need to
/// distinguish bad input (configuration validation, tooling).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized locale tag: {0:?}")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-ca" => Ok(Locale::EnCa),
            "fr" | "fr-ca" => Ok(Locale::FrCa),
            _ => Err(LocaleParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_short_tags() {
        assert_eq!(Locale::canonical("en"), Locale::EnCa);
        assert_eq!(Locale::canonical("fr"), Locale::FrCa);
    }

    #[test]
    fn canonical_full_tags_pass_through() {
        assert_eq!(Locale::canonical("en-CA"), Locale::EnCa);
        assert_eq!(Locale::canonical("fr-CA"), Locale::FrCa);
    }

    #[test]
    fn canonical_is_case_insensitive() {
        assert_eq!(Locale::canonical("FR-ca"), Locale::FrCa);
        assert_eq!(Locale::canonical("EN-CA"), Locale::EnCa);
    }

    #[test]
    fn canonical_trims_whitespace() {
        assert_eq!(Locale::canonical("  fr-CA "), Locale::FrCa);
    }

    #[test]
    fn canonical_unrecognized_defaults() {
        assert_eq!(Locale::canonical("xx"), Locale::EnCa);
        assert_eq!(Locale::canonical(""), Locale::EnCa);
        assert_eq!(Locale::canonical("fr-FR"), Locale::EnCa);
    }

    #[test]
    fn as_str_round_trip() {
        assert_eq!(Locale::canonical(Locale::EnCa.as_str()), Locale::EnCa);
        assert_eq!(Locale::canonical(Locale::FrCa.as_str()), Locale::FrCa);
    }

    #[test]
    fn display() {
        assert_eq!(Locale::EnCa.to_string(), "en-CA");
        assert_eq!(Locale::FrCa.to_string(), "fr-CA");
    }

    #[test]
    fn default_is_en_ca() {
        assert_eq!(Locale::default(), DEFAULT_LOCALE);
        assert_eq!(DEFAULT_LOCALE, Locale::EnCa);
    }

    #[test]
    fn strict_parse_ok() {
        assert_eq!("fr-CA".parse::<Locale>().unwrap(), Locale::FrCa);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnCa);
    }

    #[test]
    fn strict_parse_err() {
        let err = "klingon".parse::<Locale>().unwrap_err();
        assert_eq!(err, LocaleParseError("klingon".to_string()));
        assert!(err.to_string().contains("klingon"));
    }
}
