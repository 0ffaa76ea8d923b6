//! Transition durations
//!
//! The widget writes its duration straight into a CSS custom property, so
//! the value is kept as the caller's CSS time string. [`TransitionDuration::as_millis`]
//! reads it back for tooling that wants a number.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A CSS `<time>` string such as `"0.5s"` or `"300ms"`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionDuration(Cow<'static, str>);

impl TransitionDuration {
    /// Duration used when none is configured
    pub const DEFAULT: TransitionDuration = TransitionDuration(Cow::Borrowed("0.5s"));

    /// Create a duration from a CSS time string, stored verbatim
    pub fn new(value: impl Into<String>) -> Self {
        TransitionDuration(Cow::Owned(value.into()))
    }

    /// Create a duration from an optional string; `None` yields [`TransitionDuration::DEFAULT`]
    pub fn from_option<S: Into<String>>(value: Option<S>) -> Self {
        value.map_or(TransitionDuration::DEFAULT, TransitionDuration::new)
    }

    /// Milliseconds from a millisecond (`300ms`), second (`0.5s`) or bare
    /// numeric (treated as ms) value. `None` when the string is not readable.
    pub fn as_millis(&self) -> Option<u32> {
        let input = self.0.trim();

        let (number, scale) = if let Some(ms) = input.strip_suffix("ms") {
            (ms, 1.0)
        } else if let Some(s) = input.strip_suffix('s') {
            (s, 1000.0)
        } else {
            (input, 1.0)
        };

        let value = number.trim().parse::<f32>().ok()? * scale;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(value.round() as u32)
    }

    /// The CSS time string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        TransitionDuration::DEFAULT
    }
}

impl fmt::Display for TransitionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TransitionDuration {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransitionDuration {
    fn from(value: &str) -> Self {
        TransitionDuration::new(value)
    }
}

impl From<String> for TransitionDuration {
    fn from(value: String) -> Self {
        TransitionDuration::new(value)
    }
}

impl From<Option<&str>> for TransitionDuration {
    fn from(value: Option<&str>) -> Self {
        TransitionDuration::from_option(value)
    }
}

impl From<Option<String>> for TransitionDuration {
    fn from(value: Option<String>) -> Self {
        TransitionDuration::from_option(value)
    }
}

impl Serialize for TransitionDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransitionDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(TransitionDuration::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration() {
        assert_eq!(TransitionDuration::default().as_str(), "0.5s");
        assert_eq!(
            TransitionDuration::from_option(None::<&str>),
            TransitionDuration::DEFAULT
        );
    }

    #[test]
    fn test_as_millis() {
        assert_eq!(TransitionDuration::from("0.5s").as_millis(), Some(500));
        assert_eq!(TransitionDuration::from("300ms").as_millis(), Some(300));
        assert_eq!(TransitionDuration::from(" 1.25s ").as_millis(), Some(1250));
        assert_eq!(TransitionDuration::from("120").as_millis(), Some(120));
        assert_eq!(TransitionDuration::from("var(--speed)").as_millis(), None);
        assert_eq!(TransitionDuration::from("-1s").as_millis(), None);
    }

    #[test]
    fn test_unreadable_duration_kept_verbatim() {
        let duration = TransitionDuration::new("calc(2 * 100ms)");
        assert_eq!(duration.to_string(), "calc(2 * 100ms)");
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Section {
            duration: TransitionDuration,
        }

        let section: Section = toml::from_str("duration = \"750ms\"").unwrap();
        assert_eq!(section.duration.as_millis(), Some(750));
    }
}
