//! CSS easing functions
//!
//! An [`Easing`] wraps the timing-function string written into the widget's
//! `--roller-easing` custom property. The presets cover the standard CSS
//! keywords plus cubic-bezier approximations of the common interpolation
//! shapes (sine, quad, cubic, quart, quint, expo, circ, back).
//!
//! Custom strings are never validated. A malformed timing function is a
//! rendering-layer concern and passes through unchanged.
//!
//! # Example
//!
//! ```
//! use roller_animation::Easing;
//!
//! assert_eq!(Easing::default(), Easing::LINEAR);
//! assert_eq!(Easing::from_option(None::<&str>).as_str(), "linear");
//!
//! let custom = Easing::new("cubic-bezier(0.4, 0, 0.2, 1)");
//! assert_eq!(custom.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
//!
//! assert_eq!(Easing::resolve("ease-out-back"), Easing::EASE_OUT_BACK);
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A CSS easing-function designator
///
/// Equality, hashing and formatting all go through the wrapped string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Easing(Cow<'static, str>);

impl Easing {
    // Standard CSS keywords
    pub const LINEAR: Easing = Easing::preset_str("linear");
    pub const EASE: Easing = Easing::preset_str("ease");
    pub const EASE_IN: Easing = Easing::preset_str("ease-in");
    pub const EASE_OUT: Easing = Easing::preset_str("ease-out");
    pub const EASE_IN_OUT: Easing = Easing::preset_str("ease-in-out");

    // Cubic-bezier presets
    pub const EASE_IN_SINE: Easing = Easing::preset_str("cubic-bezier(0.12, 0, 0.39, 0)");
    pub const EASE_OUT_SINE: Easing = Easing::preset_str("cubic-bezier(0.61, 1, 0.88, 1)");
    pub const EASE_IN_OUT_SINE: Easing = Easing::preset_str("cubic-bezier(0.37, 0, 0.63, 1)");

    pub const EASE_IN_QUAD: Easing = Easing::preset_str("cubic-bezier(0.11, 0, 0.5, 0)");
    pub const EASE_OUT_QUAD: Easing = Easing::preset_str("cubic-bezier(0.5, 1, 0.89, 1)");
    pub const EASE_IN_OUT_QUAD: Easing = Easing::preset_str("cubic-bezier(0.45, 0, 0.55, 1)");

    pub const EASE_IN_CUBIC: Easing = Easing::preset_str("cubic-bezier(0.32, 0, 0.67, 0)");
    pub const EASE_OUT_CUBIC: Easing = Easing::preset_str("cubic-bezier(0.33, 1, 0.68, 1)");
    pub const EASE_IN_OUT_CUBIC: Easing = Easing::preset_str("cubic-bezier(0.65, 0, 0.35, 1)");

    pub const EASE_IN_QUART: Easing = Easing::preset_str("cubic-bezier(0.5, 0, 0.75, 0)");
    pub const EASE_OUT_QUART: Easing = Easing::preset_str("cubic-bezier(0.25, 1, 0.5, 1)");
    pub const EASE_IN_OUT_QUART: Easing = Easing::preset_str("cubic-bezier(0.76, 0, 0.24, 1)");

    pub const EASE_IN_QUINT: Easing = Easing::preset_str("cubic-bezier(0.64, 0, 0.78, 0)");
    pub const EASE_OUT_QUINT: Easing = Easing::preset_str("cubic-bezier(0.22, 1, 0.36, 1)");
    pub const EASE_IN_OUT_QUINT: Easing = Easing::preset_str("cubic-bezier(0.83, 0, 0.17, 1)");

    pub const EASE_IN_EXPO: Easing = Easing::preset_str("cubic-bezier(0.7, 0, 0.84, 0)");
    pub const EASE_OUT_EXPO: Easing = Easing::preset_str("cubic-bezier(0.16, 1, 0.3, 1)");
    pub const EASE_IN_OUT_EXPO: Easing = Easing::preset_str("cubic-bezier(0.87, 0, 0.13, 1)");

    pub const EASE_IN_CIRC: Easing = Easing::preset_str("cubic-bezier(0.55, 0, 1, 0.45)");
    pub const EASE_OUT_CIRC: Easing = Easing::preset_str("cubic-bezier(0, 0.55, 0.45, 1)");
    pub const EASE_IN_OUT_CIRC: Easing = Easing::preset_str("cubic-bezier(0.85, 0, 0.15, 1)");

    pub const EASE_IN_BACK: Easing = Easing::preset_str("cubic-bezier(0.36, 0, 0.66, -0.56)");
    pub const EASE_OUT_BACK: Easing = Easing::preset_str("cubic-bezier(0.34, 1.56, 0.64, 1)");
    pub const EASE_IN_OUT_BACK: Easing = Easing::preset_str("cubic-bezier(0.68, -0.6, 0.32, 1.6)");

    /// Every preset, keyed by its kebab-case name
    pub const PRESETS: [(&'static str, Easing); 29] = [
        ("linear", Easing::LINEAR),
        ("ease", Easing::EASE),
        ("ease-in", Easing::EASE_IN),
        ("ease-out", Easing::EASE_OUT),
        ("ease-in-out", Easing::EASE_IN_OUT),
        ("ease-in-sine", Easing::EASE_IN_SINE),
        ("ease-out-sine", Easing::EASE_OUT_SINE),
        ("ease-in-out-sine", Easing::EASE_IN_OUT_SINE),
        ("ease-in-quad", Easing::EASE_IN_QUAD),
        ("ease-out-quad", Easing::EASE_OUT_QUAD),
        ("ease-in-out-quad", Easing::EASE_IN_OUT_QUAD),
        ("ease-in-cubic", Easing::EASE_IN_CUBIC),
        ("ease-out-cubic", Easing::EASE_OUT_CUBIC),
        ("ease-in-out-cubic", Easing::EASE_IN_OUT_CUBIC),
        ("ease-in-quart", Easing::EASE_IN_QUART),
        ("ease-out-quart", Easing::EASE_OUT_QUART),
        ("ease-in-out-quart", Easing::EASE_IN_OUT_QUART),
        ("ease-in-quint", Easing::EASE_IN_QUINT),
        ("ease-out-quint", Easing::EASE_OUT_QUINT),
        ("ease-in-out-quint", Easing::EASE_IN_OUT_QUINT),
        ("ease-in-expo", Easing::EASE_IN_EXPO),
        ("ease-out-expo", Easing::EASE_OUT_EXPO),
        ("ease-in-out-expo", Easing::EASE_IN_OUT_EXPO),
        ("ease-in-circ", Easing::EASE_IN_CIRC),
        ("ease-out-circ", Easing::EASE_OUT_CIRC),
        ("ease-in-out-circ", Easing::EASE_IN_OUT_CIRC),
        ("ease-in-back", Easing::EASE_IN_BACK),
        ("ease-out-back", Easing::EASE_OUT_BACK),
        ("ease-in-out-back", Easing::EASE_IN_OUT_BACK),
    ];

    const fn preset_str(value: &'static str) -> Self {
        Easing(Cow::Borrowed(value))
    }

    /// Create an easing from a CSS timing-function string, stored verbatim
    pub fn new(value: impl Into<String>) -> Self {
        Easing(Cow::Owned(value.into()))
    }

    /// Create an easing from an optional string; `None` yields [`Easing::LINEAR`]
    pub fn from_option<S: Into<String>>(value: Option<S>) -> Self {
        value.map_or(Easing::LINEAR, Easing::new)
    }

    /// Look up a preset by its kebab-case name (case-insensitive)
    pub fn preset(name: &str) -> Option<Easing> {
        let name = name.trim();
        Self::PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, easing)| easing.clone())
    }

    /// Resolve a preset name, falling back to the string as a custom easing
    ///
    /// `"ease-in-out-back"` becomes the cubic-bezier preset, while
    /// `"steps(4, end)"` is kept as written.
    pub fn resolve(value: &str) -> Easing {
        Self::preset(value).unwrap_or_else(|| Easing::new(value))
    }

    /// The name of the preset this easing matches, if any
    pub fn preset_name(&self) -> Option<&'static str> {
        Self::PRESETS
            .iter()
            .find(|(_, easing)| easing == self)
            .map(|(name, _)| *name)
    }

    /// Whether this easing is a custom string rather than a preset
    pub fn is_custom(&self) -> bool {
        self.preset_name().is_none()
    }

    /// The CSS timing-function string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::LINEAR
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Easing {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Easing {
    fn from(value: &str) -> Self {
        Easing::new(value)
    }
}

impl From<String> for Easing {
    fn from(value: String) -> Self {
        Easing::new(value)
    }
}

impl From<Option<&str>> for Easing {
    fn from(value: Option<&str>) -> Self {
        Easing::from_option(value)
    }
}

impl From<Option<String>> for Easing {
    fn from(value: Option<String>) -> Self {
        Easing::from_option(value)
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(Easing::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_linear() {
        assert_eq!(Easing::from_option(None::<String>), Easing::LINEAR);
        assert_eq!(Easing::from(None::<&str>).to_string(), "linear");
        assert_eq!(Easing::default().as_str(), "linear");
    }

    #[test]
    fn test_custom_string_is_verbatim() {
        let easing = Easing::from("cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(easing.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
        assert!(easing.is_custom());

        // No validation, garbage passes through
        let broken = Easing::new("  not-a-curve(");
        assert_eq!(broken.as_str(), "  not-a-curve(");
    }

    #[test]
    fn test_preset_strings_reformat_identically() {
        for (name, preset) in Easing::PRESETS.iter() {
            let rebuilt = Easing::new(preset.to_string());
            assert_eq!(&rebuilt, preset, "{name} did not round-trip");
            assert_eq!(rebuilt.to_string(), preset.as_str());
        }
    }

    #[test]
    fn test_bezier_presets_exact() {
        assert_eq!(Easing::EASE_IN_SINE.as_str(), "cubic-bezier(0.12, 0, 0.39, 0)");
        assert_eq!(Easing::EASE_OUT_CIRC.as_str(), "cubic-bezier(0, 0.55, 0.45, 1)");
        assert_eq!(
            Easing::EASE_IN_OUT_BACK.as_str(),
            "cubic-bezier(0.68, -0.6, 0.32, 1.6)"
        );
        assert_eq!(Easing::EASE_IN_OUT.as_str(), "ease-in-out");
    }

    #[test]
    fn test_preset_names_unique() {
        let mut names: Vec<_> = Easing::PRESETS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Easing::PRESETS.len());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Easing::preset("ease-out-expo"), Some(Easing::EASE_OUT_EXPO));
        assert_eq!(Easing::preset(" Ease-In "), Some(Easing::EASE_IN));
        assert_eq!(Easing::preset("bounce"), None);

        assert_eq!(Easing::resolve("ease-in-quad"), Easing::EASE_IN_QUAD);
        assert_eq!(Easing::resolve("steps(4, end)").as_str(), "steps(4, end)");

        assert_eq!(Easing::EASE_OUT_QUINT.preset_name(), Some("ease-out-quint"));
        // A custom string spelled like a preset's CSS value is that preset
        assert_eq!(Easing::new("ease").preset_name(), Some("ease"));
    }

    #[test]
    fn test_serde_plain_string() {
        let json = serde_json::to_string(&Easing::EASE_OUT).unwrap();
        assert_eq!(json, "\"ease-out\"");

        let parsed: Easing = serde_json::from_str("\"cubic-bezier(0.4, 0, 0.2, 1)\"").unwrap();
        assert_eq!(parsed.as_str(), "cubic-bezier(0.4, 0, 0.2, 1)");

        let null: Easing = serde_json::from_str("null").unwrap();
        assert_eq!(null, Easing::LINEAR);
    }
}
