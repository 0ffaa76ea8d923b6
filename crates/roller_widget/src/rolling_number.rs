//! RollingNumber component
//!
//! Renders an integer as a row of digit reels that roll, odometer-style,
//! whenever the value changes. The component only computes target offsets;
//! the roll itself is a CSS transition driven by two custom properties on
//! the container:
//!
//! ```css
//! .roller__scale {
//!     transform: translateY(var(--digit-offset));
//!     transition: transform var(--roller-duration) var(--roller-easing);
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use roller_animation::Easing;
//! use roller_widget::prelude::*;
//!
//! let mut counter = rolling_number(41)
//!     .minimum_digits(3)
//!     .duration("300ms")
//!     .easing(Easing::EASE_OUT_BACK);
//!
//! let outcome = counter.set_parameters(counter.props().clone().value(42));
//! assert!(outcome.is_roll());
//!
//! let html = counter.render().to_html();
//! assert!(html.contains("--roller-duration: 300ms"));
//! ```

use roller_animation::{Easing, TransitionDuration};
use roller_core::{DigitSlot, RollingNumberState, UpdateOutcome, SCALE_GLYPHS};

use crate::config::RollingNumberDefaults;
use crate::element::{span, Element};

/// CSS class names used in the rendered markup
pub mod classes {
    /// Container of the whole number
    pub const ROOT: &str = "roller";
    /// One slot (digit, sign or padding)
    pub const DIGIT: &str = "roller__digit";
    /// The 11-row reference strip inside each slot
    pub const SCALE: &str = "roller__scale";
    /// The glyph the slot currently shows
    pub const VALUE: &str = "roller__value";
}

/// CSS custom property carrying the transition duration
pub const DURATION_PROPERTY: &str = "--roller-duration";
/// CSS custom property carrying the easing function
pub const EASING_PROPERTY: &str = "--roller-easing";
/// CSS custom property carrying a slot's strip offset
pub const OFFSET_PROPERTY: &str = "--digit-offset";

/// Parameters of a rolling number
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RollingNumberProps {
    pub value: i32,
    /// Left-pad with blank slots up to this many digits
    pub minimum_digits: Option<i32>,
    pub duration: Option<TransitionDuration>,
    pub easing: Option<Easing>,
}

impl RollingNumberProps {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn minimum_digits(mut self, minimum_digits: i32) -> Self {
        self.minimum_digits = Some(minimum_digits);
        self
    }

    pub fn duration(mut self, duration: impl Into<TransitionDuration>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Fill unset parameters from configured defaults
    pub fn with_defaults(mut self, defaults: &RollingNumberDefaults) -> Self {
        if self.minimum_digits.is_none() {
            self.minimum_digits = defaults.minimum_digits;
        }
        if self.duration.is_none() {
            self.duration = defaults.duration.clone();
        }
        if self.easing.is_none() {
            self.easing = defaults.easing();
        }
        self
    }

    fn effective_minimum_digits(&self) -> i32 {
        self.minimum_digits.unwrap_or(0)
    }
}

/// Create a rolling number showing `value`
pub fn rolling_number(value: i32) -> RollingNumber {
    RollingNumber::new(RollingNumberProps::new(value))
}

/// A rolling-number widget instance
///
/// Owns its [`RollingNumberState`]; instances never share state.
#[derive(Clone, Debug)]
pub struct RollingNumber {
    props: RollingNumberProps,
    state: RollingNumberState,
}

impl RollingNumber {
    pub fn new(props: RollingNumberProps) -> Self {
        let state = RollingNumberState::new(props.value, props.effective_minimum_digits());
        Self { props, state }
    }

    /// Set the minimum digit count
    pub fn minimum_digits(self, minimum_digits: i32) -> Self {
        self.with_props(|props| props.minimum_digits(minimum_digits))
    }

    /// Set the transition duration
    pub fn duration(self, duration: impl Into<TransitionDuration>) -> Self {
        self.with_props(|props| props.duration(duration))
    }

    /// Set the easing function
    pub fn easing(self, easing: impl Into<Easing>) -> Self {
        self.with_props(|props| props.easing(easing))
    }

    fn with_props(mut self, edit: impl FnOnce(RollingNumberProps) -> RollingNumberProps) -> Self {
        let props = edit(self.props.clone());
        self.set_parameters(props);
        self
    }

    /// Apply a new set of parameters
    ///
    /// Only a changed value starts a roll. Duration and easing changes take
    /// effect on the container without touching the slots.
    pub fn set_parameters(&mut self, props: RollingNumberProps) -> UpdateOutcome {
        let outcome = self
            .state
            .update(props.value, props.effective_minimum_digits());
        self.props = props;
        outcome
    }

    pub fn props(&self) -> &RollingNumberProps {
        &self.props
    }

    pub fn state(&self) -> &RollingNumberState {
        &self.state
    }

    pub fn slots(&self) -> &[DigitSlot] {
        self.state.slots()
    }

    /// Duration in effect, `0.5s` when unset
    pub fn transition_duration(&self) -> TransitionDuration {
        self.props.duration.clone().unwrap_or_default()
    }

    /// Easing in effect, `linear` when unset
    pub fn transition_easing(&self) -> Easing {
        self.props.easing.clone().unwrap_or_default()
    }

    /// Inline style of the container
    pub fn container_style(&self) -> String {
        format!(
            "{DURATION_PROPERTY}: {}; {EASING_PROPERTY}: {}",
            self.transition_duration(),
            self.transition_easing()
        )
    }

    /// Build the markup for the current state
    pub fn render(&self) -> Element {
        span()
            .class(classes::ROOT)
            .attr("role", "img")
            .attr("aria-label", self.state.current_value().to_string())
            .style(self.container_style())
            .children(self.state.slots().iter().map(render_slot))
    }
}

/// Inline style of one slot
pub fn slot_style(slot: &DigitSlot) -> String {
    format!("{OFFSET_PROPERTY}: {}%", slot.offset_percent)
}

fn render_slot(slot: &DigitSlot) -> Element {
    let scale = span()
        .class(classes::SCALE)
        .attr("aria-hidden", "true")
        .children(
            SCALE_GLYPHS
                .iter()
                .map(|glyph| span().text(glyph.to_string())),
        );

    span()
        .class(classes::DIGIT)
        .attr("data-place", slot.place.to_string())
        .style(slot_style(slot))
        .child(scale)
        .child(span().class(classes::VALUE).text(slot.glyph().to_string()))
}
