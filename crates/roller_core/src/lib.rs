//! Roller Core
//!
//! The framework-independent half of a rolling-number widget.
//!
//! # Features
//!
//! - **Digit Sequencing**: Split any `i32` into sign, digit and padding slots,
//!   each carrying the strip offset that reveals its glyph
//! - **Roll Trigger**: Instance-owned state that only recomputes the digit
//!   reels when the numeric value actually changes
//!
//! # Example
//!
//! ```
//! use roller_core::{sequence, SlotKind};
//!
//! let slots = sequence(-42, 0);
//! assert_eq!(slots.len(), 3);
//! assert_eq!(slots[0].kind, SlotKind::Sign);
//! assert_eq!(slots[2].offset_percent, -20);
//! ```

pub mod digits;
pub mod state;

pub use digits::{
    digit_count, offset_at_place, sequence, DigitSlot, DigitSlots, SlotKind, MAX_DIGITS,
    PADDING_GLYPH, PADDING_OFFSET_PERCENT, ROW_STEP_PERCENT, SCALE_GLYPHS, SIGN_OFFSET_PERCENT,
};
pub use state::{changed_places, AnimationPhase, RollingNumberState, UpdateOutcome};
