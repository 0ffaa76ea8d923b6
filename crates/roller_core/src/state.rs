//! Roll-trigger state
//!
//! A rolling number only animates because its slot offsets change and the
//! rendering layer transitions between them. [`RollingNumberState`] owns
//! the last value a roll was triggered for and decides, on every parameter
//! update, whether the reels need to move.
//!
//! # Policy
//!
//! - A new value replaces the stored value and recomputes every slot. The
//!   changed offsets start the roll.
//! - An unchanged value with a new minimum digit count recomputes the slots
//!   right away, but only the padding changes. Digit and sign slots keep
//!   their place (index from the right) and offset, so a renderer keyed by
//!   place does not restart their transition.
//! - Anything else leaves the state untouched.
//!
//! Completion of the CSS transition is never observed here.

use smallvec::SmallVec;
use tracing::debug;

use crate::digits::{offset_at_place, sequence, DigitSlot, DigitSlots};

/// Visual phase implied by an update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Nothing new to show
    #[default]
    Idle,
    /// Offsets moved; the rendering layer is transitioning
    Animating,
}

/// What a parameter update did to the state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Same value, same padding
    Unchanged,
    /// Same value, padding slots added or removed
    Repadded,
    /// The value changed and the reels roll from `from` to `to`
    Rolled { from: i32, to: i32 },
}

impl UpdateOutcome {
    pub fn phase(&self) -> AnimationPhase {
        match self {
            UpdateOutcome::Rolled { .. } => AnimationPhase::Animating,
            UpdateOutcome::Unchanged | UpdateOutcome::Repadded => AnimationPhase::Idle,
        }
    }

    /// Whether this update starts a roll
    pub fn is_roll(&self) -> bool {
        self.phase() == AnimationPhase::Animating
    }
}

/// Per-instance state of one rolling-number widget
#[derive(Clone, Debug)]
pub struct RollingNumberState {
    current_value: i32,
    minimum_digits: i32,
    rendered_slots: DigitSlots,
}

impl RollingNumberState {
    /// Create the state for a freshly mounted widget
    pub fn new(value: i32, minimum_digits: i32) -> Self {
        Self {
            current_value: value,
            minimum_digits,
            rendered_slots: sequence(value, minimum_digits),
        }
    }

    /// Apply incoming parameters
    pub fn update(&mut self, value: i32, minimum_digits: i32) -> UpdateOutcome {
        if value != self.current_value {
            let from = self.current_value;
            self.current_value = value;
            self.minimum_digits = minimum_digits;
            self.rendered_slots = sequence(value, minimum_digits);
            debug!(from, to = value, "rolling number value changed");
            return UpdateOutcome::Rolled { from, to: value };
        }

        if minimum_digits == self.minimum_digits {
            return UpdateOutcome::Unchanged;
        }

        self.minimum_digits = minimum_digits;
        let slots = sequence(value, minimum_digits);
        if slots == self.rendered_slots {
            return UpdateOutcome::Unchanged;
        }

        debug!(
            value,
            minimum_digits,
            slots = slots.len(),
            "rolling number padding changed"
        );
        self.rendered_slots = slots;
        UpdateOutcome::Repadded
    }

    /// The value the last roll was triggered for
    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    pub fn minimum_digits(&self) -> i32 {
        self.minimum_digits
    }

    /// Slots of the current rendering, leftmost first
    pub fn slots(&self) -> &[DigitSlot] {
        &self.rendered_slots
    }

    /// The slot at `place` (index from the right), if any
    pub fn slot_at_place(&self, place: usize) -> Option<&DigitSlot> {
        self.rendered_slots.iter().find(|slot| slot.place == place)
    }
}

/// Places whose offset differs between two renderings
///
/// A place present in only one of them counts as changed. Returned in
/// ascending order.
pub fn changed_places(old: &[DigitSlot], new: &[DigitSlot]) -> SmallVec<[usize; 16]> {
    let width = old.len().max(new.len());
    (0..width)
        .filter(|&place| offset_at_place(old, place) != offset_at_place(new, place))
        .collect()
}
