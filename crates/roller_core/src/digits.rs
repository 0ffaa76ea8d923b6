//! Digit sequencing
//!
//! Every slot of a rolling number renders the same vertical strip of eleven
//! rows (`0` through `9`, then `-`). A slot shows its glyph by shifting that
//! strip by a percentage offset:
//!
//! ```text
//! row:     0    1    2   ...   9     -
//! offset:  0% -10% -20%  ... -90% -100%
//! ```
//!
//! Padding slots sit one row *above* the strip (`+10%`), where nothing is drawn.

use smallvec::SmallVec;

/// Glyphs of the reference strip, top to bottom
pub const SCALE_GLYPHS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-'];

/// Distance between two adjacent strip rows
pub const ROW_STEP_PERCENT: i32 = 10;

/// Offset that brings the sign row (row 10) into view
pub const SIGN_OFFSET_PERCENT: i32 = -10 * ROW_STEP_PERCENT;

/// Offset of a padding slot: one row before row 0, which is empty
pub const PADDING_OFFSET_PERCENT: i32 = ROW_STEP_PERCENT;

/// Text content of a padding slot (zero-width space)
pub const PADDING_GLYPH: char = '\u{200B}';

/// Decimal digits in the widest `i32` magnitude (2147483648)
pub const MAX_DIGITS: usize = 10;

/// Inline storage covers any unpadded `i32`: ten digits plus the sign
pub type DigitSlots = SmallVec<[DigitSlot; MAX_DIGITS + 1]>;

/// What a slot displays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// A decimal digit, always `0..=9`
    Digit(u8),
    /// The minus sign of a negative value
    Sign,
    /// Blank filler up to the minimum digit count
    Padding,
}

impl SlotKind {
    /// Strip offset that reveals this slot's glyph
    pub fn offset_percent(self) -> i32 {
        match self {
            SlotKind::Digit(digit) => -i32::from(digit) * ROW_STEP_PERCENT,
            SlotKind::Sign => SIGN_OFFSET_PERCENT,
            SlotKind::Padding => PADDING_OFFSET_PERCENT,
        }
    }

    /// The character this slot displays
    pub fn glyph(self) -> char {
        match self {
            SlotKind::Digit(digit) => SCALE_GLYPHS[usize::from(digit)],
            SlotKind::Sign => '-',
            SlotKind::Padding => PADDING_GLYPH,
        }
    }
}

/// One rendered cell of a rolling number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitSlot {
    pub kind: SlotKind,
    /// Index from the left, starting at 0
    pub position: usize,
    /// Index from the right, starting at 0 for the least-significant digit.
    /// Stays fixed for a digit when padding is added or removed.
    pub place: usize,
    pub offset_percent: i32,
}

impl DigitSlot {
    fn new(kind: SlotKind, position: usize, len: usize) -> Self {
        Self {
            kind,
            position,
            place: len - 1 - position,
            offset_percent: kind.offset_percent(),
        }
    }

    /// The digit shown, if this is a digit slot
    pub fn digit(&self) -> Option<u8> {
        match self.kind {
            SlotKind::Digit(digit) => Some(digit),
            _ => None,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.kind == SlotKind::Padding
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }
}

/// Offset of the slot at `place` (index from the right), if the sequence is
/// that wide
pub fn offset_at_place(slots: &[DigitSlot], place: usize) -> Option<i32> {
    slots
        .iter()
        .find(|slot| slot.place == place)
        .map(|slot| slot.offset_percent)
}

/// Number of decimal digits in `magnitude`; zero has one digit
pub fn digit_count(magnitude: u32) -> usize {
    magnitude.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Split `value` into display slots
///
/// The result holds `max(digits, minimum_digits)` digit and padding slots,
/// plus a sign slot for negative values. Padding comes first, then the
/// sign, then the digits most-significant first. A `minimum_digits` of zero
/// or less adds no padding.
///
/// Total over the whole `i32` range: the magnitude is taken as `u32`, so
/// `i32::MIN` does not overflow.
pub fn sequence(value: i32, minimum_digits: i32) -> DigitSlots {
    let negative = value < 0;
    let magnitude = value.unsigned_abs();

    let count = digit_count(magnitude);
    let mut digits = [0u8; MAX_DIGITS];
    let mut rest = magnitude;
    for digit in digits[..count].iter_mut().rev() {
        *digit = (rest % 10) as u8;
        rest /= 10;
    }

    let padding = usize::try_from(minimum_digits)
        .unwrap_or(0)
        .saturating_sub(count);
    let len = padding + usize::from(negative) + count;

    let kinds = std::iter::repeat(SlotKind::Padding)
        .take(padding)
        .chain(negative.then_some(SlotKind::Sign))
        .chain(digits[..count].iter().map(|&digit| SlotKind::Digit(digit)));

    let slots: DigitSlots = kinds
        .enumerate()
        .map(|(position, kind)| DigitSlot::new(kind, position, len))
        .collect();

    tracing::trace!(value, minimum_digits, slots = slots.len(), "sequenced digits");
    slots
}
