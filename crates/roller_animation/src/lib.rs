//! Roller Animation Parameters
//!
//! The values a rolling-number widget hands to the rendering layer to drive
//! its CSS transition.
//!
//! # Features
//!
//! - **Easing**: Named CSS timing functions and cubic-bezier presets, plus
//!   arbitrary custom easing strings passed through verbatim
//! - **TransitionDuration**: Free-form CSS time strings with a `0.5s` default

pub mod duration;
pub mod easing;

pub use duration::TransitionDuration;
pub use easing::Easing;
