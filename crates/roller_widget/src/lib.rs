//! # Roller Widget
//!
//! The `RollingNumber` component: an integer rendered as digit reels that
//! roll to each new value.
//!
//! ## Layers
//!
//! - **Core**: `roller_core` splits values into slots and decides when a roll starts
//! - **Animation**: `roller_animation` provides easing presets and durations
//! - **Widget**: this crate turns both into markup for the rendering layer
//!
//! ## Example
//!
//! ```
//! use roller_widget::prelude::*;
//!
//! let widget = rolling_number(-456).easing(Easing::EASE_OUT_CUBIC);
//! let root = widget.render();
//!
//! assert_eq!(root.find_all(classes::DIGIT).len(), 4);
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod rolling_number;

pub use config::{RollingNumberDefaults, WidgetConfig};
pub use element::Element;
pub use error::{Result, WidgetError};
pub use rolling_number::{rolling_number, RollingNumber, RollingNumberProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::element::{span, Element};
    pub use crate::rolling_number::{
        classes, rolling_number, RollingNumber, RollingNumberProps,
    };
    // Re-export the value types the builders accept
    pub use roller_animation::{Easing, TransitionDuration};
    pub use roller_core::{AnimationPhase, UpdateOutcome};
}
