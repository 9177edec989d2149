//! Display encoder
//!
//! Packs a [`BatteryReading`](crate::BatteryReading) into the word written
//! to the display register:
//!
//! ```text
//!  28    24 23     17 16     10 9       3 2   0
//! ┌────────┬─────────┬─────────┬─────────┬─────┐
//! │  bars  │  left   │ middle  │  right  │ ind │
//! │  5b    │  7b     │  7b     │  7b     │ 3b  │
//! └────────┴─────────┴─────────┴─────────┴─────┘
//! ```

pub mod encoder;
pub mod segments;
pub mod word;

pub use encoder::{bar_bits, encode, BAR_THRESHOLDS};
pub use segments::{digit_for, segments_for, DIGIT_SEGMENTS};
pub use word::{DigitPosition, DisplayWord, DECIMAL_POINT, PERCENT_SIGN, VOLTS_UNIT};
