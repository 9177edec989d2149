//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod meter;
pub mod status_led;

pub use meter::meter_task;
pub use status_led::status_led_task;
