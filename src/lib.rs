//! Time-of-day values exchanged between an RTC driver and a sample logger,
//! plus the logger-side pieces that consume them.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod display;
mod error;
pub mod font;
pub mod sample;
mod time;

pub use error::{Field, OutOfRange};
pub use time::TimeOfDay;
