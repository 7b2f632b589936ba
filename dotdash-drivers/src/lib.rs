//! Hardware driver implementations
//!
//! Concrete implementations on top of the `embedded-hal` family so the
//! same code runs on the RP2040 and against mocks on the host:
//!
//! - GPIO LED implementing [`dotdash_core::SignalOutput`]
//! - Async blink plan player
//! - Line-oriented serial console

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod led;
pub mod player;

pub use console::{Console, ConsoleError, PROMPT};
pub use led::GpioLed;
pub use player::Blinker;
