//! Board-agnostic core logic for the Morse blinker firmware
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Character to Morse code table, parsed from JSON
//! - Symbol timing table
//! - Random word generation
//! - Word encoding and rendering
//! - Blink plan (ordered LED levels and durations)
//! - Output trait implemented by drivers

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod encoder;
pub mod error;
pub mod plan;
pub mod session;
pub mod table;
pub mod timing;
pub mod traits;
pub mod word;

pub use config::SessionConfig;
pub use encoder::{encode, MorseWord};
pub use error::{EncodeError, Error, PlanError, TableError, WordError};
pub use plan::{BlinkPlan, Level, Step};
pub use session::Session;
pub use table::{MorseCode, MorseTable};
pub use timing::{Symbol, TimingTable};
pub use traits::SignalOutput;
pub use word::{generate_word, Word};
