//! Output abstraction
//!
//! The blink plan is played against anything that can be switched on and
//! off. Drivers implement this for GPIO pins; tests implement it for mocks.

use crate::plan::Level;

/// Trait for a two-state signal output (LED, buzzer, keying relay)
pub trait SignalOutput {
    /// Error type for switching the output
    type Error;

    /// Turn the output on or off
    fn set_on(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Check if the output is currently on
    fn is_on(&self) -> bool;

    /// Drive the output to a plan level
    fn apply(&mut self, level: Level) -> Result<(), Self::Error> {
        self.set_on(level.is_on())
    }
}
