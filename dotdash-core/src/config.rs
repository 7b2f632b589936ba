//! Session configuration
//!
//! Fixed at compile time; there is no runtime configuration surface.

use crate::timing::TimingTable;
use crate::word::DEFAULT_WORD_LEN;

/// Parameters of one blink session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionConfig {
    /// Number of random letters to blink
    pub word_len: usize,
    /// Symbol and gap timings
    pub timing: TimingTable,
}

impl SessionConfig {
    pub const fn new() -> Self {
        Self {
            word_len: DEFAULT_WORD_LEN,
            timing: TimingTable::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
