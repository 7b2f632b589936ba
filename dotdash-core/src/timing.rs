//! Morse symbols and their fixed timings

/// Default LED-on time for a dot
pub const DOT_MS: u32 = 250;

/// Default LED-on time for a dash
pub const DASH_MS: u32 = 1000;

/// Default LED-on time for a space token inside a code
pub const SPACE_MS: u32 = 7000;

/// LED-off time before every symbol
pub const SYMBOL_GAP_MS: u32 = 100;

/// Extra pause at each boundary between letters
pub const LETTER_GAP_MS: u32 = 3000;

/// Pause before the first symbol
pub const LEAD_IN_MS: u32 = 1000;

/// A single token of the Morse symbol stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Short pulse (`.`)
    Dot,
    /// Long pulse (`-`)
    Dash,
    /// Space token inside a code (` `)
    Space,
    /// Separator between two letters (`_`)
    LetterGap,
}

impl Symbol {
    /// Parse a stream character
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            ' ' => Some(Symbol::Space),
            '_' => Some(Symbol::LetterGap),
            _ => None,
        }
    }

    /// Character used for this symbol in the raw stream
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
            Symbol::Space => ' ',
            Symbol::LetterGap => '_',
        }
    }

    /// True for tokens that may appear inside a character's code
    pub const fn is_code_token(self) -> bool {
        !matches!(self, Symbol::LetterGap)
    }
}

/// Fixed delays used when blinking a symbol stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingTable {
    /// LED-on time for `.`
    pub dot_ms: u32,
    /// LED-on time for `-`
    pub dash_ms: u32,
    /// LED-on time for ` `
    pub space_ms: u32,
    /// LED-off time before every symbol
    pub symbol_gap_ms: u32,
    /// Additional LED-off time at a letter boundary
    pub letter_gap_ms: u32,
    /// LED-off time before the first symbol
    pub lead_in_ms: u32,
}

impl TimingTable {
    pub const fn new() -> Self {
        Self {
            dot_ms: DOT_MS,
            dash_ms: DASH_MS,
            space_ms: SPACE_MS,
            symbol_gap_ms: SYMBOL_GAP_MS,
            letter_gap_ms: LETTER_GAP_MS,
            lead_in_ms: LEAD_IN_MS,
        }
    }

    /// LED-on time for a symbol
    ///
    /// Returns `None` for [`Symbol::LetterGap`], which keeps the LED off.
    pub const fn on_time_ms(&self, symbol: Symbol) -> Option<u32> {
        match symbol {
            Symbol::Dot => Some(self.dot_ms),
            Symbol::Dash => Some(self.dash_ms),
            Symbol::Space => Some(self.space_ms),
            Symbol::LetterGap => None,
        }
    }
}

impl Default for TimingTable {
    fn default() -> Self {
        Self::new()
    }
}
