//! Error types for table loading, encoding and planning

/// Errors while building a [`crate::MorseTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Input is not a flat JSON object of strings, or has too many entries
    Parse,
    /// A key is not exactly one character
    InvalidKey,
    /// The code for this character is empty, too long, or contains
    /// something other than `.`, `-` and ` `
    InvalidCode(char),
    /// No room for another entry
    Full,
}

/// Errors while translating text to Morse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// The table has no code for this character
    UnknownCharacter(char),
    /// More letters than a [`crate::MorseWord`] holds
    TooLong,
}

/// Errors while expanding a word into a blink plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlanError {
    /// The plan would exceed its fixed step capacity
    Overflow,
}

/// Errors while generating a random word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordError {
    /// Requested length exceeds [`crate::word::MAX_WORD_LEN`]
    TooLong {
        /// Length that was asked for
        requested: usize,
    },
}

/// Any error raised while preparing a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Table(TableError),
    Encode(EncodeError),
    Plan(PlanError),
    Word(WordError),
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e)
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        Error::Encode(e)
    }
}

impl From<PlanError> for Error {
    fn from(e: PlanError) -> Self {
        Error::Plan(e)
    }
}

impl From<WordError> for Error {
    fn from(e: WordError) -> Self {
        Error::Word(e)
    }
}
