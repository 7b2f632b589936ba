//! Text to Morse translation
//!
//! A [`MorseWord`] keeps one code per input letter. It can be viewed as the
//! raw symbol stream that drives the LED (`..._---_...`) or rendered in the
//! printed form with codes separated by single spaces (`... --- ...`).

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::error::EncodeError;
use crate::table::{MorseCode, MorseTable, MAX_CODE_LEN};
use crate::timing::Symbol;
use crate::word::MAX_WORD_LEN;

/// Longest rendered line: every code at full length plus separators
pub const MAX_LINE_LEN: usize = MAX_WORD_LEN * (MAX_CODE_LEN + 1);

/// A rendered Morse line
pub type MorseLine = String<MAX_LINE_LEN>;

/// Morse codes of a word, in input order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MorseWord {
    codes: Vec<MorseCode, MAX_WORD_LEN>,
}

/// Translate text letter by letter
///
/// Every character must be present in the table (case-insensitive).
pub fn encode(table: &MorseTable, text: &str) -> Result<MorseWord, EncodeError> {
    let mut word = MorseWord::default();

    for c in text.chars() {
        let code = table.lookup(c).ok_or(EncodeError::UnknownCharacter(c))?;
        word.codes
            .push(code.clone())
            .map_err(|_| EncodeError::TooLong)?;
    }

    Ok(word)
}

impl MorseWord {
    /// Number of encoded letters
    pub fn letter_count(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in input order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(MorseCode::as_str)
    }

    /// The joined symbol stream, with [`Symbol::LetterGap`] between letters
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.codes.iter().enumerate().flat_map(|(i, code)| {
            let gap = (i > 0).then_some(Symbol::LetterGap);
            gap.into_iter()
                .chain(code.chars().filter_map(Symbol::from_char))
        })
    }

    /// Write the raw stream, codes joined by `_`
    pub fn write_stream<W: Write>(&self, out: &mut W) -> fmt::Result {
        for symbol in self.symbols() {
            out.write_char(symbol.as_char())?;
        }
        Ok(())
    }

    /// Write the printed form, codes joined by a single space
    pub fn write_spaced<W: Write>(&self, out: &mut W) -> fmt::Result {
        for (i, code) in self.codes().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            out.write_str(code)?;
        }
        Ok(())
    }

    /// Render the printed form into a fixed-size line
    pub fn to_spaced(&self) -> Result<MorseLine, fmt::Error> {
        let mut line = MorseLine::new();
        self.write_spaced(&mut line)?;
        Ok(line)
    }

    /// Render the raw stream into a fixed-size line
    pub fn to_stream(&self) -> Result<MorseLine, fmt::Error> {
        let mut line = MorseLine::new();
        self.write_stream(&mut line)?;
        Ok(line)
    }
}
