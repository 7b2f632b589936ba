//! Random word generation

use heapless::String;
use rand_core::RngCore;

use crate::error::WordError;

/// Length of the word blinked on each boot
pub const DEFAULT_WORD_LEN: usize = 3;

/// Longest word that can be generated
pub const MAX_WORD_LEN: usize = 16;

/// A generated word of lowercase ASCII letters
pub type Word = String<MAX_WORD_LEN>;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `len` letters chosen uniformly from `a`-`z`
pub fn generate_word<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> Result<Word, WordError> {
    if len > MAX_WORD_LEN {
        return Err(WordError::TooLong { requested: len });
    }

    let mut word = Word::new();
    for _ in 0..len {
        let letter = ALPHABET[uniform_index(rng, ALPHABET.len() as u32)];
        word.push(letter as char)
            .map_err(|_| WordError::TooLong { requested: len })?;
    }

    Ok(word)
}

/// Pick an index in `0..bound` without modulo bias
fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, bound: u32) -> usize {
    // Draws at or above `zone` would favour the low indices
    let zone = (u32::MAX / bound) * bound;
    loop {
        let value = rng.next_u32();
        if value < zone {
            return (value % bound) as usize;
        }
    }
}
