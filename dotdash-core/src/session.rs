//! One blink session
//!
//! Bundles the steps that happen before any hardware is touched: pick a
//! random word, encode it and expand it into a blink plan.

use rand_core::RngCore;

use crate::config::SessionConfig;
use crate::encoder::{encode, MorseWord};
use crate::error::Error;
use crate::plan::BlinkPlan;
use crate::table::MorseTable;
use crate::word::{generate_word, Word};

/// A prepared session, ready to be played and revealed
#[derive(Debug, Clone)]
pub struct Session {
    /// The random word, lowercase
    pub word: Word,
    /// Its Morse translation
    pub morse: MorseWord,
    /// LED steps to blink it
    pub plan: BlinkPlan,
}

impl Session {
    /// Generate a word with `rng` and prepare everything needed to blink it
    pub fn prepare<R: RngCore + ?Sized>(
        table: &MorseTable,
        rng: &mut R,
        config: &SessionConfig,
    ) -> Result<Self, Error> {
        let word = generate_word(rng, config.word_len)?;
        Self::for_word(table, word, config)
    }

    /// Prepare a session for a given word
    pub fn for_word(table: &MorseTable, word: Word, config: &SessionConfig) -> Result<Self, Error> {
        let morse = encode(table, &word)?;
        let plan = BlinkPlan::build(&morse, &config.timing)?;

        Ok(Self { word, morse, plan })
    }
}
