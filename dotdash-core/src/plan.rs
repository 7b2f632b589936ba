//! Blink plan generated from an encoded word
//!
//! A plan is the flat list of LED levels and hold times the player walks
//! through. For every symbol the LED first goes off for the symbol gap, then
//! either lights for the symbol's on-time or, at a letter boundary, stays
//! off for the letter gap. The plan opens with the lead-in pause and always
//! closes with a zero-length `Off` step so the LED ends dark.

use heapless::Vec;

use crate::encoder::MorseWord;
use crate::error::PlanError;
use crate::table::MAX_CODE_LEN;
use crate::timing::TimingTable;
use crate::word::MAX_WORD_LEN;

/// Capacity for the longest word: two steps per symbol and per gap, plus
/// lead-in and final off
pub const MAX_STEPS: usize = 2 * MAX_WORD_LEN * (MAX_CODE_LEN + 1) + 2;

/// LED level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    On,
    Off,
}

impl Level {
    pub const fn is_on(self) -> bool {
        matches!(self, Level::On)
    }
}

/// Hold the LED at `level` for `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub level: Level,
    pub duration_ms: u32,
}

/// Ordered steps for one word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlinkPlan {
    steps: Vec<Step, MAX_STEPS>,
}

impl BlinkPlan {
    /// Expand a word into steps using the given timings
    pub fn build(word: &MorseWord, timing: &TimingTable) -> Result<Self, PlanError> {
        let mut plan = Self::default();

        plan.push(Level::Off, timing.lead_in_ms)?;

        for symbol in word.symbols() {
            plan.push(Level::Off, timing.symbol_gap_ms)?;
            match timing.on_time_ms(symbol) {
                Some(on_ms) => plan.push(Level::On, on_ms)?,
                None => plan.push(Level::Off, timing.letter_gap_ms)?,
            }
        }

        plan.push(Level::Off, 0)?;
        Ok(plan)
    }

    fn push(&mut self, level: Level, duration_ms: u32) -> Result<(), PlanError> {
        self.steps
            .push(Step { level, duration_ms })
            .map_err(|_| PlanError::Overflow)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step durations
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_ms as u64).sum()
    }

    /// Time the LED spends lit
    pub fn on_duration_ms(&self) -> u64 {
        self.steps
            .iter()
            .filter(|s| s.level.is_on())
            .map(|s| s.duration_ms as u64)
            .sum()
    }

    /// Number of separate flashes
    pub fn pulse_count(&self) -> usize {
        self.steps.iter().filter(|s| s.level.is_on()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::table::MorseTable;

    fn table() -> MorseTable {
        let mut table = MorseTable::new();
        table.insert('S', "...").unwrap();
        table.insert('O', "---").unwrap();
        table.insert('E', ".").unwrap();
        table.insert('T', "-").unwrap();
        table.insert('W', ". -").unwrap();
        table.insert('H', "....").unwrap();
        table
    }

    fn step(level: Level, duration_ms: u32) -> Step {
        Step { level, duration_ms }
    }

    #[test]
    fn test_single_letter_steps() {
        let word = encode(&table(), "t").unwrap();
        let plan = BlinkPlan::build(&word, &TimingTable::default()).unwrap();

        assert_eq!(
            plan.steps(),
            &[
                step(Level::Off, 1000),
                step(Level::Off, 100),
                step(Level::On, 1000),
                step(Level::Off, 0),
            ]
        );
    }

    #[test]
    fn test_letter_gap_keeps_led_off() {
        let word = encode(&table(), "et").unwrap();
        let plan = BlinkPlan::build(&word, &TimingTable::default()).unwrap();

        assert_eq!(
            plan.steps(),
            &[
                step(Level::Off, 1000),
                step(Level::Off, 100),
                step(Level::On, 250),
                step(Level::Off, 100),
                step(Level::Off, 3000),
                step(Level::Off, 100),
                step(Level::On, 1000),
                step(Level::Off, 0),
            ]
        );
    }

    #[test]
    fn test_sos_duration() {
        let word = encode(&table(), "sos").unwrap();
        let plan = BlinkPlan::build(&word, &TimingTable::default()).unwrap();

        // lead-in 1000
        // s: 3 * (100 + 250) = 1050, o: 3 * (100 + 1000) = 3300
        // two letter gaps: 2 * (100 + 3000) = 6200
        assert_eq!(plan.total_duration_ms(), 1000 + 1050 + 3300 + 1050 + 6200);
        assert_eq!(plan.on_duration_ms(), 750 + 3000 + 750);
        assert_eq!(plan.pulse_count(), 9);
    }

    #[test]
    fn test_space_token_lights_led() {
        let word = encode(&table(), "w").unwrap();
        let plan = BlinkPlan::build(&word, &TimingTable::default()).unwrap();

        assert_eq!(plan.pulse_count(), 3);
        assert_eq!(plan.on_duration_ms(), 250 + 7000 + 1000);
    }

    #[test]
    fn test_empty_word_is_lead_in_only() {
        let word = encode(&table(), "").unwrap();
        let plan = BlinkPlan::build(&word, &TimingTable::default()).unwrap();

        assert_eq!(plan.steps(), &[step(Level::Off, 1000), step(Level::Off, 0)]);
    }

    #[test]
    fn test_custom_timing() {
        let timing = TimingTable {
            dot_ms: 10,
            dash_ms: 30,
            space_ms: 70,
            symbol_gap_ms: 10,
            letter_gap_ms: 20,
            lead_in_ms: 0,
        };
        let word = encode(&table(), "ee").unwrap();
        let plan = BlinkPlan::build(&word, &timing).unwrap();

        assert_eq!(plan.total_duration_ms(), 10 + 10 + 10 + 20 + 10 + 10);
    }

    #[test]
    fn test_longest_word_fits() {
        let mut table = MorseTable::new();
        table.insert('H', "........").unwrap();
        let text = "hhhhhhhhhhhhhhhh";
        assert_eq!(text.len(), MAX_WORD_LEN);

        let word = encode(&table, text).unwrap();
        let plan = BlinkPlan::build(&word, &TimingTable::default()).unwrap();

        assert_eq!(plan.len(), 2 + 2 * (16 * 8 + 15));
        assert!(plan.steps().last().is_some_and(|s| !s.level.is_on()));
    }
}
