//! Property tests for encoding and blink planning against the shipped table

use dotdash_core::plan::Level;
use dotdash_core::timing::Symbol;
use dotdash_core::word::DEFAULT_WORD_LEN;
use dotdash_core::{encode, BlinkPlan, MorseTable, Session, SessionConfig, TimingTable};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TABLE_JSON: &str = include_str!("../../dotdash-firmware/morse.json");

fn table() -> MorseTable {
    MorseTable::from_json(TABLE_JSON).expect("shipped morse.json must parse")
}

/// Reference duration of a word computed straight from the codes
fn expected_duration_ms(table: &MorseTable, word: &str, timing: &TimingTable) -> u64 {
    let mut total = timing.lead_in_ms as u64;
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            total += (timing.symbol_gap_ms + timing.letter_gap_ms) as u64;
        }
        for token in table.lookup(c).unwrap().chars() {
            let symbol = Symbol::from_char(token).unwrap();
            total += (timing.symbol_gap_ms + timing.on_time_ms(symbol).unwrap()) as u64;
        }
    }
    total
}

#[test]
fn shipped_table_has_full_alphabet() {
    let table = table();
    for c in 'a'..='z' {
        assert!(table.contains(c), "missing {}", c);
    }
    for c in '0'..='9' {
        assert!(table.contains(c), "missing {}", c);
    }
}

proptest! {
    #[test]
    fn encoding_is_lookup_joined_by_separator(word in "[a-z]{3}") {
        let table = table();
        let morse = encode(&table, &word).unwrap();

        let mut expected = String::new();
        for (i, c) in word.chars().enumerate() {
            if i > 0 {
                expected.push('_');
            }
            expected.push_str(table.lookup(c).unwrap());
        }

        let stream = morse.to_stream().unwrap();
        prop_assert_eq!(stream.as_str(), expected.as_str());
    }

    #[test]
    fn printed_line_has_one_token_per_letter(word in "[a-z]{3}") {
        let morse = encode(&table(), &word).unwrap();
        let line = morse.to_spaced().unwrap();

        prop_assert_eq!(line.split(' ').count(), 3);
        prop_assert!(!line.contains('_'));
    }

    #[test]
    fn duration_follows_letters_and_timing(word in "[a-z]{1,8}") {
        let table = table();
        let timing = TimingTable::default();
        let morse = encode(&table, &word).unwrap();
        let plan = BlinkPlan::build(&morse, &timing).unwrap();

        prop_assert_eq!(plan.total_duration_ms(), expected_duration_ms(&table, &word, &timing));
        prop_assert_eq!(plan.steps().last().map(|s| s.level), Some(Level::Off));
    }

    #[test]
    fn session_is_deterministic_for_a_seed(seed in any::<u64>()) {
        let table = table();
        let config = SessionConfig::default();

        let first = Session::prepare(&table, &mut StdRng::seed_from_u64(seed), &config).unwrap();
        let second = Session::prepare(&table, &mut StdRng::seed_from_u64(seed), &config).unwrap();

        prop_assert_eq!(first.word.len(), DEFAULT_WORD_LEN);
        prop_assert!(first.word.chars().all(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(&first.word, &second.word);
        prop_assert_eq!(first.plan.total_duration_ms(), second.plan.total_duration_ms());
        prop_assert_eq!(first.plan.steps(), second.plan.steps());
    }
}
