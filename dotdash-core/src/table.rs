//! Character to Morse code lookup table
//!
//! The table is read once from a flat JSON object such as
//! `{"A": ".-", "B": "-..."}` and never changes afterwards. Keys are stored
//! uppercase; lookups fold ASCII case, so `'a'` finds the code for `"A"`.

use heapless::{FnvIndexMap, String};

use crate::error::TableError;
use crate::timing::Symbol;

/// Maximum number of characters in a table (must be a power of two)
pub const MAX_ENTRIES: usize = 64;

/// Maximum number of tokens in a single code
pub const MAX_CODE_LEN: usize = 8;

/// Morse code of a single character, e.g. `".-"`
pub type MorseCode = String<MAX_CODE_LEN>;

/// Shape of the JSON document before validation, borrowing from the input
type RawTable<'a> = FnvIndexMap<&'a str, &'a str, MAX_ENTRIES>;

/// Immutable character to code mapping
#[derive(Debug, Clone, Default)]
pub struct MorseTable {
    entries: FnvIndexMap<char, MorseCode, MAX_ENTRIES>,
}

impl MorseTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    /// Parse a table from a JSON object of single-character keys
    ///
    /// Keys and codes are borrowed from `json`, so they must not contain
    /// escape sequences.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let (raw, _): (RawTable<'_>, usize) =
            serde_json_core::from_str(json).map_err(|_| TableError::Parse)?;

        let mut table = Self::new();
        for (key, code) in raw.iter() {
            let mut chars = key.chars();
            let character = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(TableError::InvalidKey),
            };
            table.insert(character, code)?;
        }

        Ok(table)
    }

    /// Add or replace the code for a character
    ///
    /// The key is stored in ASCII uppercase.
    pub fn insert(&mut self, character: char, code: &str) -> Result<(), TableError> {
        let key = character.to_ascii_uppercase();

        if code.is_empty() {
            return Err(TableError::InvalidCode(key));
        }
        let valid = code
            .chars()
            .all(|c| Symbol::from_char(c).is_some_and(Symbol::is_code_token));
        if !valid {
            return Err(TableError::InvalidCode(key));
        }

        let mut stored = MorseCode::new();
        stored
            .push_str(code)
            .map_err(|_| TableError::InvalidCode(key))?;

        self.entries
            .insert(key, stored)
            .map_err(|_| TableError::Full)?;
        Ok(())
    }

    /// Look up the code for a character, ignoring ASCII case
    pub fn lookup(&self, character: char) -> Option<&MorseCode> {
        self.entries.get(&character.to_ascii_uppercase())
    }

    /// Check if the table has a code for a character
    pub fn contains(&self, character: char) -> bool {
        self.lookup(character).is_some()
    }

    /// Number of characters in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(character, code)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(c, code)| (*c, code.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"A": ".-", "B": "-...", "S": "...", "O": "---"}"#;

    #[test]
    fn test_parse_sample() {
        let table = MorseTable::from_json(SAMPLE).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup('A').unwrap().as_str(), ".-");
        assert_eq!(table.lookup('O').unwrap().as_str(), "---");
        assert!(table.lookup('Z').is_none());
    }

    #[test]
    fn test_lookup_ignores_case() {
        let table = MorseTable::from_json(SAMPLE).unwrap();

        assert_eq!(table.lookup('b'), table.lookup('B'));
        assert!(table.contains('s'));
    }

    #[test]
    fn test_lowercase_keys_are_stored_uppercase() {
        let table = MorseTable::from_json(r#"{"e": "."}"#).unwrap();

        let (key, code) = table.iter().next().unwrap();
        assert_eq!(key, 'E');
        assert_eq!(code, ".");
    }

    #[test]
    fn test_surrounding_whitespace() {
        let table = MorseTable::from_json("\n  {\n  \"T\": \"-\"\n}\n").unwrap();
        assert_eq!(table.lookup('t').unwrap().as_str(), "-");
    }

    #[test]
    fn test_empty_object() {
        let table = MorseTable::from_json("{}").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert_eq!(MorseTable::from_json(r#"{"A": ".-""#).unwrap_err(), TableError::Parse);
        assert_eq!(MorseTable::from_json(r#"["A"]"#).unwrap_err(), TableError::Parse);
        assert_eq!(MorseTable::from_json(r#"{"A": 1}"#).unwrap_err(), TableError::Parse);
    }

    #[test]
    fn test_multi_character_key() {
        let result = MorseTable::from_json(r#"{"AB": ".-"}"#);
        assert_eq!(result.unwrap_err(), TableError::InvalidKey);

        let result = MorseTable::from_json(r#"{"": ".-"}"#);
        assert_eq!(result.unwrap_err(), TableError::InvalidKey);
    }

    #[test]
    fn test_invalid_codes() {
        let result = MorseTable::from_json(r#"{"A": ".x"}"#);
        assert_eq!(result.unwrap_err(), TableError::InvalidCode('A'));

        let result = MorseTable::from_json(r#"{"a": ""}"#);
        assert_eq!(result.unwrap_err(), TableError::InvalidCode('A'));

        // Separator is not a code token
        let mut table = MorseTable::new();
        assert_eq!(table.insert('C', "-._."), Err(TableError::InvalidCode('C')));
    }

    #[test]
    fn test_json_code_too_long() {
        let result = MorseTable::from_json(r#"{"A": "........."}"#);
        assert_eq!(result.unwrap_err(), TableError::InvalidCode('A'));
    }

    #[test]
    fn test_json_long_key() {
        let result = MorseTable::from_json(r#"{"ABCDE": ".-"}"#);
        assert_eq!(result.unwrap_err(), TableError::InvalidKey);
    }

    #[test]
    fn test_code_too_long() {
        let mut table = MorseTable::new();
        assert_eq!(
            table.insert('X', "........."),
            Err(TableError::InvalidCode('X'))
        );
        assert!(table.insert('X', "........").is_ok());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = MorseTable::new();
        table.insert('E', "-").unwrap();
        table.insert('e', ".").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup('E').unwrap().as_str(), ".");
    }

    #[test]
    fn test_full_table() {
        let mut table = MorseTable::new();
        for i in 0..MAX_ENTRIES as u32 {
            let c = char::from_u32(0x100 + i).unwrap();
            table.insert(c, ".").unwrap();
        }

        assert_eq!(table.insert('A', "."), Err(TableError::Full));
    }
}
