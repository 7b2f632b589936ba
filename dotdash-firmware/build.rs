//! Build script for dotdash-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates morse.json at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest code the firmware table accepts
const MAX_CODE_LEN: usize = 8;

/// Largest table the firmware can hold
const MAX_ENTRIES: usize = 64;

fn main() {
    setup_linker();
    validate_table();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate morse.json at compile time
fn validate_table() {
    println!("cargo:rerun-if-changed=morse.json");

    let table_path = Path::new("morse.json");

    if !table_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: morse.json not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a character to Morse code table.            ║\n\
            ║  Please create morse.json in the dotdash-firmware directory.     ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(table_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read morse.json                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let table: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid JSON syntax in morse.json                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let errors = validate_entries(&table);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid Morse table in morse.json                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=morse.json validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check the table shape, keys and codes
fn validate_entries(table: &serde_json::Value) -> Vec<String> {
    let entries = match table.as_object() {
        Some(entries) => entries,
        None => return vec!["Top level must be an object of \"A\": \".-\" pairs".to_string()],
    };

    let mut errors = Vec::new();

    if entries.len() > MAX_ENTRIES {
        errors.push(format!(
            "{} entries, at most {} fit in firmware",
            entries.len(),
            MAX_ENTRIES
        ));
    }

    for letter in 'A'..='Z' {
        let upper = letter.to_string();
        let lower = letter.to_ascii_lowercase().to_string();
        if !entries.contains_key(&upper) && !entries.contains_key(&lower) {
            errors.push(format!("Missing letter '{}'", letter));
        }
    }

    for (key, code) in entries {
        if key.chars().count() != 1 {
            errors.push(format!("Key '{}' must be a single character", key));
        }

        let code = match code.as_str() {
            Some(code) => code,
            None => {
                errors.push(format!("Code for '{}' must be a string", key));
                continue;
            }
        };

        if code.is_empty() || code.len() > MAX_CODE_LEN {
            errors.push(format!("Code for '{}' must be 1-{} symbols", key, MAX_CODE_LEN));
        }
        if !code.chars().all(|c| matches!(c, '.' | '-' | ' ')) {
            errors.push(format!("Code for '{}' may only use '.', '-' and ' '", key));
        }
    }

    errors
}
