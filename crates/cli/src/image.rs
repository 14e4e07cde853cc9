//! Program image loading.
//!
//! A program image is a text file of whitespace-separated hexadecimal words
//! (optionally prefixed with `0x`). Everything after a `#` on a line is a
//! comment. Words are loaded at consecutive addresses starting from 0.

use std::fs;
use std::path::Path;

/// Parses the text of a program image into instruction words.
///
/// # Errors
///
/// Returns a message naming the line and token of the first word that is not
/// a valid 16-bit hexadecimal number.
pub fn parse_image(text: &str) -> Result<Vec<u16>, String> {
    let mut words = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default();
        for token in code.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let word = u16::from_str_radix(digits, 16)
                .map_err(|e| format!("line {}: bad instruction word '{token}': {e}", lineno + 1))?;
            words.push(word);
        }
    }
    Ok(words)
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// Returns a message if the file cannot be read or does not parse.
pub fn load_image(path: &Path) -> Result<Vec<u16>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read program {}: {e}", path.display()))?;
    parse_image(&text).map_err(|e| format!("{}: {e}", path.display()))
}
