// File:    text.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Normalization of open text and validation of cipher text.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Canonical forms of open text and cipher text.

use crate::alphabet;
use crate::error::{CipherError, Result};

/// Marker the transposition cipher emits for a blank grid cell.
pub const MARKER: char = '*';

/// Normalizes raw open text.
///
/// Alphabet letters are kept and folded to uppercase, every whitespace
/// character becomes a plain space, and everything else is dropped.
///
/// # Errors
///
/// Returns [`CipherError::EmptyText`] if no alphabet letter remains.
pub fn normalize_open_text(raw: &str) -> Result<String> {
    let mut letters = 0usize;
    let normalized: String = raw
        .chars()
        .filter_map(|c| {
            if let Some(upper) = alphabet::to_upper(c) {
                letters += 1;
                Some(upper)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();

    if letters == 0 {
        return Err(CipherError::EmptyText);
    }
    log::trace!(
        "normalized open text: {} chars in, {} chars out",
        raw.chars().count(),
        normalized.chars().count()
    );
    Ok(normalized)
}

/// Normalizes raw open text and removes the spaces as well.
///
/// # Errors
///
/// Returns [`CipherError::EmptyText`] if no alphabet letter remains.
pub fn normalize_letters(raw: &str) -> Result<String> {
    let mut normalized = normalize_open_text(raw)?;
    normalized.retain(|c| c != ' ');
    Ok(normalized)
}

/// Checks that `raw` is already in canonical cipher-text form.
///
/// Only uppercase alphabet letters are accepted, plus [`MARKER`] when
/// `allow_marker` is set. Nothing is case-folded or filtered.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCipherText`] if the text is empty or holds
/// any other character.
pub fn validate_cipher_text(raw: &str, allow_marker: bool) -> Result<String> {
    if raw.is_empty() {
        return Err(CipherError::InvalidCipherText {
            reason: "the cipher text is empty".to_string(),
        });
    }
    if let Some(bad) = raw
        .chars()
        .find(|&c| !(alphabet::is_upper(c) || (allow_marker && c == MARKER)))
    {
        return Err(CipherError::InvalidCipherText {
            reason: format!("unexpected character '{bad}' in {raw}"),
        });
    }
    Ok(raw.to_string())
}
