// File:    key.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Transposition and Gronsfeld keys and the rules that validate them.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Keys of the two ciphers and the rules that accept them.

use crate::alphabet;
use crate::error::{CipherError, Result};

/// Column count of the transposition table. Always greater than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionKey(usize);

impl TranspositionKey {
    /// Parses and validates a key given as a base-10 integer string.
    ///
    /// Only the key shape is checked here; the length check against a text
    /// happens per call through [`TranspositionKey::fit`].
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the string is not exactly an
    /// integer, or if the integer is not greater than 1.
    pub fn parse(key: &str) -> Result<Self> {
        let invalid = |reason| CipherError::InvalidKey {
            key: key.to_string(),
            reason,
        };
        if key.is_empty() {
            return Err(invalid("the key is empty"));
        }
        // Signs are not digits: "+3" and "-3" are malformed, not 3 and -3.
        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("contains a non-numeric character"));
        }
        let value: i64 = key
            .parse()
            .map_err(|_| invalid("the value is out of range"))?;
        let k = validate_transposition_key(value, 0)?;
        Ok(Self(k))
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(self) -> usize {
        self.0
    }

    /// Re-validates the key against a text of `text_len` characters.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::KeyTooLong`] if the key exceeds half the length.
    pub fn fit(self, text_len: usize) -> Result<usize> {
        check_fits(self.0, text_len)
    }
}

/// Validates a transposition key against a text length.
///
/// A `text_len` of zero checks only the key shape.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `k <= 1`, and
/// [`CipherError::KeyTooLong`] if `text_len > 0` and `k > text_len / 2`.
pub fn validate_transposition_key(k: i64, text_len: usize) -> Result<usize> {
    if k <= 1 {
        return Err(CipherError::InvalidKey {
            key: k.to_string(),
            reason: "must be greater than 1",
        });
    }
    let k = usize::try_from(k).map_err(|_| CipherError::InvalidKey {
        key: k.to_string(),
        reason: "the value is out of range",
    })?;
    check_fits(k, text_len)
}

fn check_fits(k: usize, text_len: usize) -> Result<usize> {
    let max = text_len / 2;
    if text_len > 0 && k > max {
        return Err(CipherError::KeyTooLong { key: k, max });
    }
    Ok(k)
}

/// Repeating shift sequence of the Gronsfeld cipher, as alphabet indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GronsfeldKey(Vec<usize>);

impl GronsfeldKey {
    /// Shifts in key order.
    #[must_use]
    pub fn shifts(&self) -> &[usize] {
        &self.0
    }

    /// Number of shifts before the key repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a validated key holds at least one shift.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validates a Gronsfeld key string and converts it to shifts.
///
/// Lowercase letters are folded. Digits, spaces and punctuation are not
/// alphabet letters, so a key such as `"КЛЮ1"` is rejected.
///
/// # Errors
///
/// Returns [`CipherError::EmptyKey`] for an empty key and
/// [`CipherError::UnknownSymbol`] for the first character outside the alphabet.
pub fn validate_gronsfeld_key(key: &str) -> Result<GronsfeldKey> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let shifts = key
        .chars()
        .map(alphabet::index_of)
        .collect::<Result<Vec<usize>>>()?;
    Ok(GronsfeldKey(shifts))
}
