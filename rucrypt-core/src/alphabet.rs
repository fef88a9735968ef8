// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The 32-letter Russian alphabet and its symbol/index mapping.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The 32-letter Russian alphabet used by both ciphers.
//!
//! Membership is decided by a fixed table, never by the process locale.
//! `Ё` is not part of the alphabet.

use crate::error::{CipherError, Result};

/// Number of letters in the alphabet.
pub const SIZE: usize = 32;

/// The alphabet in index order.
pub const LETTERS: [char; SIZE] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

const FIRST_UPPER: u32 = 'А' as u32;
const FIRST_LOWER: u32 = 'а' as u32;

/// Returns `true` if `c` is an uppercase alphabet letter.
#[must_use]
pub const fn is_upper(c: char) -> bool {
    matches!(c, 'А'..='Я')
}

/// Returns `true` if `c` is a lowercase alphabet letter.
#[must_use]
pub const fn is_lower(c: char) -> bool {
    matches!(c, 'а'..='я')
}

/// Folds an alphabet letter of either case to uppercase.
///
/// Returns `None` for anything outside the alphabet.
#[must_use]
pub fn to_upper(c: char) -> Option<char> {
    if is_upper(c) {
        Some(c)
    } else if is_lower(c) {
        char::from_u32(c as u32 - FIRST_LOWER + FIRST_UPPER)
    } else {
        None
    }
}

/// Returns the index of `c` in the alphabet, folding lowercase first.
///
/// # Errors
///
/// Returns [`CipherError::UnknownSymbol`] if `c` is not an alphabet letter.
pub fn index_of(c: char) -> Result<usize> {
    to_upper(c)
        .and_then(|upper| LETTERS.iter().position(|&l| l == upper))
        .ok_or(CipherError::UnknownSymbol(c))
}

/// Returns the letter at `index`.
///
/// # Panics
///
/// Panics if `index` is not below [`SIZE`].
#[must_use]
pub const fn char_at(index: usize) -> char {
    LETTERS[index]
}
