// File:    error.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Error types shared by the rucrypt ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for the rucrypt ciphers.
//!
//! Every variant describes rejected input. Nothing is retried or repaired
//! internally: the caller has to supply a corrected key or text.

use thiserror::Error;

/// Errors produced while building a cipher or running one of its operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The transposition key is not an integer greater than 1.
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey {
        /// The key as it was supplied.
        key: String,
        /// Why the key was rejected.
        reason: &'static str,
    },

    /// The transposition key exceeds half of the text length.
    #[error("Key must not exceed half of the text length: key {key}, maximum {max}")]
    KeyTooLong {
        /// The rejected key.
        key: usize,
        /// The largest key the text allows.
        max: usize,
    },

    /// The Gronsfeld key is empty.
    #[error("Invalid key: the key is empty")]
    EmptyKey,

    /// A key character is not a letter of the alphabet.
    #[error("Invalid key: symbol '{0}' is not a letter of the alphabet")]
    UnknownSymbol(char),

    /// No alphabet letter is left in the open text after normalization.
    #[error("Empty open text")]
    EmptyText,

    /// The cipher text is empty or holds a character the cipher never emits.
    #[error("Invalid cipher text: {reason}")]
    InvalidCipherText {
        /// What is wrong with the cipher text.
        reason: String,
    },
}

/// Result type alias for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;
