// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The main library crate for rucrypt-core, exposing the classical Cyrillic ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # rucrypt Core Library
//!
//! Two classical ciphers over the 32-letter Russian alphabet:
//!
//! * [`TranspositionCipher`] - a table route transposition keyed by a column count.
//! * [`GronsfeldCipher`] - a repeating additive shift keyed by a string of letters.
//!
//! Both are historical ciphers and provide no real confidentiality.
//!
//! ```
//! use rucrypt_core::{Cipher, TranspositionCipher};
//!
//! let cipher = TranspositionCipher::new("3")?;
//! assert_eq!(cipher.encrypt("привет")?, "ИТРЕПВ");
//! assert_eq!(cipher.decrypt("ИТРЕПВ")?, "ПРИВЕТ");
//! # Ok::<(), rucrypt_core::CipherError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed Cyrillic alphabet and its symbol/index mapping.
pub mod alphabet;
/// The error type shared by every cipher.
pub mod error;
/// The Gronsfeld additive cipher.
pub mod gronsfeld;
/// Key types and key validation rules.
pub mod key;
/// Open-text normalization and cipher-text validation.
pub mod text;
/// The table route transposition cipher.
pub mod transposition;

pub use error::{CipherError, Result};
pub use gronsfeld::GronsfeldCipher;
pub use transposition::TranspositionCipher;

/// Common interface of the ciphers in this crate.
///
/// Instances are immutable after construction, so a shared reference may be
/// used from several threads at once.
pub trait Cipher: Send + Sync {
    /// Which cipher this is.
    fn kind(&self) -> CipherKind;

    /// Normalizes `text` and encrypts it.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyText`] if no alphabet letter survives
    /// normalization, or a key error if the key does not fit the text.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Validates `text` as cipher text and decrypts it.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCipherText`] if the text is empty or
    /// contains a character the cipher never emits.
    fn decrypt(&self, text: &str) -> Result<String>;
}

/// The ciphers available in this crate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Table route transposition, see [`TranspositionCipher`].
    Transposition,
    /// Gronsfeld additive cipher, see [`GronsfeldCipher`].
    Gronsfeld,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transposition => f.write_str("transposition"),
            Self::Gronsfeld => f.write_str("gronsfeld"),
        }
    }
}

/// Builds a cipher of the given kind from its textual key.
///
/// # Errors
///
/// Returns whatever key error the selected cipher's constructor reports.
pub fn build_cipher(kind: CipherKind, key: &str) -> Result<Box<dyn Cipher>> {
    Ok(match kind {
        CipherKind::Transposition => Box::new(TranspositionCipher::new(key)?),
        CipherKind::Gronsfeld => Box::new(GronsfeldCipher::new(key)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cipher_dispatches_on_kind() {
        let cipher = build_cipher(CipherKind::Transposition, "2").unwrap();
        assert_eq!(cipher.kind(), CipherKind::Transposition);
        assert_eq!(cipher.encrypt("привет").unwrap(), "РВТПИЕ");

        let cipher = build_cipher(CipherKind::Gronsfeld, "КЛЮЧ").unwrap();
        assert_eq!(cipher.kind(), CipherKind::Gronsfeld);
        assert_eq!(cipher.encrypt("привет").unwrap(), "ЩЫЖЩПЭ");
    }

    #[test]
    fn build_cipher_reports_key_errors() {
        assert!(matches!(
            build_cipher(CipherKind::Transposition, "КЛЮЧ"),
            Err(CipherError::InvalidKey { .. })
        ));
        assert_eq!(
            build_cipher(CipherKind::Gronsfeld, "").err(),
            Some(CipherError::EmptyKey)
        );
    }

    #[test]
    fn cipher_kind_serializes_lowercase() {
        assert_eq!(CipherKind::Gronsfeld.to_string(), "gronsfeld");
        let json = serde_json::to_string(&CipherKind::Transposition).unwrap();
        assert_eq!(json, "\"transposition\"");
    }
}
