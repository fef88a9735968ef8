// File:    gronsfeld.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Gronsfeld polyalphabetic additive cipher over the Cyrillic alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Gronsfeld cipher.
//!
//! Letter `i` of the text is shifted by key letter `i mod key_len`, modulo
//! the alphabet size. Spaces have no place in the cipher text and are
//! removed before encryption.

use crate::alphabet::{self, SIZE};
use crate::error::Result;
use crate::key::{self, GronsfeldKey};
use crate::text;
use crate::{Cipher, CipherKind};

/// Gronsfeld cipher keyed by a string of alphabet letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GronsfeldCipher {
    key: GronsfeldKey,
}

impl GronsfeldCipher {
    /// Creates a cipher from its key text.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyKey`](crate::CipherError::EmptyKey) for an
    /// empty key and [`CipherError::UnknownSymbol`](crate::CipherError::UnknownSymbol)
    /// if any key character is not an alphabet letter.
    pub fn new(key: &str) -> Result<Self> {
        let key = key::validate_gronsfeld_key(key)?;
        log::debug!("gronsfeld cipher created with a key of {} letters", key.len());
        Ok(Self { key })
    }

    /// The validated key.
    #[must_use]
    pub const fn key(&self) -> &GronsfeldKey {
        &self.key
    }

    fn shift(&self, letters: &str, apply: impl Fn(usize, usize) -> usize) -> Result<String> {
        letters
            .chars()
            .zip(self.key.shifts().iter().cycle())
            .map(|(c, &k)| {
                let index = apply(alphabet::index_of(c)?, k) % SIZE;
                Ok(alphabet::char_at(index))
            })
            .collect()
    }
}

impl Cipher for GronsfeldCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Gronsfeld
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let letters = text::normalize_letters(text)?;
        log::debug!("encrypting {} letters", letters.chars().count());
        self.shift(&letters, |p, k| p + k)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let letters = text::validate_cipher_text(text, false)?;
        log::debug!("decrypting {} letters", letters.chars().count());
        self.shift(&letters, |c, k| c + SIZE - k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CipherError;

    #[test]
    fn shifts_wrap_around_the_alphabet() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(cipher.encrypt("яблоко").unwrap(), "АВМПЛП");
        assert_eq!(cipher.decrypt("АВМПЛП").unwrap(), "ЯБЛОКО");
    }

    #[test]
    fn key_repeats_over_the_text() {
        let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
        assert_eq!(cipher.encrypt("привет").unwrap(), "ЩЫЖЩПЭ");
        assert_eq!(cipher.decrypt("ЩЫЖЩПЭ").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn spaces_are_removed_before_encryption() {
        let cipher = GronsfeldCipher::new("А").unwrap();
        assert_eq!(cipher.encrypt("при вет!").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn decrypt_rejects_marker_and_spaces() {
        let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
        for raw in ["ЩЫЖ*ПЭ", "ЩЫЖ ЩПЭ", "щЫЖЩПЭ", ""] {
            assert!(
                matches!(cipher.decrypt(raw), Err(CipherError::InvalidCipherText { .. })),
                "{raw:?}"
            );
        }
    }
}
