// File:    transposition.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Table route transposition over the Cyrillic alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Table route transposition.
//!
//! The normalized open text is written into a table row by row, `k` columns
//! wide, and read out column by column starting from the rightmost column.
//! Blank cells left over at the end of the table are emitted as
//! [`MARKER`](crate::text::MARKER), and spaces inside the text are blank
//! cells too.

use crate::error::Result;
use crate::key::TranspositionKey;
use crate::text::{self, MARKER};
use crate::{Cipher, CipherKind};

const BLANK: char = ' ';

/// Route transposition cipher keyed by its column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionCipher {
    key: TranspositionKey,
}

impl TranspositionCipher {
    /// Creates a cipher from a key given as a base-10 integer string.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`](crate::CipherError::InvalidKey) if
    /// the key does not parse exactly or is not greater than 1.
    pub fn new(key: &str) -> Result<Self> {
        let key = TranspositionKey::parse(key)?;
        log::debug!("transposition cipher created with {} columns", key.columns());
        Ok(Self { key })
    }

    /// Column count of the table.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.key.columns()
    }
}

impl Cipher for TranspositionCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Transposition
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let normalized: Vec<char> = text::normalize_open_text(text)?.chars().collect();
        let cols = self.key.fit(normalized.len())?;
        let mut grid = Grid::new(normalized.len().div_ceil(cols), cols);
        log::debug!("encrypting {} chars in a {}x{} table", normalized.len(), grid.rows, cols);

        for (i, &c) in normalized.iter().enumerate() {
            grid.set(i / cols, i % cols, c);
        }

        Ok(grid
            .route()
            .map(|(row, col)| match grid.get(row, col) {
                BLANK => MARKER,
                c => c,
            })
            .collect())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let validated: Vec<char> = text::validate_cipher_text(text, true)?.chars().collect();
        let cols = self.key.fit(validated.len())?;
        let mut grid = Grid::new(validated.len().div_ceil(cols), cols);
        log::debug!("decrypting {} chars in a {}x{} table", validated.len(), grid.rows, cols);

        for ((row, col), &c) in grid.route().zip(&validated) {
            grid.set(row, col, c);
        }

        let open: String = grid
            .cells
            .iter()
            .map(|&c| if c == MARKER { BLANK } else { c })
            .collect();
        // Padding cells sit at the end of the last row.
        Ok(open.trim_end_matches(BLANK).to_string())
    }
}

/// Row-major table of `rows` x `cols` cells, blank on creation.
struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![BLANK; rows * cols],
        }
    }

    fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, c: char) {
        self.cells[row * self.cols + col] = c;
    }

    /// Reading route: columns right to left, each column top to bottom.
    fn route(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let rows = self.rows;
        (0..self.cols)
            .rev()
            .flat_map(move |col| (0..rows).map(move |row| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CipherError;

    #[test]
    fn route_reads_columns_right_to_left() {
        let grid = Grid::new(2, 3);
        let route: Vec<_> = grid.route().collect();
        assert_eq!(route, [(0, 2), (1, 2), (0, 1), (1, 1), (0, 0), (1, 0)]);
    }

    #[test]
    fn encrypt_pads_with_markers() {
        let cipher = TranspositionCipher::new("3").unwrap();
        assert_eq!(
            cipher.encrypt("Приветствую, друг!").unwrap(),
            "ИТВ*У*РЕТЮР*ПВСУДГ"
        );
    }

    #[test]
    fn cipher_text_length_is_a_full_table() {
        let cipher = TranspositionCipher::new("4").unwrap();
        let encrypted = cipher.encrypt("съешь же ещё").unwrap();
        // "СЪЕШЬ ЖЕ ЕЩ" is 11 chars, so the table is 3x4.
        assert_eq!(encrypted.chars().count(), 12);
    }

    #[test]
    fn decrypt_restores_spaces_and_drops_padding() {
        let cipher = TranspositionCipher::new("3").unwrap();
        assert_eq!(
            cipher.decrypt("ИТВ*У*РЕТЮР*ПВСУДГ").unwrap(),
            "ПРИВЕТСТВУЮ ДРУГ"
        );
    }

    #[test]
    fn decrypt_drops_trailing_spaces_of_the_open_text() {
        let cipher = TranspositionCipher::new("2").unwrap();
        assert_eq!(cipher.decrypt("РВТ*ПИЕ*").unwrap(), "ПРИВЕТ");
        assert_eq!(cipher.decrypt("Р*Е*ПИВТ").unwrap(), "ПРИ ВЕТ");
    }

    #[test]
    fn key_is_checked_against_each_text() {
        let cipher = TranspositionCipher::new("4").unwrap();
        assert_eq!(
            cipher.encrypt("привет"),
            Err(CipherError::KeyTooLong { key: 4, max: 3 })
        );
        assert_eq!(
            cipher.decrypt("ИТРЕПВ"),
            Err(CipherError::KeyTooLong { key: 4, max: 3 })
        );
        assert!(cipher.encrypt("привет, мир").is_ok());
    }
}
