//! Demonstration runs: encrypt a text, optionally damage the result, decrypt it back.

use rucrypt_core::{Cipher, CipherKind, build_cipher};
use std::io::{self, Write};

const SAMPLE: &str = "Я не провалил тест. Я просто нашёл сто способов написать его неправильно.";

/// One demonstration run.
pub(crate) struct Scenario<'a> {
    kind: CipherKind,
    key: &'a str,
    text: &'a str,
    corrupt: bool,
}

impl<'a> Scenario<'a> {
    pub(crate) const fn custom(kind: CipherKind, key: &'a str, text: &'a str, corrupt: bool) -> Self {
        Self {
            kind,
            key,
            text,
            corrupt,
        }
    }
}

fn builtin(kind: CipherKind) -> [(&'static str, Scenario<'static>); 4] {
    let scenario = |key, text, corrupt| Scenario::custom(kind, key, text, corrupt);
    match kind {
        CipherKind::Gronsfeld => [
            ("Key containing a digit", scenario("КЛЮ1", SAMPLE, false)),
            ("Case folding and space removal", scenario("КЛЮЧ", SAMPLE, false)),
            ("Digits-only text", scenario("КЛЮЧ", "123", false)),
            ("Corrupted cipher text", scenario("КЛЮЧ", SAMPLE, true)),
        ],
        CipherKind::Transposition => [
            ("Key longer than half the text", scenario("4", "привет", false)),
            ("Case folding and punctuation removal", scenario("3", "Приветствую, друг!", false)),
            ("Digits-only text", scenario("3", "123123123", false)),
            ("Corrupted cipher text", scenario("3", "Привет, друг", true)),
        ],
    }
}

/// Runs one scenario. Progress goes to `out`, a cipher error to `err`.
pub(crate) fn check<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    scenario: &Scenario<'_>,
) -> io::Result<()> {
    match run(scenario) {
        Ok((cipher_text, decrypted)) => {
            writeln!(out, "Key = {}", scenario.key)?;
            writeln!(out, "Input text: {}", scenario.text)?;
            writeln!(out, "Cipher text: {cipher_text}")?;
            writeln!(out, "Decrypted text: {decrypted}")
        }
        Err(e) => {
            log::debug!("demo scenario failed: {e}");
            writeln!(err, "Error: {e}")
        }
    }
}

/// Runs the built-in scenarios of one cipher.
pub(crate) fn run_builtin<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    kind: CipherKind,
) -> io::Result<()> {
    writeln!(out, "Demo: {kind} cipher")?;
    for (title, scenario) in builtin(kind) {
        writeln!(out)?;
        writeln!(out, "{title}:")?;
        check(out, err, &scenario)?;
    }
    Ok(())
}

fn run(scenario: &Scenario<'_>) -> rucrypt_core::Result<(String, String)> {
    let cipher: Box<dyn Cipher> = build_cipher(scenario.kind, scenario.key)?;
    let mut cipher_text = cipher.encrypt(scenario.text)?;
    if scenario.corrupt {
        cipher_text = lowercase_first(&cipher_text);
    }
    let decrypted = cipher.decrypt(&cipher_text)?;
    Ok((cipher_text, decrypted))
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
