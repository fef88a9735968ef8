//! Line-oriented interactive session.

use log::warn;
use rucrypt_core::{Cipher, CipherKind, build_cipher};
use std::io::{self, BufRead, Write};

const OPERATION_PROMPT: &str = "Operation (encrypt, decrypt, exit): ";

/// Asks for a key, then serves encrypt/decrypt requests until `exit` or end of input.
pub(crate) fn run_session<R: BufRead, W: Write>(
    kind: CipherKind,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "Cipher: {kind}")?;
    let cipher = loop {
        let Some(key) = prompt(&mut input, &mut out, "Key: ")? else {
            return Ok(());
        };
        match build_cipher(kind, key.trim()) {
            Ok(cipher) => break cipher,
            Err(e) => {
                warn!("Rejected key: {e}");
                writeln!(out, "Error: {e}")?;
            }
        }
    };

    while let Some(line) = prompt(&mut input, &mut out, OPERATION_PROMPT)? {
        let operation = line.trim().to_lowercase();
        let encrypt = match operation.as_str() {
            "encrypt" | "e" => true,
            "decrypt" | "d" => false,
            "exit" | "quit" | "q" => break,
            "" => continue,
            other => {
                writeln!(out, "Unknown operation '{other}'")?;
                continue;
            }
        };
        let Some(text) = prompt(&mut input, &mut out, "Text: ")? else {
            break;
        };
        match apply(cipher.as_ref(), encrypt, &text) {
            Ok(result) => writeln!(out, "Result: {result}")?,
            Err(e) => {
                warn!("Operation '{operation}' failed: {e}");
                writeln!(out, "Error: {e}")?;
            }
        }
    }
    Ok(())
}

fn apply(cipher: &dyn Cipher, encrypt: bool, text: &str) -> rucrypt_core::Result<String> {
    if encrypt {
        cipher.encrypt(text)
    } else {
        cipher.decrypt(text)
    }
}

/// Prints `label` and reads one line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(kind: CipherKind, script: &str) -> String {
        let mut out = Vec::new();
        run_session(kind, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn encrypts_and_decrypts_until_exit() {
        let out = session(
            CipherKind::Transposition,
            "3\nencrypt\nпривет\ndecrypt\nИТРЕПВ\nexit\nencrypt\nпривет\n",
        );
        assert!(out.contains("Result: ИТРЕПВ"));
        assert!(out.contains("Result: ПРИВЕТ"));
        assert_eq!(out.matches("Result:").count(), 2);
    }

    #[test]
    fn bad_key_is_asked_again() {
        let out = session(CipherKind::Gronsfeld, "КЛЮ1\nКЛЮЧ\ne\nпривет\n");
        assert!(out.contains("Error: Invalid key: symbol '1'"));
        assert!(out.contains("Result: ЩЫЖЩПЭ"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let out = session(CipherKind::Gronsfeld, "КЛЮЧ\nd\nщыжщпэ\nfoo\nd\nЩЫЖЩПЭ\n");
        assert!(out.contains("Error: Invalid cipher text"));
        assert!(out.contains("Unknown operation 'foo'"));
        assert!(out.contains("Result: ПРИВЕТ"));
    }

    #[test]
    fn end_of_input_before_key_is_quiet() {
        let out = session(CipherKind::Gronsfeld, "");
        assert!(!out.contains("Error"));
    }
}
