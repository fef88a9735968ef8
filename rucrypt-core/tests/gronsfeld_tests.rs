#![allow(missing_docs)]
use rucrypt_core::text::normalize_letters;
use rucrypt_core::{Cipher, CipherError, GronsfeldCipher, build_cipher, CipherKind};

const SAMPLE: &str = "Я не провалил тест. Я просто нашёл сто способов написать его неправильно.";

#[test]
fn test_known_answers() {
    let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
    assert_eq!(cipher.encrypt("привет").unwrap(), "ЩЫЖЩПЭ");
    assert_eq!(cipher.decrypt("ЩЫЖЩПЭ").unwrap(), "ПРИВЕТ");

    let cipher = GronsfeldCipher::new("ключ").unwrap();
    assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ЩЫЖЩПЭ");
}

#[test]
fn test_key_validation() {
    assert_eq!(GronsfeldCipher::new("").unwrap_err(), CipherError::EmptyKey);
    assert_eq!(
        GronsfeldCipher::new("КЛЮ1").unwrap_err(),
        CipherError::UnknownSymbol('1')
    );
    assert_eq!(
        GronsfeldCipher::new("KEY").unwrap_err(),
        CipherError::UnknownSymbol('K')
    );
}

#[test]
fn test_key_is_not_checked_against_text_length() {
    let cipher = GronsfeldCipher::new("ОЧЕНЬДЛИННЫЙКЛЮЧ").unwrap();
    let encrypted = cipher.encrypt("да").unwrap();
    assert_eq!(encrypted.chars().count(), 2);
    assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ДА");
}

#[test]
fn test_digits_only_text() {
    let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
    assert_eq!(cipher.encrypt("123"), Err(CipherError::EmptyText));
    assert_eq!(cipher.encrypt("   "), Err(CipherError::EmptyText));
}

#[test]
fn test_corrupted_cipher_text() {
    let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
    let encrypted = cipher.encrypt(SAMPLE).unwrap();
    let mut chars = encrypted.chars();
    let first = chars.next().unwrap().to_lowercase().to_string();
    let corrupted = first + chars.as_str();
    assert!(matches!(
        cipher.decrypt(&corrupted),
        Err(CipherError::InvalidCipherText { .. })
    ));
}

#[test]
fn test_roundtrip_restores_letters() {
    for key in ["А", "Я", "КЛЮЧ", "шифргронсфельда"] {
        let cipher = build_cipher(CipherKind::Gronsfeld, key).unwrap();
        let encrypted = cipher.encrypt(SAMPLE).unwrap();
        assert!(encrypted.chars().all(|c| ('А'..='Я').contains(&c)));
        assert_eq!(
            cipher.decrypt(&encrypted).unwrap(),
            normalize_letters(SAMPLE).unwrap(),
            "key={key}"
        );
    }
}
