// tests/text_tests.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use post_crypt::error::{CoreError, ErrorKind, InputField};
use post_crypt::{
    decrypt_text, encrypt_text, encrypt_with_passphrase, parse_passphrase, require_message,
    Passphrase,
};

const HELLO_WORLD_B64: &str = "AAECAwQFBgcICQoLDA0OD6NZw6necupvpx+YWFKPrd4=";

#[test]
fn test_text_roundtrip_unicode() {
    let passphrase = parse_passphrase("密钥 🔑").unwrap();
    let message = "在此输入要加密的消息, with mixed scripts";

    let encoded = encrypt_text(message, &passphrase).unwrap();
    assert_ne!(encoded, message);
    assert_eq!(decrypt_text(&encoded, &passphrase).unwrap(), message);
}

#[test]
fn test_encrypt_text_emits_padded_base64_blob() {
    let passphrase = parse_passphrase("secret123").unwrap();
    let encoded = encrypt_text("hello world", &passphrase).unwrap();

    // 32-byte blob → 44 base64 chars
    assert_eq!(encoded.len(), 44);
    assert_eq!(STANDARD.decode(&encoded).unwrap().len(), 32);
}

#[test]
fn test_decrypt_text_known_vector() {
    let passphrase = parse_passphrase("secret123").unwrap();
    assert_eq!(
        decrypt_text(HELLO_WORLD_B64, &passphrase).unwrap(),
        "hello world"
    );
}

#[test]
fn test_decrypt_text_ignores_whitespace() {
    let passphrase = parse_passphrase("secret123").unwrap();
    let wrapped = format!("  {}\r\n{}\n", &HELLO_WORLD_B64[..20], &HELLO_WORLD_B64[20..]);

    assert_eq!(decrypt_text(&wrapped, &passphrase).unwrap(), "hello world");
}

#[test]
fn test_decrypt_text_rejects_invalid_base64() {
    let passphrase = parse_passphrase("secret123").unwrap();
    let err = decrypt_text("not*base64!", &passphrase).unwrap_err();

    assert!(matches!(err, CoreError::Base64(_)));
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_decrypt_text_rejects_short_blob() {
    let passphrase = parse_passphrase("secret123").unwrap();
    let err = decrypt_text("AAECAw==", &passphrase).unwrap_err();

    assert!(matches!(err, CoreError::BlobTooShort { len: 4 }));
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_decrypt_text_rejects_non_utf8_plaintext() {
    let passphrase = parse_passphrase("secret123").unwrap();
    let blob = encrypt_with_passphrase(&[0xff, 0xfe, 0xfd], &passphrase);

    let err = decrypt_text(&STANDARD.encode(blob), &passphrase).unwrap_err();
    assert!(matches!(err, CoreError::InvalidUtf8));
    assert_eq!(err.kind(), ErrorKind::DecryptionFailure);
}

#[test]
fn test_decrypt_text_wrong_passphrase() {
    let right = parse_passphrase("secret123").unwrap();
    let wrong = parse_passphrase("secret124").unwrap();
    let encoded = encrypt_text("hello world", &right).unwrap();

    match decrypt_text(&encoded, &wrong) {
        Err(err) => assert_eq!(err.kind(), ErrorKind::DecryptionFailure),
        Ok(text) => assert_ne!(text, "hello world"),
    }
}

#[test]
fn test_blank_passphrase_is_empty_input() {
    for raw in ["", "   ", "\t\n"] {
        let Err(err) = parse_passphrase(raw) else {
            panic!("blank passphrase {raw:?} was accepted");
        };
        assert!(matches!(err, CoreError::EmptyInput(InputField::Passphrase)));
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    let unchecked = Passphrase::from("  ".to_owned());
    let err = encrypt_text("hello", &unchecked).unwrap_err();
    assert!(matches!(err, CoreError::EmptyInput(InputField::Passphrase)));
}

#[test]
fn test_blank_message_is_empty_input() {
    let passphrase = parse_passphrase("secret123").unwrap();

    for message in ["", "  \n"] {
        let err = encrypt_text(message, &passphrase).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInput(InputField::Message)));

        let err = decrypt_text(message, &passphrase).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInput(InputField::Message)));
    }

    assert_eq!(require_message(" keep spaces ").unwrap(), " keep spaces ");
}
