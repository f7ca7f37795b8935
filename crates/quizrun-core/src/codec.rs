//! Obfuscation codec with format auto-detection.
//!
//! Persisted files come in two coexisting shapes with no explicit format
//! tag: plain JSON, and the same JSON run through a per-byte XOR with a
//! fixed single-byte key. Detection sniffs only the first byte, which keeps
//! backward compatibility with pre-existing plain files.
//!
//! The obfuscation keeps quiz answers and results from being casually
//! readable. It is not security-grade and never claims to be.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DecodeError;

/// Fixed key applied to every persisted obfuscated file.
pub const XOR_KEY: u8 = 0xA5;

/// First bytes of plain JSON: `{`, `[`, space, tab, LF, CR.
const PLAIN_MARKERS: [u8; 6] = [0x7B, 0x5B, 0x20, 0x09, 0x0A, 0x0D];

/// `{` and `[` after XOR with [`XOR_KEY`].
const OBFUSCATED_MARKERS: [u8; 2] = [0xDE, 0xFE];

/// Apply a per-byte XOR with `key`.
///
/// Self-inverse: `transform(&transform(x, k), k) == x` for every byte
/// sequence and every key, including the empty sequence.
pub fn transform(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

/// Detect whether a payload is obfuscated, from its first byte only.
///
/// Unknown first bytes default to "obfuscated": a corrupted obfuscated file
/// is far more likely than a plain file starting with a stray byte.
pub fn is_obfuscated(data: &[u8]) -> bool {
    match data.first() {
        None => false,
        Some(first) if PLAIN_MARKERS.contains(first) => false,
        Some(first) if OBFUSCATED_MARKERS.contains(first) => true,
        Some(_) => true,
    }
}

/// Serialize `value` to pretty-printed JSON bytes, optionally obfuscated.
///
/// The pretty form (2-space indent, raw UTF-8) matches what earlier versions
/// of the tool wrote, so plain files stay diffable against old ones.
pub fn encode<T: Serialize>(value: &T, obfuscate: bool) -> serde_json::Result<Vec<u8>> {
    let text = serde_json::to_string_pretty(value)?;
    let bytes = text.into_bytes();
    Ok(if obfuscate {
        transform(&bytes, XOR_KEY)
    } else {
        bytes
    })
}

/// Parse a payload in either format back into a value.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, DecodeError> {
    let plain;
    let bytes: &[u8] = if is_obfuscated(data) {
        tracing::debug!("payload detected as obfuscated");
        plain = transform(data, XOR_KEY);
        &plain
    } else {
        data
    };
    let text = std::str::from_utf8(bytes)?;
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn transform_is_involutive() {
        let samples: [&[u8]; 4] = [b"", b"A", b"hello world", &[0x00, 0xFF, 0xA5, 0x7B]];
        for sample in samples {
            for key in [0x00u8, 0x01, 0xA5, 0xFF] {
                assert_eq!(transform(&transform(sample, key), key), sample);
            }
        }
    }

    #[test]
    fn transform_empty_returns_empty() {
        assert!(transform(b"", XOR_KEY).is_empty());
    }

    #[test]
    fn transform_single_byte_under_default_key() {
        // 'A' (0x41) XOR 0xA5 == 0xE4
        assert_eq!(transform(b"A", XOR_KEY), vec![0xE4]);
        assert_eq!(transform(&[0xE4], XOR_KEY), vec![0x41]);
    }

    #[test]
    fn detection_matches_encoding() {
        let value = json!({"a": 1});
        let plain = encode(&value, false).unwrap();
        let obfuscated = encode(&value, true).unwrap();
        assert!(!is_obfuscated(&plain));
        assert!(is_obfuscated(&obfuscated));
    }

    #[test]
    fn obfuscated_object_starts_with_0xde() {
        // '{' (0x7B) XOR 0xA5 == 0xDE
        let bytes = encode(&json!({"a": 1}), true).unwrap();
        assert_eq!(bytes[0], 0xDE);
    }

    #[test]
    fn plain_markers_detected_as_plain() {
        for first in [0x7Bu8, 0x5B, 0x20, 0x09, 0x0A, 0x0D] {
            assert!(!is_obfuscated(&[first, b'x']));
        }
    }

    #[test]
    fn ambiguous_first_byte_defaults_to_obfuscated() {
        assert!(is_obfuscated(b"garbage"));
        assert!(is_obfuscated(&[0x00]));
    }

    #[test]
    fn empty_payload_is_not_obfuscated() {
        assert!(!is_obfuscated(b""));
    }

    #[test]
    fn roundtrip_both_encodings() {
        let value = json!({
            "quiz_name": "général",
            "nom": "Ðupont",
            "prenom": "Zoé",
            "correct_count": 2,
            "questions": [{"question_id": 1, "correct": true}]
        });
        for obfuscate in [false, true] {
            let bytes = encode(&value, obfuscate).unwrap();
            let back: Value = decode(&bytes).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        // Obfuscate a `{`-led but invalid UTF-8 sequence so detection routes
        // it through the transform before the UTF-8 check.
        let bad = transform(&[0x7B, 0xFF, 0xFE], XOR_KEY);
        let result: Result<Value, _> = decode(&bad);
        assert!(matches!(result, Err(DecodeError::InvalidUtf8(_))));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let result: Result<Value, _> = decode(b"{not json");
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }
}
