//! Base64 image payload decoding.

use std::sync::LazyLock;

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine;
use regex::Regex;
use thiserror::Error;

/// Result type for payload decoding.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Errors that can occur while decoding an image payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Image is required")]
    Empty,

    #[error("Invalid base64 image data: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
}

/// Data-URI header sent by browsers, e.g. `data:image/png;base64,`.
static DATA_URI_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/\w+;base64,").expect("valid data URI pattern"));

/// Standard alphabet, padding optional, trailing bits tolerated.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decoded image bytes, ready to send to a detection provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl ImagePayload {
    /// Decode a base64 image string, stripping an optional data-URI header.
    ///
    /// ASCII whitespace inside the encoded data is ignored and the URL-safe
    /// characters `-` and `_` are read as `+` and `/`. The decoded buffer
    /// must not be empty.
    pub fn decode(encoded: &str) -> PayloadResult<Self> {
        let compact: String = strip_data_uri(encoded)
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();

        if compact.is_empty() {
            return Err(PayloadError::Empty);
        }

        let bytes = LENIENT_STANDARD.decode(compact.as_bytes())?;
        if bytes.is_empty() {
            return Err(PayloadError::Empty);
        }

        Ok(Self { bytes })
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Remove a leading `data:image/<subtype>;base64,` header if present.
pub fn strip_data_uri(encoded: &str) -> &str {
    match DATA_URI_PREFIX.find(encoded) {
        Some(m) => &encoded[m.end()..],
        None => encoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

    #[test]
    fn test_decode_raw_base64() {
        let bytes = ImagePayload::decode(PNG_B64).unwrap().into_bytes();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_data_uri_and_raw_decode_identically() {
        let raw = ImagePayload::decode(PNG_B64).unwrap();
        let with_png_header =
            ImagePayload::decode(&format!("data:image/png;base64,{PNG_B64}")).unwrap();
        let with_jpeg_header =
            ImagePayload::decode(&format!("data:image/jpeg;base64,{PNG_B64}")).unwrap();
        assert_eq!(raw, with_png_header);
        assert_eq!(raw, with_jpeg_header);
    }

    #[test]
    fn test_strip_data_uri_only_at_start() {
        assert_eq!(strip_data_uri("data:image/webp;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri("AAAAdata:image/png;base64,"), "AAAAdata:image/png;base64,");
        assert_eq!(strip_data_uri("data:text/plain;base64,AAAA"), "data:text/plain;base64,AAAA");
    }

    #[test]
    fn test_decode_tolerates_whitespace_and_missing_padding() {
        let expected = ImagePayload::decode("aGVsbG8=").unwrap();
        assert_eq!(expected.clone().into_bytes(), b"hello");
        assert_eq!(ImagePayload::decode("aGVsbG8").unwrap(), expected);
        assert_eq!(ImagePayload::decode("aGVs\nbG8=\n").unwrap(), expected);
    }

    #[test]
    fn test_decode_accepts_url_safe_alphabet() {
        let url_safe = ImagePayload::decode("aGVsbG8-_w").unwrap();
        let standard = ImagePayload::decode("aGVsbG8+/w==").unwrap();
        assert_eq!(url_safe, standard);
        assert_eq!(standard.into_bytes(), b"hello>\xff");
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(ImagePayload::decode(""), Err(PayloadError::Empty)));
        assert!(matches!(ImagePayload::decode("  \n"), Err(PayloadError::Empty)));
        assert!(matches!(
            ImagePayload::decode("data:image/png;base64,"),
            Err(PayloadError::Empty)
        ));
    }

    #[test]
    fn test_decode_invalid_characters() {
        assert!(matches!(
            ImagePayload::decode("not*base64!"),
            Err(PayloadError::InvalidEncoding(_))
        ));
    }
}
