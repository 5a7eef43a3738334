/// Encoding flag, bit 7 of the status byte
const UTF16_FLAG: u8 = 0b1000_0000;

/// Language code length, bits 5..0 of the status byte (bit 6 is reserved)
const LANGUAGE_CODE_LENGTH_MASK: u8 = 0b0011_1111;

/// Decoded content of an RTD Text record payload
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TextPayload {
    pub format: TextPayloadFormat,
    pub language_code_length: u8,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TextPayloadFormat {
    Utf8,
    Utf16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TextPayloadError {
    #[error("payload is empty, no status byte to read")]
    EmptyPayload,

    #[error("language code length {language_code_length} leaves no text in a {payload_length} byte payload")]
    TextMissing {
        language_code_length: u8,
        payload_length: u64,
    },

    #[error("text bytes are not valid {format:?}")]
    InvalidText { format: TextPayloadFormat },
}

/// Decode the payload of a record already classified as a text record.
///
/// The language code bytes are consumed but not exposed, the reader does not
/// filter by language.
pub fn decode_text_payload(payload: &[u8]) -> Result<TextPayload, TextPayloadError> {
    let Some(&status) = payload.first() else {
        return Err(TextPayloadError::EmptyPayload);
    };

    let format = if status & UTF16_FLAG != 0 {
        TextPayloadFormat::Utf16
    } else {
        TextPayloadFormat::Utf8
    };

    let language_code_length = status & LANGUAGE_CODE_LENGTH_MASK;

    // the status byte and language code must leave at least one text byte,
    // this also rejects language codes that run past the payload itself
    if payload.len() <= language_code_length as usize + 1 {
        return Err(TextPayloadError::TextMissing {
            language_code_length,
            payload_length: payload.len() as u64,
        });
    }

    let text_bytes = &payload[language_code_length as usize + 1..];

    let text = match format {
        TextPayloadFormat::Utf8 => String::from_utf8(text_bytes.to_vec())
            .map_err(|_| TextPayloadError::InvalidText { format })?,
        TextPayloadFormat::Utf16 => {
            decode_utf16(text_bytes).ok_or(TextPayloadError::InvalidText { format })?
        }
    };

    Ok(TextPayload {
        format,
        language_code_length,
        text,
    })
}

/// Text record UTF-16 is big endian unless a byte order mark says otherwise
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let (bytes, big_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        _ => (bytes, true),
    };

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn encode_payload(text: &str, language: &str, format: TextPayloadFormat) -> Vec<u8> {
        assert!(language.len() <= 63);

        let mut status = language.len() as u8;
        if format == TextPayloadFormat::Utf16 {
            status |= UTF16_FLAG;
        }

        let mut payload = vec![status];
        payload.extend_from_slice(language.as_bytes());

        match format {
            TextPayloadFormat::Utf8 => payload.extend_from_slice(text.as_bytes()),
            TextPayloadFormat::Utf16 => {
                payload.extend(text.encode_utf16().flat_map(|unit| unit.to_be_bytes()))
            }
        }

        payload
    }

    #[test]
    fn utf8_round_trip() {
        let long_language = "x".repeat(63);

        for language in ["", "en", long_language.as_str()] {
            let payload = encode_payload("Bem-vindo", language, TextPayloadFormat::Utf8);
            let decoded = decode_text_payload(&payload).unwrap();

            assert_eq!(decoded.format, TextPayloadFormat::Utf8);
            assert_eq!(decoded.language_code_length as usize, language.len());
            assert_eq!(decoded.text, "Bem-vindo");
        }
    }

    #[test]
    fn utf16_round_trip() {
        let long_language = "x".repeat(63);

        for language in ["", "pt", long_language.as_str()] {
            let payload = encode_payload("Olá, cartão", language, TextPayloadFormat::Utf16);
            let decoded = decode_text_payload(&payload).unwrap();

            assert_eq!(decoded.format, TextPayloadFormat::Utf16);
            assert_eq!(decoded.language_code_length as usize, language.len());
            assert_eq!(decoded.text, "Olá, cartão");
        }
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(decode_text_payload(&[]), Err(TextPayloadError::EmptyPayload));
    }

    #[test]
    fn one_text_byte_is_enough() {
        let payload = [2, b'e', b'n', b'A'];
        assert_eq!(decode_text_payload(&payload).unwrap().text, "A");
    }

    #[test]
    fn payloads_without_room_for_text_are_rejected() {
        // every combination where the language code swallows the payload,
        // including lengths that run past the end of it
        for language_code_length in 0..=LANGUAGE_CODE_LENGTH_MASK {
            for payload_length in 1..=language_code_length as usize + 1 {
                let mut payload = vec![0u8; payload_length];
                payload[0] = language_code_length;

                assert_eq!(
                    decode_text_payload(&payload),
                    Err(TextPayloadError::TextMissing {
                        language_code_length,
                        payload_length: payload_length as u64,
                    }),
                    "language_code_length {language_code_length}, payload_length {payload_length}",
                );
            }
        }
    }

    #[test]
    fn reserved_bit_is_ignored() {
        let payload = [0b0100_0010, b'e', b'n', b'h', b'i'];
        let decoded = decode_text_payload(&payload).unwrap();

        assert_eq!(decoded.format, TextPayloadFormat::Utf8);
        assert_eq!(decoded.language_code_length, 2);
        assert_eq!(decoded.text, "hi");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let payload = [2, b'e', b'n', 0xC3, 0x28];

        assert_eq!(
            decode_text_payload(&payload),
            Err(TextPayloadError::InvalidText {
                format: TextPayloadFormat::Utf8
            })
        );
    }

    #[test]
    fn odd_utf16_byte_count_is_rejected() {
        let payload = [0x82, b'p', b't', 0x00, 0x4F, 0x00];

        assert_eq!(
            decode_text_payload(&payload),
            Err(TextPayloadError::InvalidText {
                format: TextPayloadFormat::Utf16
            })
        );
    }

    #[test]
    fn unpaired_utf16_surrogate_is_rejected() {
        // lone high surrogate
        let payload = [0x80, 0xD8, 0x00];

        assert_eq!(
            decode_text_payload(&payload),
            Err(TextPayloadError::InvalidText {
                format: TextPayloadFormat::Utf16
            })
        );
    }

    #[test]
    fn utf16_byte_order_mark_picks_the_endianness() {
        let big_endian = [0x80, 0xFE, 0xFF, 0x00, 0x4F];
        assert_eq!(decode_text_payload(&big_endian).unwrap().text, "O");

        let little_endian = [0x80, 0xFF, 0xFE, 0x4F, 0x00];
        assert_eq!(decode_text_payload(&little_endian).unwrap().text, "O");

        let no_mark = [0x80, 0x00, 0x4F];
        assert_eq!(decode_text_payload(&no_mark).unwrap().text, "O");
    }
}
