use crate::{
    message::NdefMessage,
    payload::{self, TextPayload},
    tag_id::TagId,
};

/// What a single scan event decodes to, exactly one per scan
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum DecodedResult {
    Text(String),
    TagId(String),
    NoReadableData,
}

/// Decode a scan event: the first readable text record wins, then the tag id,
/// then nothing
pub fn decode(messages: &[NdefMessage], tag_id: Option<&TagId>) -> DecodedResult {
    if let Some(payload) = first_text_payload(messages) {
        return DecodedResult::Text(payload.text);
    }

    match tag_id {
        Some(id) if !id.is_empty() => DecodedResult::TagId(id.to_string()),
        _ => DecodedResult::NoReadableData,
    }
}

/// First record across all messages, in document order, that classifies as a
/// text record and decodes cleanly
pub fn first_text_payload(messages: &[NdefMessage]) -> Option<TextPayload> {
    for message in messages {
        for record in &message.records {
            if !record.is_text_record() {
                continue;
            }

            match payload::decode_text_payload(&record.payload) {
                Ok(text) => return Some(text),

                // a malformed text record must not end the scan
                Err(error) => tracing::warn!("skipping malformed text record: {error}"),
            }
        }
    }

    None
}
