use taglet_nfc::{DecodedResult, NdefMessage, TagId, parser};

/// Shown by the shell before any tag has been scanned
pub const IDLE_PROMPT: &str = "Aproxime um cartão NFC";

const NO_READABLE_DATA: &str = "Tag detetada, mas sem dados legíveis.";

/// A tag discovery event, already split into NDEF messages by the platform
pub fn handle_tag_scanned(messages: &[NdefMessage], tag_id: Option<&TagId>) -> String {
    tracing::info!(messages = messages.len(), "tag discovered");

    let result = taglet_nfc::decode(messages, tag_id);
    display_text(&result)
}

/// A tag discovery event delivered as one raw NDEF message dump. A dump that
/// does not parse still falls back to the tag id.
pub fn handle_raw_tag_scanned(data: &[u8], tag_id: Option<&TagId>) -> String {
    tracing::debug!("tag dump: {}", hex::encode(data));

    let messages = match parser::parse_ndef_message(data) {
        Ok(message) => vec![message],
        Err(error) => {
            tracing::warn!("discarding unreadable tag dump: {error}");
            Vec::new()
        }
    };

    handle_tag_scanned(&messages, tag_id)
}

pub fn display_text(result: &DecodedResult) -> String {
    match result {
        DecodedResult::Text(text) => text.clone(),
        DecodedResult::TagId(id) => format!("ID da Tag: {id}"),
        DecodedResult::NoReadableData => NO_READABLE_DATA.to_string(),
    }
}

// only used for uniffi
mod ffi {
    use super::*;

    #[uniffi::export]
    fn handle_tag_scanned(messages: Vec<NdefMessage>, tag_id: Option<Vec<u8>>) -> String {
        let tag_id = tag_id.map(TagId::new);
        super::handle_tag_scanned(&messages, tag_id.as_ref())
    }

    #[uniffi::export]
    fn handle_raw_tag_scanned(data: Vec<u8>, tag_id: Option<Vec<u8>>) -> String {
        let tag_id = tag_id.map(TagId::new);
        super::handle_raw_tag_scanned(&data, tag_id.as_ref())
    }

    #[uniffi::export]
    fn idle_prompt() -> String {
        IDLE_PROMPT.to_string()
    }
}
