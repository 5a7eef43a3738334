use taglet_macros::impl_default_for;

use crate::{
    NdefParseError,
    message::NdefMessage,
    parser, payload,
    record::NdefRecord,
    scan::{self, DecodedResult},
    tag_id::TagId,
};

impl_default_for!(FfiNdefDecoder);

/// Stateless decoder handle for the mobile shells
#[derive(Debug, Clone, uniffi::Object)]
pub struct FfiNdefDecoder;

#[uniffi::export]
impl FfiNdefDecoder {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self
    }

    #[uniffi::method]
    pub fn decode(&self, messages: Vec<NdefMessage>, tag_id: Option<Vec<u8>>) -> DecodedResult {
        let tag_id = tag_id.map(TagId::new);
        scan::decode(&messages, tag_id.as_ref())
    }

    #[uniffi::method]
    pub fn parse(&self, data: Vec<u8>) -> Result<NdefMessage, NdefParseError> {
        parser::parse_ndef_message(&data)
    }

    #[uniffi::method]
    pub fn text_from_record(&self, record: NdefRecord) -> Option<String> {
        if !record.is_text_record() {
            return None;
        }

        payload::decode_text_payload(&record.payload)
            .map(|payload| payload.text)
            .ok()
    }
}
