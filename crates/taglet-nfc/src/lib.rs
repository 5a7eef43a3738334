uniffi::setup_scaffolding!();

pub mod ffi;
pub mod header;
pub mod message;
pub mod parser;
pub mod payload;
pub mod record;
pub mod scan;
pub mod tag_id;
pub mod tnf;

pub use message::NdefMessage;
pub use payload::{TextPayload, TextPayloadError, TextPayloadFormat};
pub use record::NdefRecord;
pub use scan::{DecodedResult, decode, first_text_payload};
pub use tag_id::TagId;
pub use tnf::TypeNameFormat;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum NdefParseError {
    #[error("no tag bytes to parse")]
    EmptyTagData,

    #[error("error parsing the NDEF message: {0}")]
    ParsingError(String),
}
