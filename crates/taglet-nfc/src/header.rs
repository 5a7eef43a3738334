use crate::tnf::TypeNameFormat;

/// Flags and lengths from the wire header of a single NDEF record
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id: bool,
    pub type_name_format: TypeNameFormat,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}
