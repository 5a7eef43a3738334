use crate::{header::NdefHeader, tnf::TypeNameFormat};

/// Type marker for an RTD Text record, the single byte `T` (0x54)
pub const TEXT_RECORD_TYPE: &[u8] = b"T";

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Build a record from the fields platform NFC stacks hand out, filling
    /// in wire flags for a standalone short record
    pub fn new(
        type_name_format: TypeNameFormat,
        type_: Vec<u8>,
        id: Option<Vec<u8>>,
        payload: Vec<u8>,
    ) -> Self {
        let header = NdefHeader {
            message_begin: true,
            message_end: true,
            chunked: false,
            short_record: payload.len() < 256,
            has_id: id.is_some(),
            type_name_format,
            type_length: type_.len() as u8,
            payload_length: payload.len() as u32,
            id_length: id.as_ref().map(|id| id.len() as u8),
        };

        Self {
            header,
            type_,
            id,
            payload,
        }
    }

    /// A record the text decoder should even look at: well known TNF and the
    /// type field is exactly `T`. Anything else is skipped, not an error.
    pub fn is_text_record(&self) -> bool {
        self.header.type_name_format == TypeNameFormat::WellKnown
            && self.type_.as_slice() == TEXT_RECORD_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tnf: TypeNameFormat, type_: &[u8]) -> NdefRecord {
        NdefRecord::new(tnf, type_.to_vec(), None, vec![0x02, b'e', b'n', b'h', b'i'])
    }

    #[test]
    fn well_known_t_classifies_as_text() {
        assert!(record(TypeNameFormat::WellKnown, b"T").is_text_record());
    }

    #[test]
    fn other_types_do_not_classify() {
        assert!(!record(TypeNameFormat::WellKnown, b"U").is_text_record());
        assert!(!record(TypeNameFormat::WellKnown, b"Tx").is_text_record());
        assert!(!record(TypeNameFormat::WellKnown, b"").is_text_record());
    }

    #[test]
    fn other_type_name_formats_do_not_classify() {
        assert!(!record(TypeNameFormat::Mime, b"T").is_text_record());
        assert!(!record(TypeNameFormat::External, b"T").is_text_record());
        assert!(!record(TypeNameFormat::Empty, b"T").is_text_record());
    }
}
