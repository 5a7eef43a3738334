use crate::record::NdefRecord;

/// An NDEF message from a single tag scan, records in document order
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefMessage {
    pub records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }
}

impl From<Vec<NdefRecord>> for NdefMessage {
    fn from(records: Vec<NdefRecord>) -> Self {
        Self::new(records)
    }
}
