pub mod logging;
pub mod scan;

pub use taglet_nfc::{
    DecodedResult, NdefMessage, NdefRecord, TagId, TextPayload, TypeNameFormat,
};

uniffi::setup_scaffolding!();
