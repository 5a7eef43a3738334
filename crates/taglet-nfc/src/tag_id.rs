use std::fmt;

/// Raw UID bytes reported for a scanned tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId(Vec<u8>);

impl TagId {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for TagId {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Colon separated uppercase hex, `04:A1:3F:9B`
impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.0.iter();

        if let Some(byte) = bytes.next() {
            write!(f, "{byte:02X}")?;
        }

        for byte in bytes {
            write!(f, ":{byte:02X}")?;
        }

        Ok(())
    }
}
