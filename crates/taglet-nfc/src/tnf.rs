/// Type Name Format, the 3 bit category of a record's type field
#[derive(Debug, Copy, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TypeNameFormat {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl TypeNameFormat {
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            7 => Self::Reserved,
            _ => unreachable!("TNF is only 3 bits"),
        }
    }
}
