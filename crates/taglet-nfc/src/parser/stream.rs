use winnow::Bytes;

/// Tag dumps arrive complete, no partial chunked reads here
pub type Stream<'i> = &'i Bytes;

pub fn new(bytes: &[u8]) -> Stream<'_> {
    Bytes::new(bytes)
}
