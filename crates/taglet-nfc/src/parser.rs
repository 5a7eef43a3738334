pub mod stream;

use stream::Stream;
use winnow::{
    ModalResult, Parser,
    binary::{
        Endianness,
        bits::{bits, bool as take_bool, take as take_bits},
    },
    error::{ContextError, ErrMode},
    stream::Stream as _,
    token::{any, take},
};

use crate::{
    NdefParseError, header::NdefHeader, message::NdefMessage, record::NdefRecord,
    tnf::TypeNameFormat,
};

/// Parse a raw NDEF message, concatenated records up to the one flagged
/// message end, as handed over by shells that read tag memory directly.
/// Bytes after the final record are left alone, tags usually pad with a
/// terminator TLV and zeroes.
pub fn parse_ndef_message(data: &[u8]) -> Result<NdefMessage, NdefParseError> {
    if data.is_empty() {
        return Err(NdefParseError::EmptyTagData);
    }

    let mut input = stream::new(data);

    parse_message(&mut input).map_err(|error| NdefParseError::ParsingError(error.to_string()))
}

pub fn parse_message(input: &mut Stream<'_>) -> ModalResult<NdefMessage> {
    let mut records = Vec::new();

    loop {
        let record = parse_ndef_record.parse_next(input)?;
        let message_end = record.header.message_end;
        records.push(record);

        if message_end || input.eof_offset() == 0 {
            break;
        }
    }

    Ok(NdefMessage::new(records))
}

pub fn parse_ndef_record(input: &mut Stream<'_>) -> ModalResult<NdefRecord> {
    let header = parse_header.parse_next(input)?;
    let type_ = parse_type(input, header.type_length)?;
    let id = parse_id(input, header.id_length)?;
    let payload = parse_payload(input, header.payload_length)?;

    Ok(NdefRecord {
        header,
        type_,
        id,
        payload,
    })
}

// private

fn parse_header_byte(input: &mut Stream<'_>) -> ModalResult<(bool, bool, bool, bool, bool, u8)> {
    bits::<_, _, ErrMode<ContextError>, _, _>((
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bits(3_u8),
    ))
    .parse_next(input)
}

fn parse_header(input: &mut Stream<'_>) -> ModalResult<NdefHeader> {
    let (message_begin, message_end, chunked, short_record, has_id, tnf_bits) =
        parse_header_byte(input)?;

    let type_name_format = TypeNameFormat::from_bits(tnf_bits);
    let type_length = winnow::binary::u8.parse_next(input)?;

    let payload_length = if short_record {
        any.map(|byte: u8| byte as u32).parse_next(input)?
    } else {
        winnow::binary::u32(Endianness::Big).parse_next(input)?
    };

    let id_length = if has_id {
        Some(any.parse_next(input)?)
    } else {
        None
    };

    Ok(NdefHeader {
        message_begin,
        message_end,
        chunked,
        short_record,
        has_id,
        type_name_format,
        type_length,
        payload_length,
        id_length,
    })
}

fn parse_type(input: &mut Stream<'_>, type_length: u8) -> ModalResult<Vec<u8>> {
    take(type_length as usize)
        .map(|bytes: &[u8]| bytes.to_vec())
        .parse_next(input)
}

fn parse_id(input: &mut Stream<'_>, id_length: Option<u8>) -> ModalResult<Option<Vec<u8>>> {
    match id_length {
        Some(id_length) => take(id_length as usize)
            .map(|bytes: &[u8]| Some(bytes.to_vec()))
            .parse_next(input),

        None => Ok(None),
    }
}

fn parse_payload(input: &mut Stream<'_>, payload_length: u32) -> ModalResult<Vec<u8>> {
    take(payload_length as usize)
        .map(|bytes: &[u8]| bytes.to_vec())
        .parse_next(input)
}
