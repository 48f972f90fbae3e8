//! TypedPropertyValue decoding.
//!
//! A TypedPropertyValue record ([MS-OLEPS] section 2.15) is a 16-bit variant
//! type code, two reserved padding bytes, and a payload whose grammar the
//! type code selects. The decoder reads the header, runs exactly one payload
//! rule against the stream, and hands back the normalized value; on any
//! failure the stream is left wherever the failing read stopped.

use std::io::Read;

use zerocopy::FromBytes;

use crate::codepage;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::guid::Guid;
use crate::stream::PropertyStream;
use crate::time;
use crate::value::{Currency, Decimal, PropertyValue, RawDecimal};

/// Knobs for a decode call.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Fail with [`Error::UnsupportedVariant`] on unknown type codes instead
    /// of producing [`PropertyValue::Empty`].
    pub strict: bool,
    /// Windows codepage for VT_BSTR/VT_LPSTR text, normally taken from the
    /// property set's CodePage property. Windows-1252 when unset.
    pub codepage: Option<u32>,
}

/// One decoded (type code, value) pair from a property set.
///
/// Unknown type codes decode to [`PropertyValue::Empty`] by default, so an
/// `Empty` value is ambiguous between VT_EMPTY/VT_NULL and an unrecognized
/// code; callers that care must inspect `type_code` (or opt into
/// [`DecodeOptions::strict`]).
#[derive(Debug, Clone)]
pub struct TypedPropertyValue {
    /// The raw variant type code from the record header.
    pub type_code: u16,
    /// The decoded payload.
    pub value: PropertyValue,
}

impl TypedPropertyValue {
    /// Decode one record with default options.
    pub fn decode<R: Read>(stream: &mut PropertyStream<R>) -> Result<Self> {
        Self::decode_with(stream, &DecodeOptions::default())
    }

    /// Decode one record.
    ///
    /// Reads the 4-byte header, then exactly the payload bytes the selected
    /// rule declares, leaving the cursor positioned at the next record.
    pub fn decode_with<R: Read>(
        stream: &mut PropertyStream<R>,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let type_code = read_header(stream)?;
        let value = parse_value(stream, type_code, options)?;
        Ok(TypedPropertyValue { type_code, value })
    }
}

/// Read the 4-byte record header.
///
/// Bytes 0-1 are the little-endian type code; bytes 2-3 are alignment
/// padding with no semantic value and are discarded.
fn read_header<R: Read>(stream: &mut PropertyStream<R>) -> Result<u16> {
    let type_code = stream.read_u16()?;
    stream.skip(2)?;
    Ok(type_code)
}

/// Select and run the payload rule for `type_code`.
///
/// Aliased type codes share one rule: VT_INT and VT_UINT carry 16-bit
/// payloads exactly like VT_I2 and VT_UI2, VT_LPSTR shares the VT_BSTR
/// codepage-string grammar, VT_BLOB_OBJECT shares the VT_BLOB framing, and
/// VT_NULL is VT_EMPTY.
fn parse_value<R: Read>(
    stream: &mut PropertyStream<R>,
    type_code: u16,
    options: &DecodeOptions,
) -> Result<PropertyValue> {
    match type_code {
        VT_EMPTY | VT_NULL => Ok(PropertyValue::Empty),
        VT_I1 => Ok(PropertyValue::I1(stream.read_i8()?)),
        VT_UI1 => Ok(PropertyValue::UI1(stream.read_u8()?)),
        VT_I2 | VT_INT => Ok(PropertyValue::I2(stream.read_i16()?)),
        VT_UI2 | VT_UINT => Ok(PropertyValue::UI2(stream.read_u16()?)),
        VT_I4 => Ok(PropertyValue::I4(stream.read_i32()?)),
        VT_UI4 => Ok(PropertyValue::UI4(stream.read_u32()?)),
        VT_I8 => Ok(PropertyValue::I8(stream.read_i64()?)),
        VT_UI8 => Ok(PropertyValue::UI8(stream.read_u64()?)),
        VT_R4 => Ok(PropertyValue::R4(stream.read_f32()?)),
        VT_R8 => Ok(PropertyValue::R8(stream.read_f64()?)),
        VT_BOOL => parse_bool(stream),
        VT_CY => Ok(PropertyValue::Cy(Currency::from_raw(stream.read_i64()?))),
        VT_DATE => parse_date(stream),
        VT_ERROR => Ok(PropertyValue::Error(stream.read_u32()?)),
        VT_DECIMAL => parse_decimal(stream),
        VT_CLSID => Ok(PropertyValue::Clsid(Guid::from_bytes(
            stream.read_array()?,
        ))),
        VT_CF => Ok(PropertyValue::Cf(stream.read_u32()?)),
        VT_FILETIME => parse_filetime(stream),
        VT_BSTR | VT_LPSTR => parse_codepage_string(stream, options.codepage),
        VT_LPWSTR => parse_wide_string(stream),
        VT_BLOB | VT_BLOB_OBJECT => parse_blob(stream),
        code if options.strict => Err(Error::UnsupportedVariant(code)),
        // No rule registered: produce Empty without touching the payload.
        // Callers relying on stream position integrity depend on exactly
        // zero payload bytes being consumed here.
        _ => Ok(PropertyValue::Empty),
    }
}

/// VARIANT_BOOL: 16 bits, zero is false, any nonzero value (canonically
/// 0xFFFF) is true.
fn parse_bool<R: Read>(stream: &mut PropertyStream<R>) -> Result<PropertyValue> {
    Ok(PropertyValue::Bool(stream.read_u16()? != 0))
}

fn parse_date<R: Read>(stream: &mut PropertyStream<R>) -> Result<PropertyValue> {
    let raw = stream.read_f64()?;
    Ok(PropertyValue::Date(time::automation_date_to_datetime(raw)?))
}

fn parse_filetime<R: Read>(stream: &mut PropertyStream<R>) -> Result<PropertyValue> {
    let ticks = stream.read_u64()?;
    Ok(PropertyValue::Filetime(time::filetime_to_datetime(ticks)))
}

fn parse_decimal<R: Read>(stream: &mut PropertyStream<R>) -> Result<PropertyValue> {
    let bytes: [u8; 16] = stream.read_array()?;
    let raw = RawDecimal::read_from_bytes(&bytes).expect("RawDecimal is exactly 16 bytes");
    Ok(PropertyValue::Decimal(Decimal::from_raw(&raw)))
}

/// CodePageString: u32 byte length (terminator included in the count), the
/// bytes, then padding to the next 4-byte boundary.
fn parse_codepage_string<R: Read>(
    stream: &mut PropertyStream<R>,
    cp: Option<u32>,
) -> Result<PropertyValue> {
    let len = stream.read_u32()? as usize;
    let bytes = stream.read_bytes(len)?;
    stream.skip(pad4(len))?;
    Ok(PropertyValue::Lpstr(codepage::decode_codepage_string(
        &bytes, cp,
    )))
}

/// UnicodeString: u32 character count, 2N bytes of UTF-16LE, then padding
/// to the next 4-byte boundary.
fn parse_wide_string<R: Read>(stream: &mut PropertyStream<R>) -> Result<PropertyValue> {
    let chars = stream.read_u32()? as usize;
    let byte_len = chars * 2;
    let bytes = stream.read_bytes(byte_len)?;
    stream.skip(pad4(byte_len))?;
    Ok(PropertyValue::Lpwstr(codepage::decode_utf16le(&bytes)))
}

/// BLOB: u32 byte length, the bytes, then padding to the next 4-byte
/// boundary.
fn parse_blob<R: Read>(stream: &mut PropertyStream<R>) -> Result<PropertyValue> {
    let len = stream.read_u32()? as usize;
    let data = stream.read_bytes(len)?;
    stream.skip(pad4(len))?;
    Ok(PropertyValue::Blob(data))
}

/// Bytes needed to advance `len` to the next 4-byte boundary.
#[inline]
fn pad4(len: usize) -> usize {
    (4 - (len % 4)) % 4
}
