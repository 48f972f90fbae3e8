//! Decoded property value payloads.

use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use zerocopy::{LE, U16, U32, U64};
use zerocopy_derive::FromBytes as DeriveFromBytes;

use crate::guid::Guid;

/// Property value types
///
/// One decoded payload from a TypedPropertyValue record. The variant is
/// fully determined by the record's type code; `Empty` covers VT_EMPTY,
/// VT_NULL and, in lenient mode, any type code with no decoding rule.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Empty,
    I1(i8),
    UI1(u8),
    I2(i16),
    UI2(u16),
    I4(i32),
    UI4(u32),
    I8(i64),
    UI8(u64),
    R4(f32),
    R8(f64),
    Bool(bool),
    /// VT_CY fixed-point currency amount
    Cy(Currency),
    /// VT_DATE automation date resolved to a calendar timestamp
    Date(NaiveDateTime),
    /// VT_FILETIME resolved to a UTC timestamp
    Filetime(DateTime<Utc>),
    /// VT_DECIMAL packed decimal
    Decimal(Decimal),
    /// VT_ERROR HRESULT, stored verbatim
    Error(u32),
    /// VT_CF clipboard format identifier
    Cf(u32),
    Clsid(Guid),
    Lpstr(String),
    Lpwstr(String),
    Blob(Bytes),
}

impl PropertyValue {
    /// String content, for either string flavor.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Lpstr(s) | PropertyValue::Lpwstr(s) => Some(s),
            _ => None,
        }
    }
}

/// A VT_CY currency amount.
///
/// Stored on the wire as a signed 64-bit integer scaled by 10 000, giving
/// four decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency(i64);

impl Currency {
    /// Wrap the raw scaled integer.
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw scaled integer (amount x 10 000).
    pub fn raw(&self) -> i64 {
        self.0
    }

    /// The decimal amount.
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

/// Raw VT_DECIMAL payload (16 bytes on the wire)
#[derive(Debug, Clone, DeriveFromBytes)]
#[repr(C)]
pub(crate) struct RawDecimal {
    /// Reserved, no semantic value
    reserved: U16<LE>,
    /// Power-of-ten scale factor, 0..=28
    scale: u8,
    /// 0x80 when negative, 0 otherwise
    sign: u8,
    /// High 32 bits of the mantissa
    hi32: U32<LE>,
    /// Low 64 bits of the mantissa
    lo64: U64<LE>,
}

/// A VT_DECIMAL packed decimal number.
///
/// Carries a 96-bit unsigned mantissa, a power-of-ten scale and a sign bit;
/// the represented value is `mantissa * 10^-scale`, negated when the sign
/// bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    scale: u8,
    mantissa: u128,
}

impl Decimal {
    pub(crate) fn from_raw(raw: &RawDecimal) -> Self {
        Self {
            negative: raw.sign & 0x80 != 0,
            scale: raw.scale,
            mantissa: ((raw.hi32.get() as u128) << 64) | raw.lo64.get() as u128,
        }
    }

    /// The 96-bit mantissa, high and low halves combined.
    pub fn mantissa(&self) -> u128 {
        self.mantissa
    }

    /// The power-of-ten scale factor.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Approximate value as a double.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.mantissa as f64 / 10f64.powi(self.scale as i32);
        if self.negative { -magnitude } else { magnitude }
    }
}
