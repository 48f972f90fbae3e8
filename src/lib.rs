//! Oleps - a Rust library for decoding Windows OLE Property Set values
//!
//! This library decodes TypedPropertyValue records from OLE Property Set
//! ([MS-OLEPS]) byte streams: the typed metadata (author, title, timestamps,
//! page counts, ...) that legacy Office documents and other compound files
//! attach to themselves.
//!
//! # Features
//!
//! - **Tagged-union decoding**: a 16-bit variant type code selects one of
//!   ~30 payload grammars (integers, floats, currency, dates, FILETIME,
//!   GUIDs, strings, blobs, packed decimals)
//! - **Forward-only streaming**: records decode against any `Read` source
//!   with no lookahead or backtracking; every rule consumes exactly its
//!   declared bytes
//! - **Codepage handling**: legacy 8-bit strings convert to UTF-8 through
//!   `encoding_rs`
//! - **Strict or lenient**: unknown type codes decode to an empty value by
//!   default (the behavior existing property sets rely on) or fail loudly
//!   when opted in
//!
//! # Example - decoding a record
//!
//! ```
//! use oleps::{PropertyStream, PropertyValue, TypedPropertyValue};
//!
//! # fn main() -> oleps::Result<()> {
//! // VT_I4 header, reserved padding, then little-endian 42
//! let bytes = [0x03, 0x00, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00];
//! let mut stream = PropertyStream::new(&bytes[..]);
//!
//! let prop = TypedPropertyValue::decode(&mut stream)?;
//! assert!(matches!(prop.value, PropertyValue::I4(42)));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - strict mode and codepage selection
//!
//! ```
//! use oleps::{DecodeOptions, PropertyStream, TypedPropertyValue};
//!
//! let options = DecodeOptions {
//!     strict: true,
//!     codepage: Some(1252),
//! };
//!
//! // VT_DISPATCH carries no decodable payload; strict mode rejects it
//! let bytes = [0x09, 0x00, 0x00, 0x00];
//! let mut stream = PropertyStream::new(&bytes[..]);
//! assert!(TypedPropertyValue::decode_with(&mut stream, &options).is_err());
//! ```
//!
//! Decoding is sequential by construction: the width of record N+1 is only
//! known once record N has been consumed, so multiple values from one
//! stream must be decoded one after another. The enclosing property-set
//! reader is responsible for positioning the stream at a record boundary
//! and for mapping property identifiers to names.

/// Codepage and UTF-16 string decoding
pub mod codepage;

/// Variant type code constants
pub mod consts;

/// Date and time conversions (automation dates, FILETIME)
pub mod time;

mod error;
mod guid;
mod property;
mod stream;
mod value;

// Re-export public types for convenient access
pub use error::{Error, Result};
pub use guid::Guid;
pub use property::{DecodeOptions, TypedPropertyValue};
pub use stream::PropertyStream;
pub use value::{Currency, Decimal, PropertyValue};
