//! Codepage decoding for property set strings.
//!
//! CodePageString payloads carry one byte per character in a legacy Windows
//! codepage; UnicodeString payloads carry UTF-16LE code units. Both encode a
//! terminating null inside their declared length, which is stripped here.
//! Conversion goes through `encoding_rs` rather than hand-rolled tables.

use encoding_rs::Encoding;

/// Decode a CodePageString payload to UTF-8.
///
/// The property set's `[CodePage]` property decides the encoding; callers
/// that do not know it (or name an unsupported one) fall back to
/// Windows-1252, the most common codepage in practice. Everything from the
/// first null terminator on is dropped.
///
/// # Examples
///
/// ```
/// use oleps::codepage::decode_codepage_string;
///
/// let bytes = b"Hello\x00";
/// assert_eq!(decode_codepage_string(bytes, Some(1252)), "Hello");
/// ```
pub fn decode_codepage_string(bytes: &[u8], codepage: Option<u32>) -> String {
    let bytes = strip_null_terminator(bytes);
    if bytes.is_empty() {
        return String::new();
    }

    let encoding = codepage
        .and_then(codepage_to_encoding)
        .unwrap_or(encoding_rs::WINDOWS_1252);

    // encoding_rs guarantees valid UTF-8 output
    encoding.decode(bytes).0.into_owned()
}

/// Decode a UTF-16LE payload to UTF-8, stopping at the first null code unit.
///
/// Invalid sequences are replaced with U+FFFD rather than failing; a string
/// property with a broken surrogate pair should not abort the enclosing
/// property set.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    if bytes.len() < 2 {
        return String::new();
    }

    // Round down to whole code units
    let bytes = &bytes[..bytes.len() & !1];

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .take_while(|&unit| unit != 0)
        .collect();

    String::from_utf16_lossy(&units)
}

/// View of `bytes` up to (not including) the first null byte.
#[inline]
fn strip_null_terminator(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

/// Map a Windows codepage identifier to an `encoding_rs` encoding.
///
/// Covers the codepages that show up in real property sets. Returns `None`
/// for identifiers `encoding_rs` has no equivalent for.
#[inline]
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // Windows codepages
        874 => Some(encoding_rs::WINDOWS_874),   // Thai
        1250 => Some(encoding_rs::WINDOWS_1250), // Central European
        1251 => Some(encoding_rs::WINDOWS_1251), // Cyrillic
        1252 => Some(encoding_rs::WINDOWS_1252), // Western European (most common)
        1253 => Some(encoding_rs::WINDOWS_1253), // Greek
        1254 => Some(encoding_rs::WINDOWS_1254), // Turkish
        1255 => Some(encoding_rs::WINDOWS_1255), // Hebrew
        1256 => Some(encoding_rs::WINDOWS_1256), // Arabic
        1257 => Some(encoding_rs::WINDOWS_1257), // Baltic
        1258 => Some(encoding_rs::WINDOWS_1258), // Vietnamese

        // East Asian codepages
        932 => Some(encoding_rs::SHIFT_JIS), // Japanese Shift-JIS
        936 => Some(encoding_rs::GBK),       // Simplified Chinese (GB2312/GBK)
        949 => Some(encoding_rs::EUC_KR),    // Korean
        950 => Some(encoding_rs::BIG5),      // Traditional Chinese (Big5)
        54936 => Some(encoding_rs::GB18030), // Chinese GB18030

        // ISO 8859 series
        28592 => Some(encoding_rs::ISO_8859_2),
        28595 => Some(encoding_rs::ISO_8859_5),
        28597 => Some(encoding_rs::ISO_8859_7),
        28598 => Some(encoding_rs::ISO_8859_8),
        28605 => Some(encoding_rs::ISO_8859_15),

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH),

        // Unicode
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        65001 => Some(encoding_rs::UTF_8),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        assert_eq!(
            decode_codepage_string(b"Hello, World!", Some(1252)),
            "Hello, World!"
        );
    }

    #[test]
    fn test_decode_stops_at_null() {
        assert_eq!(decode_codepage_string(b"Hello\x00World", Some(1252)), "Hello");
    }

    #[test]
    fn test_decode_windows_1252_quotes() {
        // 0x93/0x94 are curly quotes in Windows-1252
        let result = decode_codepage_string(b"\x93quoted\x94", Some(1252));
        assert_eq!(result, "\u{201C}quoted\u{201D}");
    }

    #[test]
    fn test_unknown_codepage_falls_back() {
        assert_eq!(decode_codepage_string(b"plain", Some(99999)), "plain");
        assert_eq!(decode_codepage_string(b"plain", None), "plain");
    }

    #[test]
    fn test_decode_utf16le() {
        let bytes = b"H\x00e\x00l\x00l\x00o\x00\x00\x00";
        assert_eq!(decode_utf16le(bytes), "Hello");
    }

    #[test]
    fn test_decode_utf16le_empty() {
        assert_eq!(decode_utf16le(b""), "");
        assert_eq!(decode_utf16le(b"\x00\x00"), "");
    }
}
