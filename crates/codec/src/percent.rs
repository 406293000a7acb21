//! Minimal percent-encoding for field values
//!
//! Name/value field widgets store values percent-encoded so that the pair
//! and key/value delimiters (`&`, `=`) survive inside values. Encoding covers
//! all bytes outside the unreserved set; decoding additionally maps `+` to a
//! space, matching the form-encoding dialect the original widgets consumed.
//!
//! Decoding is lossy and total: a dangling or malformed `%` escape is kept
//! verbatim rather than rejected.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a string component
///
/// Bytes outside `A-Z a-z 0-9 - _ . ~` are written as `%XX` with upper-case
/// hex digits.
pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(b));
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0F) as usize]));
            }
        }
    }
    out
}

/// Percent-decode a string component
///
/// `%XX` escapes become their byte, `+` becomes a space. Invalid escapes are
/// passed through unchanged. Invalid UTF-8 produced by decoding is replaced
/// rather than rejected.
pub fn decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
