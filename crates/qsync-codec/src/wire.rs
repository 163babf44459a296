//! Query-string wire format.
//!
//! `key=value` pairs joined by `&`, repeated keys accumulating into a
//! multi-value in order of appearance. Percent-encoding follows the usual
//! form-urlencoded conventions: `+` and `%20` both decode to a space; on
//! encode, ASCII alphanumerics and `-._~` pass through and everything else
//! is `%XX`-escaped.

use qsync_model::query::QueryMap;

/// Parses a query string (leading `?` tolerated) into a raw snapshot.
/// Segments without `=` parse as empty-string values; empty segments and
/// empty keys are skipped.
pub fn parse_query(input: &str) -> QueryMap {
    let input = input.strip_prefix('?').unwrap_or(input);
    let mut map = QueryMap::new();
    for pair in input.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = percent_decode(key);
        if key.is_empty() {
            continue;
        }
        map.append(key, percent_decode(value));
    }
    map
}

/// Formats a raw snapshot as a query string (no leading `?`). List values
/// emit one `key=value` pair per element, in element order.
pub fn format_query(query: &QueryMap) -> String {
    let mut out = String::new();
    for (key, value) in query.iter() {
        for token in value.tokens() {
            if !out.is_empty() {
                out.push('&');
            }
            percent_encode_into(&mut out, key);
            out.push('=');
            percent_encode_into(&mut out, token);
        }
    }
    out
}

fn percent_encode_into(out: &mut String, input: &str) {
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => match hex_pair(bytes[i + 1], bytes[i + 2]) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                None => out.push(b'%'),
            },
            b'+' => out.push(b' '),
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    let high = (high as char).to_digit(16)?;
    let low = (low as char).to_digit(16)?;
    Some((high as u8) << 4 | low as u8)
}
