//! Base64 VLQ encoding used by the `mappings` field.

const BASE64_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const VLQ_BASE_SHIFT: u32 = 5;
const VLQ_BASE: i64 = 1 << VLQ_BASE_SHIFT;
const VLQ_BASE_MASK: i64 = VLQ_BASE - 1;
const VLQ_CONTINUATION_BIT: i64 = VLQ_BASE;

/// Encode a signed value. The sign lives in the least significant bit.
pub fn encode(value: i64) -> String {
    let mut out = String::new();
    encode_into(value, &mut out);
    out
}

pub fn encode_into(value: i64, out: &mut String) {
    let mut vlq = if value < 0 {
        ((-value) << 1) | 1
    } else {
        value << 1
    };

    loop {
        let mut digit = vlq & VLQ_BASE_MASK;
        vlq >>= VLQ_BASE_SHIFT;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION_BIT;
        }
        out.push(BASE64_CHARS[digit as usize] as char);
        if vlq == 0 {
            break;
        }
    }
}

/// Decode one value from the front of `input`.
///
/// Returns the value and the number of characters consumed, or `None` on
/// malformed or truncated input.
pub fn decode(input: &str) -> Option<(i64, usize)> {
    let mut result: i64 = 0;
    let mut shift = 0u32;

    for (consumed, byte) in input.bytes().enumerate() {
        let digit = base64_value(byte)? as i64;
        result += (digit & VLQ_BASE_MASK) << shift;
        if digit & VLQ_CONTINUATION_BIT == 0 {
            let negative = result & 1 == 1;
            let magnitude = result >> 1;
            let value = if negative { -magnitude } else { magnitude };
            return Some((value, consumed + 1));
        }
        shift += VLQ_BASE_SHIFT;
        if shift > 60 {
            return None;
        }
    }

    None
}

fn base64_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
