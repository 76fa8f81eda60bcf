//! Turn byte dumps copied out of a debugger or test vector back into text.

use tracing::debug;

use crate::error::{DevtoolsError, Result};

/// Decoded content of a two-file test frame.
pub const SAMPLE_BYTES: [u8; 46] = [
    0x54, 0x68, 0x69, 0x73, 0x20, 0x69, 0x73, 0x20, 0x74, 0x68, 0x65, 0x20, 0x63, 0x6f, 0x6e, 0x74,
    0x65, 0x6e, 0x74, 0x20, 0x6f, 0x66, 0x66, 0x69, 0x72, 0x73, 0x74, 0x20, 0x66, 0x69, 0x6c, 0x65,
    0x2e, 0x0a, 0x73, 0x65, 0x63, 0x6f, 0x6e, 0x64, 0x20, 0x66, 0x69, 0x6c, 0x65, 0x2e,
];

/// Parse a list such as `[0x54, 0x68, 105]`. Tokens are separated by commas
/// or whitespace and may be hex (`0x`) or decimal.
pub fn parse_byte_list(text: &str) -> Result<Vec<u8>> {
    let body = text.trim();
    let body = body.strip_prefix('[').unwrap_or(body);
    let body = body.strip_suffix(']').unwrap_or(body);

    let bytes = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(index, token)| parse_byte(token).ok_or_else(|| malformed(index, token)))
        .collect::<Result<Vec<u8>>>()?;
    debug!(len = bytes.len(), "parsed byte list");
    Ok(bytes)
}

fn parse_byte(token: &str) -> Option<u8> {
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16).ok(),
        None => token.parse().ok(),
    }
}

/// Parse contiguous hex digits such as `546869`.
pub fn parse_hex_string(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    hex::decode(text).map_err(|e| {
        let index = match e {
            hex::FromHexError::InvalidHexCharacter { index, .. } => index / 2,
            _ => text.len() / 2,
        };
        malformed(index, text)
    })
}

fn malformed(index: usize, token: &str) -> DevtoolsError {
    DevtoolsError::MalformedByte {
        index,
        token: token.to_string(),
    }
}

/// Map every byte to the char with the same code point.
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Text followed by the byte count.
pub fn describe(bytes: &[u8]) -> String {
    format!("{} {}", decode_text(bytes), bytes.len())
}
