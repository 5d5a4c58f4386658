use std::fmt::Write as _;

use super::error::MagnetError;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decodes padded RFC 4648 base-32. Lowercase input is accepted.
///
/// Returns `None` unless the input length is a multiple of 8 and the padding
/// is one of the legal lengths (0, 1, 3, 4 or 6 characters).
pub(crate) fn base32_decode(input: &str) -> Option<Vec<u8>> {
    let bytes = input.as_bytes();
    if bytes.len() % 8 != 0 {
        return None;
    }

    let pad = bytes.iter().rev().take_while(|&&b| b == b'=').count();
    if !matches!(pad, 0 | 1 | 3 | 4 | 6) {
        return None;
    }
    let data = &bytes[..bytes.len() - pad];

    let mut output = Vec::with_capacity(data.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &c in data {
        let upper = c.to_ascii_uppercase();
        let value = BASE32_ALPHABET.iter().position(|&x| x == upper)? as u64;
        buffer = (buffer << 5) | value;
        bits_in_buffer += 5;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            output.push((buffer >> bits_in_buffer) as u8);
            buffer &= (1 << bits_in_buffer) - 1;
        }
    }

    Some(output)
}

/// Encodes bytes as padded, uppercase RFC 4648 base-32.
pub(crate) fn base32_encode(data: &[u8]) -> String {
    // Output characters for a trailing chunk of 0..=5 bytes.
    const CHARS_FOR_LEN: [usize; 6] = [0, 2, 4, 5, 7, 8];

    let mut output = String::with_capacity(data.len().div_ceil(5) * 8);

    for chunk in data.chunks(5) {
        let mut block = [0u8; 5];
        block[..chunk.len()].copy_from_slice(chunk);
        let bits = block.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

        let used = CHARS_FOR_LEN[chunk.len()];
        for i in 0..8 {
            if i < used {
                let index = ((bits >> (35 - i * 5)) & 0x1f) as usize;
                output.push(BASE32_ALPHABET[index] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}

/// Reverses query-string escaping: `%XX` becomes the byte `0xXX` and `+`
/// becomes a space.
///
/// A `%` that is not followed by two hex digits, or a result that is not
/// valid UTF-8, fails with [`MagnetError::InvalidEncoding`].
pub(crate) fn percent_decode(s: &str) -> Result<String, MagnetError> {
    let bytes = s.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let byte = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| Some((hex_digit(hex[0])? << 4) | hex_digit(hex[1])?))
                    .ok_or_else(|| MagnetError::InvalidEncoding(s.to_string()))?;
                result.push(byte);
                i += 3;
            }
            b'+' => {
                result.push(b' ');
                i += 1;
            }
            b => {
                result.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(result).map_err(|_| MagnetError::InvalidEncoding(s.to_string()))
}

/// Escapes every byte outside the RFC 3986 unreserved set as `%XX`.
pub(crate) fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);

    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                let _ = write!(result, "%{:02X}", byte);
            }
        }
    }

    result
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
