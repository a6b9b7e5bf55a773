//! Hex color parsing, in const and fallible runtime forms.

/// Error produced when parsing a hex color string at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string did not contain exactly six hex digits.
    #[error("expected exactly six hex digits")]
    InvalidLength,
    /// A character at the given offset was not a hex digit.
    #[error("invalid hex digit at offset {0}")]
    InvalidDigit(usize),
}

const fn prefix_len(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

const fn digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

const fn byte_at(bytes: &[u8], i: usize) -> Result<u8, ColorParseError> {
    let hi = match digit(bytes[i]) {
        Some(d) => d,
        None => return Err(ColorParseError::InvalidDigit(i)),
    };
    let lo = match digit(bytes[i + 1]) {
        Some(d) => d,
        None => return Err(ColorParseError::InvalidDigit(i + 1)),
    };
    Ok((hi << 4) | lo)
}

pub(crate) const fn try_parse_hex(s: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let bytes = s.as_bytes();
    let offset = prefix_len(bytes);
    if bytes.len() - offset != 6 {
        return Err(ColorParseError::InvalidLength);
    }
    let red = match byte_at(bytes, offset) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    let green = match byte_at(bytes, offset + 2) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    let blue = match byte_at(bytes, offset + 4) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    Ok((red, green, blue))
}

pub(crate) const fn parse_hex(s: &str) -> (u8, u8, u8) {
    match try_parse_hex(s) {
        Ok(components) => components,
        Err(ColorParseError::InvalidLength) => panic!("expected six hex digits"),
        Err(ColorParseError::InvalidDigit(_)) => panic!("invalid hex digit"),
    }
}
