use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The string must have exactly six hexadecimal digits, optionally prefixed
/// with a single `#`. Digits may be upper or lower case. Unlike
/// `u32::from_str_radix`, this function does not accept a leading sign.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength(s.to_owned()));
    }

    // from_str_radix() tolerates a leading plus sign.
    let n = match u32::from_str_radix(digits, 16) {
        Ok(n) if !digits.starts_with('+') => n,
        _ => return Err(ColorFormatError::MalformedHex(s.to_owned())),
    };

    Ok([(n >> 16) as u8, (n >> 8) as u8, n as u8])
}

/// Format the 24-bit color in familiar `#123abc` hashed hexadecimal notation.
pub(crate) fn format_hex(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("66d9ef")?, [0x66_u8, 0xd9, 0xef]);
        assert_eq!(parse_hex("#66D9EF")?, [0x66_u8, 0xd9, 0xef]);
        assert_eq!(parse_hex("#000000")?, [0_u8, 0, 0]);
        assert_eq!(parse_hex("ffffff")?, [0xff_u8, 0xff, 0xff]);
        Ok(())
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(
            parse_hex("zzzzzz"),
            Err(ColorFormatError::MalformedHex("zzzzzz".into()))
        );
        assert_eq!(
            parse_hex("#12345"),
            Err(ColorFormatError::UnexpectedLength("#12345".into()))
        );
        assert_eq!(
            parse_hex("#1234567"),
            Err(ColorFormatError::UnexpectedLength("#1234567".into()))
        );
        assert_eq!(
            parse_hex("#123"),
            Err(ColorFormatError::UnexpectedLength("#123".into()))
        );
        assert_eq!(
            parse_hex(""),
            Err(ColorFormatError::UnexpectedLength("".into()))
        );
        assert_eq!(
            parse_hex("##12345"),
            Err(ColorFormatError::MalformedHex("##12345".into()))
        );
        assert_eq!(
            parse_hex("+12345"),
            Err(ColorFormatError::MalformedHex("+12345".into()))
        );
        assert_eq!(
            parse_hex("-12345"),
            Err(ColorFormatError::MalformedHex("-12345".into()))
        );
        assert_eq!(
            parse_hex("#+fffff"),
            Err(ColorFormatError::MalformedHex("#+fffff".into()))
        );
        assert_eq!(
            parse_hex("12 456"),
            Err(ColorFormatError::MalformedHex("12 456".into()))
        );
        assert_eq!(
            parse_hex(" 12345"),
            Err(ColorFormatError::MalformedHex(" 12345".into()))
        );

        // Six bytes but only three characters
        let result = parse_hex("#💩00");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex(_))));
    }
}
