//! Hex codec: `#rgb` / `#rrggbb` parsing and `#rrggbb` formatting.
//!
//! The short form uses each digit directly as a channel value, so `#ccc`
//! is `(12, 12, 12, 255)`, not the CSS `(204, 204, 204, 255)`. Hex strings
//! never carry alpha; parsed colors are always opaque.

use crate::color::Color;
pub use crate::error::FormatError;

/// Parse `#rgb` or `#rrggbb` (case-insensitive) into an opaque color.
pub fn parse_hex(s: &str) -> Result<Color, FormatError> {
    let Some(digits) = s.strip_prefix('#') else {
        return Err(FormatError::MissingPrefix {
            input: s.to_string(),
        });
    };

    let mut nibbles = [0u8; 6];
    let mut len = 0usize;
    for (index, ch) in digits.chars().enumerate() {
        let Some(value) = ch.to_digit(16) else {
            return Err(FormatError::InvalidDigit {
                input: s.to_string(),
                ch,
                index: index + 1,
            });
        };
        if len < nibbles.len() {
            nibbles[len] = value as u8;
        }
        len += 1;
    }

    match len {
        3 => Ok(Color::rgb(nibbles[0], nibbles[1], nibbles[2])),
        6 => Ok(Color::rgb(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        )),
        _ => Err(FormatError::InvalidLength {
            input: s.to_string(),
            len,
        }),
    }
}

/// Format as a lowercase `#rrggbb` triplet. Alpha is never included.
pub fn format_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_uses_nibbles_directly() {
        assert_eq!(parse_hex("#ccc").unwrap(), Color::new(12, 12, 12, 255));
        assert_eq!(parse_hex("#cCc").unwrap(), Color::new(12, 12, 12, 255));
        assert_eq!(parse_hex("#f00").unwrap(), Color::new(15, 0, 0, 255));
        assert_eq!(parse_hex("#000").unwrap(), Color::BLACK);
    }

    #[test]
    fn long_form() {
        assert_eq!(parse_hex("#0c0c0c").unwrap(), Color::new(12, 12, 12, 255));
        assert_eq!(parse_hex("#0c0C0c").unwrap(), Color::new(12, 12, 12, 255));
        assert_eq!(parse_hex("#F5F5f5").unwrap(), Color::rgb(245, 245, 245));
        assert_eq!(parse_hex("#ffffff").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn rejects_bad_digit() {
        let err = parse_hex("#0c0Z0c").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidDigit {
                input: "#0c0Z0c".to_string(),
                ch: 'Z',
                index: 4,
            }
        );
        assert!(err.to_string().contains("'Z'"));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(matches!(
            parse_hex("0c0c0c"),
            Err(FormatError::MissingPrefix { .. })
        ));
        assert!(matches!(parse_hex(""), Err(FormatError::MissingPrefix { .. })));
    }

    #[test]
    fn rejects_wrong_length() {
        for (input, len) in [("#", 0), ("#c", 1), ("#cc", 2), ("#cccc", 4), ("#0c0c0c0c", 8)] {
            assert_eq!(
                parse_hex(input),
                Err(FormatError::InvalidLength {
                    input: input.to_string(),
                    len,
                }),
                "input {input}"
            );
        }
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(matches!(
            parse_hex("#ééé"),
            Err(FormatError::InvalidDigit { ch: 'é', index: 1, .. })
        ));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(parse_hex(" #ccc").is_err());
        assert!(parse_hex("#ccc ").is_err());
    }

    #[test]
    fn format_is_lowercase_without_alpha() {
        assert_eq!(format_hex(Color::new(255, 102, 204, 0)), "#ff66cc");
        assert_eq!(format_hex(Color::BLACK), "#000000");
        assert_eq!(format_hex(Color::rgb(1, 2, 3)), "#010203");
    }
}
