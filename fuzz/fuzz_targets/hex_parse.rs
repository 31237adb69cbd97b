#![no_main]

use colorlist::{Color, ColorRegistry, FormatError, format_hex, parse_hex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    match parse_hex(input) {
        Ok(color) => {
            assert_eq!(color.a, 255);
            let digits = &input[1..];
            assert!(digits.len() == 3 || digits.len() == 6);
            let formatted = format_hex(color);
            assert_eq!(parse_hex(&formatted), Ok(color));
            if digits.len() == 6 {
                assert_eq!(formatted, input.to_ascii_lowercase());
            }
        }
        Err(FormatError::MissingPrefix { .. }) => assert!(!input.starts_with('#')),
        Err(FormatError::InvalidDigit { ch, .. }) => assert!(!ch.is_ascii_hexdigit()),
        Err(FormatError::InvalidLength { len, .. }) => assert!(len != 3 && len != 6),
    }

    // Whatever the input, resolution and nearest-match must not panic.
    let registry = ColorRegistry::with_builtins();
    let color = registry.resolve_color_or_default(input);
    let name = registry.nearest(color);
    assert!(!name.is_empty());
    if let Some(first) = data.get(..4) {
        let sample = Color::new(first[0], first[1], first[2], first[3]);
        assert!(!registry.nearest(sample).is_empty());
    }
});
