//! Query API: resolve names or hex strings to colors and colors to names.
//!
//! Every query exists as a [`ColorRegistry`] method and as a free function
//! over the process-wide registry returned by [`global`].

use std::sync::LazyLock;

use crate::color::Color;
use crate::error::{Error, FormatError, Result};
use crate::hex;
use crate::registry::ColorRegistry;

static GLOBAL: LazyLock<ColorRegistry> = LazyLock::new(ColorRegistry::with_builtins);

/// The process-wide registry, seeded with the built-in table on first use.
pub fn global() -> &'static ColorRegistry {
    &GLOBAL
}

impl ColorRegistry {
    /// Resolve `s` as a hex string when it starts with `#`, otherwise as a
    /// registered name. Unknown names yield [`Error::NotFound`] carrying `s`
    /// unchanged.
    pub fn resolve_color(&self, s: &str) -> Result<Color> {
        if s.starts_with('#') {
            return Ok(hex::parse_hex(s)?);
        }
        self.get_by_name(s)
            .ok_or_else(|| Error::NotFound(s.to_string()))
    }

    /// Like [`resolve_color`](Self::resolve_color), but any error becomes
    /// opaque black.
    pub fn resolve_color_or_default(&self, s: &str) -> Color {
        match self.resolve_color(s) {
            Ok(color) => color,
            Err(err) => {
                tracing::debug!(input = s, error = %err, "Color unresolved, using black");
                Color::BLACK
            }
        }
    }

    /// Exact reverse lookup; the empty string means no name has this color.
    pub fn name_of(&self, color: Color) -> String {
        self.get_by_color(color).unwrap_or_default()
    }

    /// Closest known name to `color`. See [`ColorRegistry::nearest`].
    pub fn name_of_nearest(&self, color: Color) -> String {
        self.nearest(color)
    }

    /// Resolve `s` (black on failure) and format it as `#rrggbb`.
    pub fn to_hex_string(&self, s: &str) -> String {
        hex::format_hex(self.resolve_color_or_default(s))
    }
}

// ---------------------------------------------------------------------------
// Process-wide API
// ---------------------------------------------------------------------------

/// Reload the built-in table into the global registry.
///
/// The global registry loads the table on first use, so calling this is
/// optional; repeated calls leave built-in lookups unchanged.
pub fn initialize() {
    global().load_builtins();
}

/// Add or override a color in the global registry.
pub fn put(name: &str, r: u8, g: u8, b: u8, a: u8) {
    global().put(name, Color::new(r, g, b, a));
}

/// Case-insensitive name lookup in the global registry.
pub fn get(name: &str) -> Option<Color> {
    global().get_by_name(name)
}

/// Exact reverse lookup in the global registry, alpha included.
pub fn get_by_color(color: Color) -> Option<String> {
    global().get_by_color(color)
}

/// Closest name in the global registry. Never empty.
pub fn nearest_name(color: Color) -> String {
    global().nearest(color)
}

/// Parse `#rgb` or `#rrggbb`. See [`hex::parse_hex`].
pub fn parse_hex(s: &str) -> std::result::Result<Color, FormatError> {
    hex::parse_hex(s)
}

/// Lowercase `#rrggbb`; alpha is dropped.
pub fn format_hex(color: Color) -> String {
    hex::format_hex(color)
}

/// Hex string or registered name to a color.
pub fn resolve_color(s: &str) -> Result<Color> {
    global().resolve_color(s)
}

/// Like [`resolve_color`], but black on any error.
pub fn resolve_color_or_default(s: &str) -> Color {
    global().resolve_color_or_default(s)
}

/// Exact reverse lookup, empty string on a miss.
pub fn name_of(color: Color) -> String {
    global().name_of(color)
}

/// Same as [`nearest_name`].
pub fn name_of_nearest(color: Color) -> String {
    global().name_of_nearest(color)
}

/// `#rrggbb` for a hex string or name; `#000000` when it does not resolve.
pub fn to_hex_string(s: &str) -> String {
    global().to_hex_string(s)
}

/// `(name_count, value_count)` of the global registry.
pub fn size() -> (usize, usize) {
    global().size()
}
