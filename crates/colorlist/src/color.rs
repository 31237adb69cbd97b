//! The `Color` value type.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hex::{self, FormatError};

/// An 8-bit-per-channel RGBA color.
///
/// Equality is exact, alpha included. The derived ordering compares
/// `(r, g, b, a)` lexicographically, which lets `Color` key ordered maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the fallback for every "or default" lookup.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Squared euclidean distance over R, G and B. Alpha is ignored.
    ///
    /// Channel differences are taken as `i32` so `0 - 255` cannot wrap; the
    /// largest possible result is `3 * 255^2 = 195_075`.
    #[inline]
    pub fn rgb_distance_sq(self, other: Self) -> u64 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr) as u64 + (dg * dg) as u64 + (db * db) as u64
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Formats as `#rrggbb`; alpha is dropped.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::format_hex(*self))
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_ignores_alpha() {
        let a = Color::new(10, 20, 30, 0);
        let b = Color::new(10, 20, 30, 255);
        assert_eq!(a.rgb_distance_sq(b), 0);
    }

    #[test]
    fn distance_does_not_wrap() {
        let white = Color::rgb(255, 255, 255);
        assert_eq!(Color::BLACK.rgb_distance_sq(white), 195_075);
        assert_eq!(white.rgb_distance_sq(Color::BLACK), 195_075);
    }

    #[test]
    fn distance_is_sum_of_squares() {
        let a = Color::rgb(244, 244, 240);
        let b = Color::rgb(245, 245, 245);
        assert_eq!(a.rgb_distance_sq(b), 1 + 1 + 25);
    }

    #[test]
    fn ordering_is_channel_lexicographic() {
        assert!(Color::new(0, 0, 0, 0) < Color::new(0, 0, 0, 1));
        assert!(Color::new(0, 0, 1, 0) < Color::new(0, 1, 0, 0));
        assert!(Color::new(1, 0, 0, 0) > Color::new(0, 255, 255, 255));
    }

    #[test]
    fn display_and_from_str() {
        let c: Color = "#FF66cc".parse().unwrap();
        assert_eq!(c, Color::rgb(255, 102, 204));
        assert_eq!(c.to_string(), "#ff66cc");
        assert!("ff66cc".parse::<Color>().is_err());
    }

    #[test]
    fn conversions() {
        assert_eq!(Color::from((1, 2, 3)), Color::new(1, 2, 3, 255));
        assert_eq!(Color::from([1, 2, 3, 4]), Color::new(1, 2, 3, 4));
        let arr: [u8; 4] = Color::new(9, 8, 7, 6).into();
        assert_eq!(arr, [9, 8, 7, 6]);
    }
}
