//! colorlist: a thread-safe color name registry
//!
//! Maps names such as `"whitesmoke"` to RGBA colors and back, parses
//! `#rgb` / `#rrggbb` strings, and finds the nearest named color to any
//! RGBA value.
//!
//! # Architecture
//!
//! ```text
//! caller → query → { hex | registry | nearest } → result
//! ```
//!
//! # Modules
//!
//! - `color`: the `Color` value type
//! - `hex`: hex string parsing and formatting
//! - `builtin`: the built-in color table and its aliases
//! - `registry`: the name ↔ color maps behind one lock
//! - `nearest`: nearest-name search by squared RGB distance
//! - `query`: name/hex resolution and the process-wide registry
//! - `config`: TOML configuration
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use colorlist::{Color, ColorRegistry};
//!
//! let registry = ColorRegistry::with_builtins();
//! assert_eq!(registry.get_by_name("WhiteSmoke"), Some(Color::rgb(245, 245, 245)));
//! assert_eq!(registry.nearest(Color::rgb(244, 244, 240)), "whitesmoke");
//!
//! registry.put("radish", Color::rgb(255, 102, 204));
//! assert_eq!(registry.to_hex_string("radish"), "#ff66cc");
//! ```
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod builtin;
pub mod color;
pub mod config;
pub mod error;
pub mod hex;
pub mod logging;
pub mod nearest;
pub mod query;
pub mod registry;

pub use color::Color;
pub use config::{Config, RegistryConfig};
pub use error::{ConfigError, Error, FormatError, Result};
pub use query::{
    format_hex, get, get_by_color, global, initialize, name_of, name_of_nearest, nearest_name,
    parse_hex, put, resolve_color, resolve_color_or_default, size, to_hex_string,
};
pub use registry::ColorRegistry;
