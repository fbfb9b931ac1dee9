//! Color resolution and colormap construction.
//!
//! Plot styling in the toolkit is specified as strings: either a CSS color
//! name (`"tomato"`) or a hex literal (`"#336699"`). [`resolve_color`] turns
//! either form into an [`Rgb`] triple in `[0, 1]`, and [`linear_colormap`]
//! builds a smooth two-endpoint colormap from such strings.

mod colormap;
mod named;

pub use colormap::{linear_colormap, LinearColormap};

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ExoatlasError, Result};

/// An RGB triple with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// An RGBA sample with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgb {
    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

fn hex_literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// Resolve a color string to an RGB triple.
///
/// A string containing `#` is treated as a 6-digit hex literal; anything
/// else is looked up (case-insensitively) in the CSS named-color table.
///
/// # Errors
///
/// [`ExoatlasError::InvalidHexColor`] for malformed literals and
/// [`ExoatlasError::UnknownColor`] for names absent from the table.
pub fn resolve_color(name: &str) -> Result<Rgb> {
    let hex = if name.contains('#') {
        let literal = name.trim();
        if !hex_literal_re().is_match(literal) {
            return Err(ExoatlasError::InvalidHexColor {
                value: name.to_string(),
            });
        }
        literal.to_string()
    } else {
        named::lookup(&name.to_lowercase())
            .ok_or_else(|| ExoatlasError::UnknownColor {
                name: name.to_string(),
            })?
            .to_string()
    };

    Ok(hex_to_rgb(&hex))
}

/// Convert a validated `#rrggbb` literal to an RGB triple.
fn hex_to_rgb(hex: &str) -> Rgb {
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0) as f64 / 255.0;
    Rgb {
        r: byte(1),
        g: byte(3),
        b: byte(5),
    }
}
