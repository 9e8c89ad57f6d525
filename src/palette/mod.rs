//! Palette values and how they are interpreted for display
//!
//! This module provides:
//! - The default palette shown before any fetch
//! - Order-preserving deduplication of model output
//! - Interpretation of untrusted color strings as terminal colors

pub mod parser;

pub use parser::{ParseError, parse_color_array};

use ratatui::style::Color;
use std::collections::HashSet;

/// Twitter's brand colors, shown until a fetch succeeds.
pub const DEFAULT_COLORS: [&str; 6] = [
    "#1DA1F2", "#14171A", "#657786", "#AAB8C2", "#E1E8ED", "#F5F8FA",
];

pub fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn dedup(colors: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    colors
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

/// How a color string from the model can be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Rgb(u8, u8, u8),
    Named(Color),
    /// Not a color we understand; drawn as a neutral tile with the raw text.
    Unknown,
}

impl Swatch {
    pub fn interpret(value: &str) -> Self {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).map_or(Swatch::Unknown, |(r, g, b)| Swatch::Rgb(r, g, b));
        }
        // ratatui also accepts indexed colors ("42"), which are not CSS.
        if !value.is_empty()
            && value.chars().all(|c| c.is_ascii_alphabetic())
            && let Ok(color) = value.parse::<Color>()
        {
            return Swatch::Named(color);
        }
        Swatch::Unknown
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Swatch::Rgb(r, g, b) => Some(Color::Rgb(r, g, b)),
            Swatch::Named(c) => Some(c),
            Swatch::Unknown => None,
        }
    }

    /// Whether dark text reads better than light text on this swatch.
    pub fn is_light(self) -> bool {
        match self {
            Swatch::Rgb(r, g, b) => {
                let luma = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
                luma > 140.0
            }
            Swatch::Named(c) => matches!(
                c,
                Color::White
                    | Color::Gray
                    | Color::Yellow
                    | Color::LightYellow
                    | Color::LightCyan
                    | Color::LightGreen
                    | Color::Cyan
            ),
            Swatch::Unknown => false,
        }
    }
}

/// Accepts 3, 4, 6 or 8 hex digits. Alpha is read and discarded.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => Some((nibble(0)?, nibble(1)?, nibble(2)?)),
        6 | 8 => Some((byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let colors = default_colors();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], "#1DA1F2");
        assert_eq!(colors[5], "#F5F8FA");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let colors = dedup(
            ["#FFFFFF", "#000000", "#FFFFFF"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(colors, vec!["#FFFFFF", "#000000"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let input: Vec<String> = ["a", "b", "a", "c", "b", "a"]
            .into_iter()
            .map(String::from)
            .collect();
        let once = dedup(input);
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let colors = dedup(["#fff", "#FFF"].into_iter().map(String::from));
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_interpret_hex_forms() {
        assert_eq!(Swatch::interpret("#1DA1F2"), Swatch::Rgb(0x1D, 0xA1, 0xF2));
        assert_eq!(Swatch::interpret("#fff"), Swatch::Rgb(255, 255, 255));
        assert_eq!(Swatch::interpret("#f00a"), Swatch::Rgb(255, 0, 0));
        assert_eq!(Swatch::interpret("#00000080"), Swatch::Rgb(0, 0, 0));
        assert_eq!(Swatch::interpret("  #14171A "), Swatch::Rgb(0x14, 0x17, 0x1A));
    }

    #[test]
    fn test_interpret_rejects_garbage() {
        assert_eq!(Swatch::interpret("#12345"), Swatch::Unknown);
        assert_eq!(Swatch::interpret("#GGGGGG"), Swatch::Unknown);
        assert_eq!(Swatch::interpret("#ÿÿÿ"), Swatch::Unknown);
        assert_eq!(Swatch::interpret("42"), Swatch::Unknown);
        assert_eq!(Swatch::interpret(""), Swatch::Unknown);
        assert_eq!(Swatch::interpret("not a color"), Swatch::Unknown);
    }

    #[test]
    fn test_interpret_named() {
        assert_eq!(Swatch::interpret("red"), Swatch::Named(Color::Red));
        assert_eq!(Swatch::interpret("red").color(), Some(Color::Red));
        assert_eq!(Swatch::Unknown.color(), None);
    }

    #[test]
    fn test_is_light() {
        assert!(Swatch::interpret("#F5F8FA").is_light());
        assert!(!Swatch::interpret("#14171A").is_light());
    }
}
