//! Chrome colors - everything that is not a brand swatch

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    /// Backdrop behind the hex label on a tile
    pub chip: Color,
    pub success: Color,
}

impl Palette {
    /// Grayscale chrome so it never competes with the swatches
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),          // #000000
        bg_secondary: Color::Rgb(18, 18, 18),    // #121212
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        border: Color::Rgb(64, 64, 64),          // #404040
        chip: Color::Rgb(30, 41, 59),            // #1e293b slate-800
        success: Color::Rgb(134, 239, 172),      // #86efac
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}
