//! Theme configuration - grayscale chrome around the swatches

pub mod icons;
pub mod palette;

pub use icons::{Icons, LoadingSpinner};
pub use palette::Palette;

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::MONO,
            icons: Icons::nerd(),
        }
    }

    /// Rounded everywhere
    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}
