//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub clipboard: &'static str,
    pub company: &'static str,
    pub key: &'static str,
    pub palette: &'static str,
    pub help: &'static str,
    pub success: &'static str,
    pub unknown: &'static str,
    pub selected: &'static str,
    pub mask: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            clipboard: "\u{f0ea}", // nf-fa-clipboard
            company: "\u{f1ad}",   // nf-fa-building
            key: "\u{f084}",       // nf-fa-key
            palette: "\u{e22b}",   // nf-fae-palette_color
            help: "\u{f059}",      // nf-fa-question_circle
            success: "\u{f00c}",   // nf-fa-check
            unknown: "\u{f128}",   // nf-fa-question
            selected: "\u{f0d7}",  // nf-fa-caret_down
            mask: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = (tick % Self::BRAILLE.len() as u64) as usize;
        Self::BRAILLE[idx]
    }
}
