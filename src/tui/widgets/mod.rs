pub mod help;
pub mod input_bar;
pub mod root;
pub mod swatches;
pub mod toasts;

use ratatui::layout::Rect;

/// Shorten `s` to `max_len` chars, marking the cut with "...".
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// A `width` x `height` rect centered horizontally in `area`, starting at row `y`.
pub(crate) fn centered_at(area: Rect, width: u16, height: u16, y: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.bottom().saturating_sub(y));
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, height)
}
