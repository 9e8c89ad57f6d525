//! Stacked notifications, top-center

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_at, truncate_str};

const TOAST_HEIGHT: u16 = 3;

/// Render toasts downward from row `top`, oldest first.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect, top: u16) {
    let theme = get_theme();
    let icons = &theme.icons;
    let max_text = area.width.saturating_sub(6) as usize;

    let mut y = top;
    for toast in state.toasts.iter().filter(|t| !t.is_expired()) {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let text = truncate_str(&toast.message, max_text);
        let width = text.chars().count() as u16 + 6;
        let rect = centered_at(area, width, TOAST_HEIGHT, y);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(theme.border_set())
            .border_style(Style::default().fg(theme.palette.success))
            .style(Style::default().bg(theme.palette.bg_primary));
        let line = Line::from(vec![
            Span::styled(format!(" {} ", icons.success), Style::default().fg(theme.palette.success)),
            Span::styled(text, Style::default().fg(theme.palette.fg_primary)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), rect);

        y += TOAST_HEIGHT;
    }
}
