//! Full-viewport grid of equal-width color tiles

use crate::app::state::{AppState, Focus};
use crate::palette::Swatch;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::truncate_str;

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let colors = state.session.colors();
    if colors.is_empty() {
        state.hit.tiles.clear();
        return;
    }

    let n = colors.len() as u32;
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(colors.iter().map(|_| Constraint::Ratio(1, n)))
        .split(area);

    let show_selection = state.focus == Focus::Palette;

    for (i, (value, tile)) in colors.iter().zip(tiles.iter()).enumerate() {
        let swatch = Swatch::interpret(value);
        let bg = swatch.color().unwrap_or(theme.palette.bg_secondary);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), *tile);

        let marker = if swatch == Swatch::Unknown {
            icons.unknown
        } else {
            icons.clipboard
        };
        let label = format!(" {} {} ", marker, value);
        let label = truncate_str(&label, tile.width as usize);
        let label_width = (label.chars().count() as u16).min(tile.width);

        let mid = tile.y + tile.height / 2;
        let chip = Rect::new(
            tile.x + (tile.width - label_width) / 2,
            mid,
            label_width,
            1.min(tile.height),
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .bg(theme.palette.chip),
            ))),
            chip,
        );

        if show_selection && i == state.selected && mid > tile.y {
            let fg = if swatch.is_light() {
                theme.palette.bg_primary
            } else {
                theme.palette.fg_primary
            };
            let marker_row = Rect::new(tile.x, mid - 1, tile.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    icons.selected,
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                marker_row,
            );
        }
    }

    state.hit.tiles = tiles.to_vec();
}
