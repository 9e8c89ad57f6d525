//! Company name and API key fields, pinned top-center

use crate::app::state::{AppState, Focus};
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_at;

const WIDTH: u16 = 64;
pub const HEIGHT: u16 = 4;
const LABEL_WIDTH: u16 = 11;
const BUTTON_WIDTH: u16 = 9;

const COMPANY_PLACEHOLDER: &str = "Company name (e.g. Twitter)";
const KEY_PLACEHOLDER: &str = "sk-... (kept in memory only)";

/// Where the bar goes for a given screen size
pub fn area(root: Rect) -> Rect {
    let top = if root.height > 12 { root.y + 1 } else { root.y };
    centered_at(root, WIDTH, HEIGHT, top)
}

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .style(Style::default().bg(theme.palette.bg_primary))
        .title(format!(" {} brandhue ", icons.palette))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let company_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[0]);

    let key_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Min(4),
            Constraint::Length(1 + BUTTON_WIDTH),
        ])
        .split(rows[1]);

    render_label(frame, &theme, icons.company, "Company", company_cols[0]);
    render_label(frame, &theme, icons.key, "API key", key_cols[0]);

    let company = state.session.company_name().to_string();
    let key_shown = if state.reveal_key {
        state.session.api_key().to_string()
    } else {
        icons.mask.repeat(state.session.api_key().chars().count())
    };

    render_field(
        frame,
        &theme,
        &company,
        COMPANY_PLACEHOLDER,
        state.focus == Focus::Company,
        company_cols[1],
    );
    render_field(
        frame,
        &theme,
        &key_shown,
        KEY_PLACEHOLDER,
        state.focus == Focus::ApiKey,
        key_cols[1],
    );
    render_button(frame, &theme, company_cols[3]);

    state.hit.company_field = company_cols[1];
    state.hit.api_key_field = key_cols[1];
    state.hit.enter_button = company_cols[3];
}

fn render_label(frame: &mut Frame, theme: &Theme, icon: &str, text: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(theme.palette.fg_secondary)),
        Span::styled(text.to_string(), Style::default().fg(theme.palette.fg_secondary)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Single-line text field. Long input scrolls so the end stays visible.
fn render_field(
    frame: &mut Frame,
    theme: &Theme,
    text: &str,
    placeholder: &str,
    focused: bool,
    area: Rect,
) {
    let bg = Style::default().bg(theme.palette.bg_secondary);
    let visible = area.width.saturating_sub(1) as usize;

    let span = if text.is_empty() && !focused {
        Span::styled(placeholder.to_string(), bg.fg(theme.palette.fg_secondary))
    } else {
        let count = text.chars().count();
        let tail: String = text.chars().skip(count.saturating_sub(visible)).collect();
        let style = if focused {
            bg.fg(theme.palette.fg_primary).add_modifier(Modifier::BOLD)
        } else {
            bg.fg(theme.palette.fg_primary)
        };
        Span::styled(tail, style)
    };

    frame.render_widget(Paragraph::new(Line::from(span)).style(bg), area);

    if focused {
        let shown = text.chars().count().min(visible) as u16;
        frame.set_cursor_position(Position::new(area.x + shown, area.y));
    }
}

fn render_button(frame: &mut Frame, theme: &Theme, area: Rect) {
    let button = Paragraph::new(Line::from(Span::styled(
        " Enter ⏎ ",
        Style::default()
            .fg(theme.palette.bg_primary)
            .bg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(button, area);
}
