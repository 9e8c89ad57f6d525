//! Help overlay showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_at;

pub fn render(frame: &mut Frame, root: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let content = vec![
        section_header("Fields", &theme),
        keybind("Enter", "Fetch palette for company", &theme),
        keybind("Tab / S-Tab", "Next / previous focus", &theme),
        keybind("Ctrl+u", "Clear field", &theme),
        keybind("Ctrl+r", "Show / hide API key", &theme),
        keybind("Esc", "Focus palette", &theme),
        Line::default(),
        section_header("Palette", &theme),
        keybind("h l / ← →", "Select color", &theme),
        keybind("Enter c y", "Copy selected color", &theme),
        keybind("Click", "Copy that color", &theme),
        keybind("r / F5", "Fetch again", &theme),
        keybind("/ i", "Edit company name", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("? / F1", "Toggle this help", &theme),
        keybind("q / Esc", "Quit (outside fields)", &theme),
        keybind("Ctrl+c", "Quit", &theme),
    ];

    let height = content.len() as u16 + 2;
    let top = root.y + root.height.saturating_sub(height) / 2;
    let area = centered_at(root, 48, height, top);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .style(Style::default().bg(theme.palette.bg_primary))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    frame.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.palette.fg_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
