//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::tui::theme::{get_theme, LoadingSpinner};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{help, input_bar, swatches, toasts};

/// Layers, back to front:
/// ┌──────────────────────────────────────────────┐
/// │        ╭─ brandhue ─────────────────╮        │
/// │        │ Company  [..........] Enter│        │
/// │        │ API key  [..........]      │        │
/// │        ╰────────────────────────────╯        │
/// │              ╭ ✓ Copied #1DA1F2 ╮            │
/// │ ▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓ │
/// │ #1DA1F2│#14171A│#657786│#AAB8C2│#E1E8ED│#F5F│
/// │ ▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓▓▓▓│▓▓▓▓ │
/// └──────────────────────────────────────────────┘
/// The grid fills the screen; the bar and toasts float over it.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();
    let theme = get_theme();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg_primary)),
        root,
    );

    if state.session.is_loading() {
        state.hit.tiles.clear();
        render_loading(frame, state, root);
    } else {
        swatches::render(frame, state, root);
    }

    let bar = input_bar::area(root);
    input_bar::render(frame, state, bar);

    toasts::render(frame, state, root, bar.bottom());

    if state.show_help {
        help::render(frame, root);
    }
}

fn render_loading(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", LoadingSpinner::frame(state.tick)),
            Style::default().fg(theme.palette.accent),
        ),
        Span::styled("Loading...", Style::default().fg(theme.palette.fg_secondary)),
    ]);
    let mid = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), mid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::PaletteSession;
    use crate::app::state::{Focus, Toast};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_default_palette() {
        let mut state = AppState::new(PaletteSession::default());
        let screen = draw(&mut state, 120, 30);

        for color in crate::palette::DEFAULT_COLORS {
            assert!(screen.contains(color), "missing {color}");
        }
        assert!(screen.contains("Twitter"));
        assert_eq!(state.hit.tiles.len(), 6);
        assert!(state.hit.enter_button.width > 0);
    }

    #[test]
    fn test_api_key_is_masked() {
        let mut session = PaletteSession::default();
        session.set_api_key("sk-secret");
        let mut state = AppState::new(session);
        let screen = draw(&mut state, 120, 30);
        assert!(!screen.contains("sk-secret"));

        state.reveal_key = true;
        let screen = draw(&mut state, 120, 30);
        assert!(screen.contains("sk-secret"));
    }

    #[test]
    fn test_loading_hides_grid() {
        let mut state = AppState::new(PaletteSession::default());
        let _ = state.session.begin_request();
        let screen = draw(&mut state, 120, 30);

        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("#1DA1F2"));
        assert!(state.hit.tiles.is_empty());
    }

    #[test]
    fn test_toast_and_help_render() {
        let mut state = AppState::new(PaletteSession::default());
        state.focus = Focus::Palette;
        state.toasts.push(Toast::success("Copied #14171A to clipboard"));
        state.show_help = true;
        let screen = draw(&mut state, 120, 40);

        assert!(screen.contains("Copied #14171A to clipboard"));
        assert!(screen.contains("Keybinds"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new(PaletteSession::default());
        state.toasts.push(Toast::success("Copied"));
        state.show_help = true;
        draw(&mut state, 3, 2);
        draw(&mut state, 1, 1);
    }
}
