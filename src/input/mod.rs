use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal read failed");
                        continue;
                    }
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::Down(MouseButton::Left) => handle_click(state, m.column, m.row),
            MouseEventKind::ScrollUp => Some(Action::SelectPrev),
            MouseEventKind::ScrollDown => Some(Action::SelectNext),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_click(state: &AppState, column: u16, row: u16) -> Option<Action> {
    let pos = ratatui::layout::Position::new(column, row);
    if state.hit.enter_button.contains(pos) {
        return Some(Action::RequestPalette);
    }
    if state.hit.company_field.contains(pos) {
        return Some(Action::SetFocus(Focus::Company));
    }
    if state.hit.api_key_field.contains(pos) {
        return Some(Action::SetFocus(Focus::ApiKey));
    }
    if state.session.is_loading() {
        return None;
    }
    state.hit.tile_at(column, row).map(Action::CopyTile)
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings
    match k.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('r') if ctrl => return Some(Action::ToggleRevealKey),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    if state.show_help {
        return match k.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    if state.focus.is_text_field() {
        handle_text_field(k, ctrl)
    } else {
        handle_palette(k)
    }
}

fn handle_text_field(k: KeyEvent, ctrl: bool) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::RequestPalette),
        KeyCode::Esc => Some(Action::SetFocus(Focus::Palette)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char(c) if !ctrl => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_palette(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            Some(Action::SelectPrev)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            Some(Action::SelectNext)
        }
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopySelected),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::SetFocus(Focus::Company)),
        KeyCode::Char('r') | KeyCode::F(5) => Some(Action::RequestPalette),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::PaletteSession;
    use crossterm::event::MouseEvent;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn click(column: u16, row: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn state_with(focus: Focus) -> AppState {
        let mut state = AppState::new(PaletteSession::default());
        state.focus = focus;
        state
    }

    #[test]
    fn test_enter_in_company_field_requests() {
        let state = state_with(Focus::Company);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::RequestPalette));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::InputChar('q')));
    }

    #[test]
    fn test_enter_in_api_key_field_requests() {
        let state = state_with(Focus::ApiKey);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::RequestPalette));
        assert_eq!(map_input_to_action(&state, ctrl('u')), Some(Action::ClearInput));
    }

    #[test]
    fn test_palette_keys() {
        let state = state_with(Focus::Palette);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Right)), Some(Action::SelectNext));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('y'))), Some(Action::CopySelected));
    }

    #[test]
    fn test_global_keys() {
        let state = state_with(Focus::Company);
        assert_eq!(map_input_to_action(&state, ctrl('c')), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, ctrl('r')), Some(Action::ToggleRevealKey));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Tab)), Some(Action::FocusNext));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut state = state_with(Focus::Company);
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('x'))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_clicks() {
        let mut state = state_with(Focus::Company);
        state.hit.enter_button = Rect::new(50, 1, 7, 1);
        state.hit.api_key_field = Rect::new(10, 3, 30, 1);
        state.hit.tiles = vec![Rect::new(0, 5, 20, 10), Rect::new(20, 5, 20, 10)];

        assert_eq!(map_input_to_action(&state, click(52, 1)), Some(Action::RequestPalette));
        assert_eq!(map_input_to_action(&state, click(12, 3)), Some(Action::SetFocus(Focus::ApiKey)));
        assert_eq!(map_input_to_action(&state, click(25, 8)), Some(Action::CopyTile(1)));
        assert_eq!(map_input_to_action(&state, click(79, 0)), None);
    }

    #[test]
    fn test_tiles_not_clickable_while_loading() {
        let mut state = state_with(Focus::Palette);
        state.hit.tiles = vec![Rect::new(0, 5, 20, 10)];
        let _ = state.session.begin_request();
        assert_eq!(map_input_to_action(&state, click(3, 6)), None);
    }
}
