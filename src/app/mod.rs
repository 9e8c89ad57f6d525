pub mod actions;
pub mod events;
pub mod session;
pub mod state;

use crate::clipboard::{self, ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::input;
use crate::openai::{ChatCompletion, OpenAiClient};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use session::PaletteSession;
use state::{AppState, Focus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct App {
    cfg: Config,
    state: AppState,
    client: Arc<dyn ChatCompletion>,
    clipboard: Box<dyn ClipboardSink + Send>,
    in_flight: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(cfg: Config, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = OpenAiClient::new(&cfg.openai.base_url, &cfg.openai.model)?;
        let mut app = Self::with_parts(cfg, Arc::new(client), Box::new(SystemClipboard));
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            app.state.session.set_api_key(key);
            app.state.focus = Focus::Company;
        }
        Ok(app)
    }

    pub fn with_parts(
        cfg: Config,
        client: Arc<dyn ChatCompletion>,
        clipboard: Box<dyn ClipboardSink + Send>,
    ) -> Self {
        let session = PaletteSession::new(cfg.ui.default_company.clone());
        let mut state = AppState::new(session);
        // No key yet; that is the first thing the user has to enter.
        state.focus = Focus::ApiKey;
        Self {
            cfg,
            state,
            client,
            clipboard,
            in_flight: None,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);

        // Redraws are driven by events; the ticker only runs while a spinner
        // or toast needs to move.
        let mut ticker = tokio::time::interval(Duration::from_millis(100));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tui::draw(terminal, &mut self.state)?;

        loop {
            tokio::select! {
                ev = rx.recv() => {
                    let Some(ev) = ev else { break };
                    match ev {
                        Event::Input(input_ev) => {
                            if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                                self.handle_action(action, &tx);
                            }
                        }
                        Event::Network(ne) => self.handle_network(ne),
                    }
                }
                _ = ticker.tick(), if self.state.is_animating() => {
                    self.state.tick = self.state.tick.wrapping_add(1);
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::RequestPalette => self.spawn_palette_request(tx),
            Action::CopySelected => self.copy_color(self.state.selected),
            Action::CopyTile(idx) => {
                if idx < self.state.session.colors().len() {
                    self.state.selected = idx;
                    self.state.focus = Focus::Palette;
                    self.copy_color(idx);
                }
            }
            _ => self.reduce(action),
        }
    }

    /// Start a fetch, superseding any that is still running.
    fn spawn_palette_request(&mut self, tx: &mpsc::Sender<Event>) {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!("aborting superseded palette request");
            previous.abort();
        }

        let request = self.state.session.begin_request();
        let client = Arc::clone(&self.client);
        let tx = tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = request.execute(client.as_ref()).await;
            let _ = tx
                .send(Event::Network(NetworkEvent::PaletteFetched {
                    request_id: request.id,
                    outcome,
                }))
                .await;
        }));
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::PaletteFetched { request_id, outcome } => {
                if self.state.session.finish_request(request_id, &outcome) {
                    self.in_flight = None;
                    if outcome.is_ok() {
                        self.state.selected = 0;
                    }
                    self.state.clamp_selection();
                }
            }
        }
    }

    fn copy_color(&mut self, idx: usize) {
        let Some(color) = self.state.session.colors().get(idx).cloned() else {
            return;
        };
        clipboard::copy_to_clipboard(self.clipboard.as_mut(), &color, &mut self.state.toasts);
    }

    /// State changes that need no I/O.
    fn reduce(&mut self, action: Action) {
        let s = &mut self.state;
        match action {
            Action::Quit => s.should_quit = true,
            Action::FocusNext => s.focus = s.focus.next(),
            Action::FocusPrev => s.focus = s.focus.prev(),
            Action::SetFocus(focus) => s.focus = focus,
            Action::ToggleHelp => s.show_help = !s.show_help,
            Action::ToggleRevealKey => s.reveal_key = !s.reveal_key,
            Action::InputChar(c) => edit_focused(s, |text| text.push(c)),
            Action::Backspace => edit_focused(s, |text| {
                text.pop();
            }),
            Action::ClearInput => edit_focused(s, String::clear),
            Action::SelectPrev => s.select_prev(),
            Action::SelectNext => s.select_next(),
            Action::Resize => {}
            Action::RequestPalette | Action::CopySelected | Action::CopyTile(_) => {}
        }
    }

    #[cfg(test)]
    fn state(&self) -> &AppState {
        &self.state
    }
}

/// Apply `edit` to whichever text field has focus.
fn edit_focused(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    match state.focus {
        Focus::Company => {
            let mut text = state.session.company_name().to_string();
            edit(&mut text);
            state.session.set_company_name(text);
        }
        Focus::ApiKey => {
            let mut text = state.session.api_key().to_string();
            edit(&mut text);
            state.session.set_api_key(text);
        }
        Focus::Palette => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticClient(&'static str);

    #[async_trait]
    impl ChatCompletion for StaticClient {
        async fn complete(&self, _api_key: &str, _prompt: &str) -> anyhow::Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct SharedClipboard(Arc<Mutex<Vec<String>>>);

    impl ClipboardSink for SharedClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn app_with(reply: &'static str) -> (App, SharedClipboard) {
        let cb = SharedClipboard::default();
        let app = App::with_parts(
            Config::default(),
            Arc::new(StaticClient(reply)),
            Box::new(cb.clone()),
        );
        (app, cb)
    }

    #[test]
    fn test_starts_on_api_key_without_key() {
        let (app, _) = app_with("[]");
        assert_eq!(app.state().focus, Focus::ApiKey);
        assert_eq!(app.state().session.company_name(), "Twitter");
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let (mut app, _) = app_with("[]");
        let (tx, _rx) = mpsc::channel(8);

        for c in "sk-1".chars() {
            app.handle_action(Action::InputChar(c), &tx);
        }
        app.handle_action(Action::SetFocus(Focus::Company), &tx);
        app.handle_action(Action::ClearInput, &tx);
        for c in "Acmee".chars() {
            app.handle_action(Action::InputChar(c), &tx);
        }
        app.handle_action(Action::Backspace, &tx);

        assert_eq!(app.state().session.api_key(), "sk-1");
        assert_eq!(app.state().session.company_name(), "Acme");
    }

    #[tokio::test]
    async fn test_request_round_trip_through_events() {
        let (mut app, _) = app_with("['#FF0000', '#00FF00', '#FF0000']");
        let (tx, mut rx) = mpsc::channel(8);

        app.handle_action(Action::RequestPalette, &tx);
        assert!(app.state().session.is_loading());

        let Some(Event::Network(ne)) = rx.recv().await else {
            panic!("expected network event");
        };
        app.handle_network(ne);

        assert!(!app.state().session.is_loading());
        assert_eq!(app.state().session.colors(), ["#FF0000".to_string(), "#00FF00".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_parse_leaves_palette() {
        let (mut app, _) = app_with("I'm not sure which company you mean.");
        let (tx, mut rx) = mpsc::channel(8);

        app.handle_action(Action::RequestPalette, &tx);
        let Some(Event::Network(ne)) = rx.recv().await else {
            panic!("expected network event");
        };
        app.handle_network(ne);

        assert!(!app.state().session.is_loading());
        assert_eq!(app.state().session.colors().len(), 6);
        assert!(app.state().toasts.is_empty());
    }

    #[tokio::test]
    async fn test_second_request_supersedes_first() {
        let (mut app, _) = app_with("['#ABCDEF']");
        let (tx, mut rx) = mpsc::channel(8);

        app.handle_action(Action::RequestPalette, &tx);
        app.handle_action(Action::RequestPalette, &tx);

        // Only the second request can still report back.
        let Some(Event::Network(ne)) = rx.recv().await else {
            panic!("expected network event");
        };
        let NetworkEvent::PaletteFetched { request_id, .. } = &ne;
        assert_eq!(*request_id, 2);
        app.handle_network(ne);
        assert!(!app.state().session.is_loading());
    }

    #[test]
    fn test_copy_tile_posts_toast() {
        let (mut app, cb) = app_with("[]");
        let (tx, _rx) = mpsc::channel(8);

        app.handle_action(Action::CopyTile(2), &tx);

        assert_eq!(cb.0.lock().unwrap().as_slice(), ["#657786".to_string()]);
        assert_eq!(app.state().toasts.iter().count(), 1);
        assert_eq!(app.state().selected, 2);
        assert_eq!(app.state().focus, Focus::Palette);
    }

    #[test]
    fn test_copy_out_of_range_is_ignored() {
        let (mut app, cb) = app_with("[]");
        let (tx, _rx) = mpsc::channel(8);

        app.handle_action(Action::CopyTile(40), &tx);
        assert!(cb.0.lock().unwrap().is_empty());
        assert!(app.state().toasts.is_empty());
    }
}
