use super::session::PaletteSession;
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Company,
    ApiKey,
    Palette,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Company => Focus::ApiKey,
            Focus::ApiKey => Focus::Palette,
            Focus::Palette => Focus::Company,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Company => Focus::Palette,
            Focus::ApiKey => Focus::Company,
            Focus::Palette => Focus::ApiKey,
        }
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Company | Focus::ApiKey)
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    const LIFETIME: Duration = Duration::from_secs(3);

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) > Self::LIFETIME
    }
}

/// Stacked notifications, newest last
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub const MAX_VISIBLE: usize = 4;

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == Self::MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Screen regions recorded at draw time, used for mouse hit-testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub company_field: Rect,
    pub api_key_field: Rect,
    pub enter_button: Rect,
    pub tiles: Vec<Rect>,
}

impl HitAreas {
    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.tiles.iter().position(|r| r.contains(pos))
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub session: PaletteSession,

    pub focus: Focus,
    pub selected: usize,
    pub reveal_key: bool,
    pub show_help: bool,

    pub toasts: ToastQueue,
    pub hit: HitAreas,
}

impl AppState {
    pub fn new(session: PaletteSession) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            session,
            focus: Focus::default(),
            selected: 0,
            reveal_key: false,
            show_help: false,
            toasts: ToastQueue::default(),
            hit: HitAreas::default(),
        }
    }

    /// Whether something on screen changes without input.
    pub fn is_animating(&self) -> bool {
        self.session.is_loading() || !self.toasts.is_empty()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.session.colors().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Keep the selection inside the palette after it is replaced.
    pub fn clamp_selection(&mut self) {
        let len = self.session.colors().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.session.colors().get(self.selected).map(String::as_str)
    }
}
