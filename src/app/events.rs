use super::session::PaletteOutcome;

#[derive(Debug)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug)]
pub enum NetworkEvent {
    PaletteFetched {
        request_id: u64,
        outcome: PaletteOutcome,
    },
}
