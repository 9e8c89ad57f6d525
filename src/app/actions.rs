use super::state::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    SetFocus(Focus),
    ToggleHelp,
    ToggleRevealKey,

    InputChar(char),
    Backspace,
    ClearInput,

    RequestPalette,

    SelectPrev,
    SelectNext,
    CopySelected,
    CopyTile(usize),

    Resize,
}
