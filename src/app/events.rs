use std::fmt;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Terminal input after filtering, tagged by what the state machine
/// should do with it. Key release/repeat events never make it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyCode),
    Resize(u16, u16),
    Quit,
}

impl AppEvent {
    /// Translate a raw crossterm event, dropping everything irrelevant
    /// (mouse input, key releases, focus changes).
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Some(AppEvent::Quit);
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                    code => Some(AppEvent::Key(code)),
                }
            }
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            _ => None,
        }
    }
}

/// Player actions the fixed key map can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    FocusToggle,
    TogglePlayPause,
    VolumeUp,
    VolumeDown,
    Select,
    CursorUp,
    CursorDown,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerAction::FocusToggle => "focus toggle",
            PlayerAction::TogglePlayPause => "toggle play/pause",
            PlayerAction::VolumeUp => "volume up",
            PlayerAction::VolumeDown => "volume down",
            PlayerAction::Select => "select",
            PlayerAction::CursorUp => "cursor up",
            PlayerAction::CursorDown => "cursor down",
        };
        write!(f, "{name}")
    }
}

/// Fixed key map. Unbound keys return `None` and are ignored.
pub fn action_for_key(code: KeyCode) -> Option<PlayerAction> {
    match code {
        KeyCode::Tab => Some(PlayerAction::FocusToggle),
        KeyCode::Char('p') => Some(PlayerAction::TogglePlayPause),
        KeyCode::Char('+') => Some(PlayerAction::VolumeUp),
        KeyCode::Char('-') => Some(PlayerAction::VolumeDown),
        KeyCode::Enter => Some(PlayerAction::Select),
        KeyCode::Up => Some(PlayerAction::CursorUp),
        KeyCode::Down => Some(PlayerAction::CursorDown),
        _ => None,
    }
}
