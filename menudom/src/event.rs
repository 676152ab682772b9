/// Browser events, targeted at element IDs
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `keydown`, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// `click`
    Click { target: Option<String> },
    /// `transitionend` on an element whose CSS transition finished
    TransitionEnd { target: String },
    /// Window `resize`
    Resize { width: f64, height: f64 },
    /// Document `scroll`
    Scroll { delta_y: f64 },
    /// `DOMContentLoaded`
    ContentLoaded,
}

impl Event {
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn transition_end(target: impl Into<String>) -> Self {
        Self::TransitionEnd {
            target: target.into(),
        }
    }
}

/// A `keydown` after target resolution, handed to keyboard handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Element the event was dispatched to.
    pub target: String,
    pub key: Key,
    pub modifiers: Modifiers,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Space,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    /// Map a legacy `KeyboardEvent.which` code.
    pub fn from_code(code: u32) -> Option<Self> {
        let key = match code {
            8 => Key::Backspace,
            9 => Key::Tab,
            13 => Key::Enter,
            27 => Key::Escape,
            32 => Key::Space,
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            45 => Key::Insert,
            46 => Key::Delete,
            112..=123 => Key::F((code - 111) as u8),
            48..=57 | 65..=90 => Key::Char(char::from_u32(code)?.to_ascii_lowercase()),
            _ => return None,
        };
        Some(key)
    }

    /// Map a `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Insert" => Key::Insert,
            _ => {
                if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                    return Some(Key::F(n));
                }
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Enter or Space, the keys that activate a button.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space | Key::Char(' '))
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}
