//! Default keyboard handling for triggers and panels.
//!
//! | target  | key                     | action       |
//! |---------|-------------------------|--------------|
//! | trigger | Right, Down             | open         |
//! | trigger | Left, Up, Escape        | shut         |
//! | trigger | Enter, Space            | toggle state |
//! | panel   | Escape (not on a button)| back out     |

use menudom::{Dom, Key, KeyEvent, Tag};

use crate::menu::{Menu, MenuToggle};
use crate::toggle::{Propagation, ToggleElements};

/// What a trigger key does, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Open,
    Shut,
    Toggle,
}

impl TriggerAction {
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Right | Key::Down => Some(Self::Open),
            Key::Left | Key::Up | Key::Escape => Some(Self::Shut),
            key if key.is_activation() => Some(Self::Toggle),
            _ => None,
        }
    }
}

pub fn default_trigger_keys<D: Dom + 'static>(
    menu: &mut Menu<D>,
    toggle: &ToggleElements,
    event: &KeyEvent,
) -> Propagation {
    let Some(action) = TriggerAction::for_key(event.key) else {
        return Propagation::Continue;
    };
    log::trace!("[keys] {:?} on trigger {} -> {:?}", event.key, toggle.trigger, action);

    let hooks = menu.hooks_for(&toggle.panel);
    match action {
        TriggerAction::Open => menu.open(&toggle.panel, &hooks),
        TriggerAction::Shut => menu.shut(&toggle.panel, &hooks),
        TriggerAction::Toggle => menu.toggle_state(&toggle.panel, &hooks),
    }
    Propagation::Stop
}

pub fn default_panel_keys<D: Dom + 'static>(
    menu: &mut Menu<D>,
    toggle: &ToggleElements,
    event: &KeyEvent,
) -> Propagation {
    if event.key != Key::Escape {
        return Propagation::Continue;
    }

    let on_button = menu.dom().tag(&event.target) == Some(Tag::Button)
        || menu
            .dom()
            .has_class(&event.target, &menu.config().classes.trigger_initialized);
    if !on_button {
        log::trace!("[keys] escape inside panel {}", toggle.panel);
        let hooks = menu.hooks_for(&toggle.panel);
        menu.back_out(&hooks);
    }
    Propagation::Stop
}
