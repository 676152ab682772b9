//! Registered toggles and the hooks attached to them.

use std::fmt;
use std::rc::Rc;

use menudom::{Dom, KeyEvent};

use crate::menu::Menu;

/// A toggle is identified by the ID of its panel.
pub type ToggleId = String;

/// The elements making up one toggle, handed to hooks and key handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleElements {
    pub trigger: String,
    pub panel: String,
    /// Enclosing toggle's panel, if nested.
    pub parent: Option<String>,
}

/// Post-open / post-shut hook. Receives the DOM to adjust markup.
pub type Hook<D> = Rc<dyn Fn(&mut D, &ToggleElements)>;

/// Post-init hook. Receives the menu itself so it can open or shut toggles.
pub type InitHook<D> = Rc<dyn Fn(&mut Menu<D>, &ToggleElements)>;

/// Replacement `keydown` handler for a trigger or panel.
pub type KeyHandler<D> = Rc<dyn Fn(&mut Menu<D>, &ToggleElements, &KeyEvent) -> Propagation>;

/// Whether a handled event keeps bubbling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// `preventDefault` + `stopPropagation`.
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized(ToggleId),
    /// The trigger was already an initialised button; nothing changed.
    AlreadyInitialized,
}

/// Optional callbacks for open and shut.
pub struct Hooks<D> {
    pub on_open_done: Option<Hook<D>>,
    pub on_shut_done: Option<Hook<D>>,
}

impl<D> Hooks<D> {
    pub fn new() -> Self {
        Self {
            on_open_done: None,
            on_shut_done: None,
        }
    }

    pub fn on_open_done(mut self, hook: impl Fn(&mut D, &ToggleElements) + 'static) -> Self {
        self.on_open_done = Some(Rc::new(hook));
        self
    }

    pub fn on_shut_done(mut self, hook: impl Fn(&mut D, &ToggleElements) + 'static) -> Self {
        self.on_shut_done = Some(Rc::new(hook));
        self
    }
}

impl<D> Default for Hooks<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Hooks<D> {
    fn clone(&self) -> Self {
        Self {
            on_open_done: self.on_open_done.clone(),
            on_shut_done: self.on_shut_done.clone(),
        }
    }
}

impl<D> fmt::Debug for Hooks<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_open_done", &self.on_open_done.is_some())
            .field("on_shut_done", &self.on_shut_done.is_some())
            .finish()
    }
}

/// Everything `Menu::init` accepts besides the trigger.
pub struct InitOptions<D: Dom> {
    pub on_init_done: Option<InitHook<D>>,
    pub on_trigger_key: Option<KeyHandler<D>>,
    pub on_panel_key: Option<KeyHandler<D>>,
    pub hooks: Hooks<D>,
}

impl<D: Dom> InitOptions<D> {
    pub fn new() -> Self {
        Self {
            on_init_done: None,
            on_trigger_key: None,
            on_panel_key: None,
            hooks: Hooks::new(),
        }
    }

    pub fn on_init_done(mut self, hook: impl Fn(&mut Menu<D>, &ToggleElements) + 'static) -> Self {
        self.on_init_done = Some(Rc::new(hook));
        self
    }

    pub fn on_trigger_key(
        mut self,
        handler: impl Fn(&mut Menu<D>, &ToggleElements, &KeyEvent) -> Propagation + 'static,
    ) -> Self {
        self.on_trigger_key = Some(Rc::new(handler));
        self
    }

    pub fn on_panel_key(
        mut self,
        handler: impl Fn(&mut Menu<D>, &ToggleElements, &KeyEvent) -> Propagation + 'static,
    ) -> Self {
        self.on_panel_key = Some(Rc::new(handler));
        self
    }

    pub fn on_open_done(mut self, hook: impl Fn(&mut D, &ToggleElements) + 'static) -> Self {
        self.hooks = self.hooks.on_open_done(hook);
        self
    }

    pub fn on_shut_done(mut self, hook: impl Fn(&mut D, &ToggleElements) + 'static) -> Self {
        self.hooks = self.hooks.on_shut_done(hook);
        self
    }
}

impl<D: Dom> Default for InitOptions<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered toggle.
pub struct Toggle<D: Dom> {
    pub id: ToggleId,
    pub trigger: String,
    /// Computed once at init from DOM ancestry.
    pub parent: Option<ToggleId>,
    pub close_button: Option<String>,
    pub(crate) hooks: Hooks<D>,
    pub(crate) trigger_keys: Option<KeyHandler<D>>,
    pub(crate) panel_keys: Option<KeyHandler<D>>,
}

impl<D: Dom> Toggle<D> {
    pub fn elements(&self) -> ToggleElements {
        ToggleElements {
            trigger: self.trigger.clone(),
            panel: self.id.clone(),
            parent: self.parent.clone(),
        }
    }

    pub fn has_close_button(&self) -> bool {
        self.close_button.is_some()
    }

    pub fn hooks(&self) -> &Hooks<D> {
        &self.hooks
    }
}

impl<D: Dom> fmt::Debug for Toggle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("id", &self.id)
            .field("trigger", &self.trigger)
            .field("parent", &self.parent)
            .field("close_button", &self.close_button)
            .finish_non_exhaustive()
    }
}
