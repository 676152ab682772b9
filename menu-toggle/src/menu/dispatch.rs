use menudom::{Dom, Event, Key, KeyEvent, Modifiers};

use super::{Binding, Menu, MenuToggle};
use crate::keys::{default_panel_keys, default_trigger_keys};
use crate::toggle::Propagation;

impl<D: Dom + 'static> Menu<D> {
    /// Dispatch one browser event. Returns true when the default action was prevented.
    ///
    /// Key and click events bubble from their target up through its ancestors.
    /// Resize and scroll only mark the matching coalescer pending; the
    /// callbacks run from [`Menu::run_frame`].
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => {
                let target = target
                    .clone()
                    .or_else(|| self.dom.active_element())
                    .unwrap_or_else(|| self.dom.body());
                self.dispatch_key(target, *key, *modifiers)
            }
            Event::Click { target } => {
                if let Some(target) = target {
                    self.dispatch_click(target);
                }
                false
            }
            Event::TransitionEnd { target } => {
                if matches!(self.bindings.get(target), Some(Binding::Panel(_))) {
                    self.transition_end(target);
                }
                false
            }
            Event::Resize { width, height } => {
                log::trace!("[menu] resize to {width}x{height}");
                self.resize.notify(&mut self.frames);
                false
            }
            Event::Scroll { .. } => {
                self.scroll.notify(&mut self.frames);
                false
            }
            Event::ContentLoaded => {
                log::debug!("[menu] content loaded, resetting session");
                self.session.clear();
                false
            }
        }
    }

    fn dispatch_key(&mut self, target: String, key: Key, modifiers: Modifiers) -> bool {
        let event = KeyEvent {
            target,
            key,
            modifiers,
        };
        for current in self.bubble_path(&event.target) {
            let (id, custom, is_trigger) = match self.bindings.get(&current) {
                Some(Binding::Trigger(id)) => (
                    id.clone(),
                    self.toggles.get(id).and_then(|t| t.trigger_keys.clone()),
                    true,
                ),
                Some(Binding::Panel(id)) => (
                    id.clone(),
                    self.toggles.get(id).and_then(|t| t.panel_keys.clone()),
                    false,
                ),
                _ => continue,
            };
            let Some(elements) = self.elements(&id) else {
                continue;
            };

            let propagation = match (custom, is_trigger) {
                (Some(handler), _) => handler(self, &elements, &event),
                (None, true) => default_trigger_keys(self, &elements, &event),
                (None, false) => default_panel_keys(self, &elements, &event),
            };
            if propagation == Propagation::Stop {
                log::trace!("[menu] {:?} handled at {current}", event.key);
                return true;
            }
        }
        false
    }

    fn dispatch_click(&mut self, target: &str) {
        for current in self.bubble_path(target) {
            match self.bindings.get(&current).cloned() {
                Some(Binding::Trigger(id)) => {
                    log::trace!("[menu] click on trigger of {id}");
                    let hooks = self.hooks_for(&id);
                    self.toggle_state(&id, &hooks);
                }
                Some(Binding::CloseButton(id)) => {
                    log::trace!("[menu] click on close button of {id}");
                    let hooks = self.hooks_for(&id);
                    self.shut(&id, &hooks);
                }
                _ => {}
            }
        }
    }

    /// `target` followed by its ancestors, as computed before any handler runs.
    fn bubble_path(&self, target: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self.dom.exists(target).then(|| target.to_string());
        while let Some(id) = current {
            current = self.dom.parent(&id);
            path.push(id);
        }
        path
    }
}
