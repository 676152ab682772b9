//! The toggle controller.
//!
//! [`Menu`] owns the DOM adapter, the [`Session`] and every registered
//! toggle. Panels carry their state in classes; the open marker on the
//! panel and the active marker on the trigger are the source of truth.

mod dispatch;
mod init;
mod layout;
mod lifecycle;

use std::collections::HashMap;
use std::rc::Rc;

use menudom::Dom;

use crate::coalesce::{Coalescer, EventKind, FlushReport, run_batch};
use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::frame::FrameQueue;
use crate::session::Session;
use crate::toggle::{Hooks, InitOptions, InitOutcome, Toggle, ToggleElements, ToggleId};

pub(crate) use layout::px;

/// The operations a host page drives.
pub trait MenuToggle {
    type Dom: Dom;

    /// Size the panel (and page wrapper) so open content is never clipped.
    fn adjust_layout(&mut self, toggle: &str);

    /// Close a toggle and every open toggle nested inside it. No-op when already shut.
    fn shut(&mut self, toggle: &str, hooks: &Hooks<Self::Dom>);

    /// Close the toggle holding focus, or else the last opened one.
    fn back_out(&mut self, hooks: &Hooks<Self::Dom>);

    /// Open a toggle, first shutting whatever open toggle is not one of its ancestors.
    fn open(&mut self, toggle: &str, hooks: &Hooks<Self::Dom>);

    /// Flip the panel's open marker and open or shut to match it.
    fn toggle_state(&mut self, toggle: &str, hooks: &Hooks<Self::Dom>);

    /// One-time setup of a trigger element.
    fn init(
        &mut self,
        trigger: &str,
        options: InitOptions<Self::Dom>,
    ) -> Result<InitOutcome, MenuError>;
}

/// Which toggle an element belongs to, for event dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    Trigger(ToggleId),
    Panel(ToggleId),
    CloseButton(ToggleId),
}

pub struct Menu<D: Dom> {
    dom: D,
    config: Rc<MenuConfig>,
    session: Session,
    toggles: HashMap<ToggleId, Toggle<D>>,
    bindings: HashMap<String, Binding>,
    resize: Coalescer<Menu<D>>,
    scroll: Coalescer<Menu<D>>,
    frames: FrameQueue,
}

impl<D: Dom + 'static> Menu<D> {
    pub fn new(dom: D) -> Self {
        Self::with_config(dom, MenuConfig::default())
    }

    pub fn with_config(dom: D, config: MenuConfig) -> Self {
        let frames = FrameQueue::from_config(&config.scheduling);
        Self {
            dom,
            config: Rc::new(config),
            session: Session::new(),
            toggles: HashMap::new(),
            bindings: HashMap::new(),
            resize: Coalescer::resize(),
            scroll: Coalescer::scroll(),
            frames,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn last_open(&self) -> Option<&str> {
        self.session.last_open()
    }

    pub fn toggle(&self, id: &str) -> Option<&Toggle<D>> {
        self.toggles.get(id)
    }

    /// IDs of every registered toggle, sorted.
    pub fn toggle_ids(&self) -> Vec<ToggleId> {
        let mut ids: Vec<_> = self.toggles.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn elements(&self, id: &str) -> Option<ToggleElements> {
        self.toggles.get(id).map(Toggle::elements)
    }

    /// Hooks registered at init, or none for unknown toggles.
    pub fn hooks_for(&self, id: &str) -> Hooks<D> {
        self.toggles
            .get(id)
            .map(|toggle| toggle.hooks.clone())
            .unwrap_or_default()
    }

    /// The toggle whose trigger is `trigger`.
    pub fn toggle_for_trigger(&self, trigger: &str) -> Option<&str> {
        match self.bindings.get(trigger) {
            Some(Binding::Trigger(id)) => Some(id),
            _ => None,
        }
    }

    /// Whether the trigger carries the active marker.
    pub fn is_open(&self, id: &str) -> bool {
        self.toggles
            .get(id)
            .is_some_and(|t| self.dom.has_class(&t.trigger, &self.config.classes.trigger_active))
    }

    /// Full viewport height when open, either always or only on open.
    pub fn is_full_height(&self, id: &str) -> bool {
        let classes = &self.config.classes;
        self.dom.has_class(id, &classes.full_height)
            || self.dom.has_class(id, &classes.full_height_on_open)
    }

    /// Whether the trigger is currently displayed.
    pub fn is_visible(&self, id: &str) -> bool {
        self.toggles
            .get(id)
            .is_some_and(|t| self.dom.is_displayed(&t.trigger))
    }

    pub fn resize_events(&self) -> &Coalescer<Menu<D>> {
        &self.resize
    }

    pub fn scroll_events(&self) -> &Coalescer<Menu<D>> {
        &self.scroll
    }

    pub fn frames(&self) -> &FrameQueue {
        &self.frames
    }

    /// Register a host callback for coalesced resize events.
    pub fn on_resize(&mut self, callback: impl FnMut(&mut Menu<D>) + 'static) {
        self.resize.add(callback);
    }

    /// Register a host callback for coalesced scroll events.
    pub fn on_scroll(&mut self, callback: impl FnMut(&mut Menu<D>) + 'static) {
        self.scroll.add(callback);
    }

    /// Drop every resize and scroll callback, e.g. between test cases.
    ///
    /// Also withdraws flushes already queued, so the next event starts a fresh
    /// frame or timer. Safe to call from inside a callback.
    pub fn clear_callbacks(&mut self) {
        self.resize.clear_scheduled(&mut self.frames);
        self.scroll.clear_scheduled(&mut self.frames);
    }

    /// Run the pending flush for `kind`, if any.
    pub fn flush(&mut self, kind: EventKind) -> FlushReport {
        let Some(mut batch) = self.coalescer_mut(kind).begin_flush() else {
            return FlushReport::default();
        };
        let report = run_batch(kind, &mut batch, self);
        self.coalescer_mut(kind).finish_flush(batch);
        report
    }

    /// Advance the frame queue by `elapsed` and flush whatever became due.
    pub fn run_frame(&mut self, elapsed: std::time::Duration) -> FlushReport {
        let mut report = FlushReport::default();
        for kind in self.frames.advance(elapsed) {
            report.merge(self.flush(kind));
        }
        report
    }

    fn coalescer_mut(&mut self, kind: EventKind) -> &mut Coalescer<Menu<D>> {
        match kind {
            EventKind::Resize => &mut self.resize,
            EventKind::Scroll => &mut self.scroll,
        }
    }

    /// Move the last-open pointer off `id` onto its parent.
    fn release_pointer(&mut self, id: &str, parent: Option<&str>) {
        if self.session.is_last_open(id) {
            self.session.set_last_open(parent.map(str::to_string));
        }
    }
}

impl<D: Dom + 'static> MenuToggle for Menu<D> {
    type Dom = D;

    fn adjust_layout(&mut self, toggle: &str) {
        self.layout(toggle);
    }

    fn shut(&mut self, toggle: &str, hooks: &Hooks<D>) {
        let Some(elements) = self.elements(toggle) else {
            log::warn!("[menu] shut: unknown toggle {toggle}");
            return;
        };
        let config = Rc::clone(&self.config);
        let classes = &config.classes;
        let ToggleElements {
            trigger, parent, ..
        } = &elements;

        if !self.dom.has_class(trigger, &classes.trigger_active) {
            return;
        }
        log::debug!("[menu] shut {toggle}");

        if let Some(page) = self.dom.find_by_class(&classes.page_wrapper) {
            self.dom.remove_style(&page, "min-height");
        }
        self.dom.set_attr(trigger, "aria-expanded", "false");
        self.dom.remove_class(trigger, &classes.trigger_active);
        let body = self.dom.body();
        self.dom.remove_class(&body, &classes.body_no_scroll);
        if !self.dom.has_class(toggle, &classes.full_height) {
            self.dom.set_style(toggle, "height", "0");
        }
        self.dom.remove_class(toggle, &classes.panel_open);
        self.release_pointer(toggle, parent.as_deref());

        if let Some(parent) = parent {
            self.dom.remove_class(parent, &classes.panel_active_child);
            self.dom
                .remove_class(parent, &classes.panel_active_child_transitioned);
        }

        for child_trigger in self
            .dom
            .descendants_with_class(toggle, &classes.trigger_active)
        {
            if let Some(child) = self.toggle_for_trigger(&child_trigger).map(str::to_string) {
                self.shut(&child, hooks);
            }
        }
        // A descendant releasing the pointer hands it back to this toggle.
        self.release_pointer(toggle, parent.as_deref());

        self.dom.focus(trigger);

        if let Some(on_shut_done) = &hooks.on_shut_done {
            on_shut_done(&mut self.dom, &elements);
        }
    }

    fn back_out(&mut self, hooks: &Hooks<D>) {
        let open_class = self.config.classes.panel_open.clone();

        let focused_panel = self
            .dom
            .active_element()
            .and_then(|active| self.dom.closest(&active, &open_class))
            .filter(|panel| self.toggles.contains_key(panel));
        if let Some(panel) = focused_panel {
            log::debug!("[menu] back out of focused panel {panel}");
            self.shut(&panel, hooks);
            return;
        }

        let last_open = self
            .session
            .last_open()
            .filter(|id| self.toggles.contains_key(*id) && self.dom.exists(id))
            .map(str::to_string);
        if let Some(last_open) = last_open {
            log::debug!("[menu] back out of last open {last_open}");
            self.shut(&last_open, hooks);
            return;
        }

        log::debug!("[menu] nothing to back out of");
    }

    fn open(&mut self, toggle: &str, hooks: &Hooks<D>) {
        let Some(elements) = self.elements(toggle) else {
            log::warn!("[menu] open: unknown toggle {toggle}");
            return;
        };
        let config = Rc::clone(&self.config);
        let classes = &config.classes;

        // Shut open toggles that are not ancestors of this one. Each shut
        // moves the pointer to the shut toggle's parent, so an unrelated open
        // chain closes from its leaf upwards.
        while let Some(last_open) = self.session.last_open().map(str::to_string) {
            if last_open == toggle || self.dom.contains(&last_open, toggle) {
                break;
            }
            if !self.toggles.contains_key(&last_open) {
                self.session.clear();
                break;
            }
            log::debug!("[menu] open {toggle}: shutting unrelated {last_open}");
            self.shut(&last_open, hooks);
            if self.session.is_last_open(&last_open) {
                break;
            }
        }

        log::debug!("[menu] open {toggle}");
        self.layout(toggle);
        self.dom.set_attr(&elements.trigger, "aria-expanded", "true");
        self.dom.add_class(&elements.trigger, &classes.trigger_active);
        self.dom.add_class(toggle, &classes.panel_open);
        if let Some(parent) = &elements.parent {
            self.dom.add_class(parent, &classes.panel_active_child);
        }
        self.session.set_last_open(Some(toggle.to_string()));

        if let Some(on_open_done) = &hooks.on_open_done {
            on_open_done(&mut self.dom, &elements);
        }
    }

    fn toggle_state(&mut self, toggle: &str, hooks: &Hooks<D>) {
        if !self.toggles.contains_key(toggle) {
            log::warn!("[menu] toggle: unknown toggle {toggle}");
            return;
        }
        let open_class = self.config.classes.panel_open.clone();
        if self.dom.toggle_class(toggle, &open_class) {
            self.open(toggle, hooks);
        } else {
            self.shut(toggle, hooks);
        }
    }

    fn init(&mut self, trigger: &str, options: InitOptions<D>) -> Result<InitOutcome, MenuError> {
        self.register(trigger, options)
    }
}
