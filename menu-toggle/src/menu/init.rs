use std::rc::Rc;

use menudom::{Dom, Tag};

use super::{Binding, Menu};
use crate::error::MenuError;
use crate::markup::normalize_trigger;
use crate::toggle::{InitOptions, InitOutcome, Toggle, ToggleId};

impl<D: Dom + 'static> Menu<D> {
    pub(super) fn register(
        &mut self,
        trigger: &str,
        options: InitOptions<D>,
    ) -> Result<InitOutcome, MenuError> {
        let config = Rc::clone(&self.config);
        let classes = &config.classes;

        let Some(tag) = self.dom.tag(trigger) else {
            return Err(MenuError::ElementNotFound(trigger.to_string()));
        };
        if tag == Tag::Button && self.dom.has_class(trigger, &classes.trigger_initialized) {
            log::trace!("[menu] init: {trigger} already initialised");
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let panel = self.resolve_panel(trigger)?;
        if let Some(existing) = self.toggles.get(&panel) {
            log::warn!(
                "[menu] init: {panel} is already controlled by {}, ignoring {trigger}",
                existing.trigger
            );
            return Ok(InitOutcome::AlreadyInitialized);
        }
        let trigger = normalize_trigger(&mut self.dom, trigger, &panel)?;
        self.dom.add_class(&trigger, &classes.trigger_initialized);

        if self.dom.is_displayed(&trigger) {
            self.dom.add_class(&panel, &classes.panel_managed);
        }

        let parent = self
            .dom
            .parent(&panel)
            .and_then(|above| self.dom.closest(&above, &classes.panel));
        if let Some(parent) = &parent {
            self.dom.set_data(&panel, &config.parent_key, parent);
        }

        self.bindings
            .insert(trigger.clone(), Binding::Trigger(panel.clone()));
        self.bindings
            .insert(panel.clone(), Binding::Panel(panel.clone()));

        let close_button = if self.dom.has_class(&panel, &classes.with_close) {
            Some(self.add_close_button(&panel))
        } else {
            None
        };

        let id = panel.clone();
        self.resize.add(move |menu: &mut Menu<D>| menu.react_to_resize(&id));

        let toggle = Toggle {
            id: panel.clone(),
            trigger,
            parent,
            close_button,
            hooks: options.hooks,
            trigger_keys: options.on_trigger_key,
            panel_keys: options.on_panel_key,
        };
        let elements = toggle.elements();
        log::debug!(
            "[menu] initialised {} (trigger {}, parent {:?})",
            elements.panel,
            elements.trigger,
            elements.parent
        );
        self.toggles.insert(panel.clone(), toggle);

        if let Some(on_init_done) = options.on_init_done {
            on_init_done(self, &elements);
        }
        Ok(InitOutcome::Initialized(panel))
    }

    /// Initialise every element carrying the auto-init class, in document order.
    ///
    /// Failures are logged and skipped so one broken trigger does not block the rest.
    pub fn init_all(&mut self) -> Vec<ToggleId> {
        let class = self.config.classes.trigger.clone();
        let body = self.dom.body();
        let mut initialized = Vec::new();
        for trigger in self.dom.descendants_with_class(&body, &class) {
            match self.register(&trigger, InitOptions::default()) {
                Ok(InitOutcome::Initialized(id)) => initialized.push(id),
                Ok(InitOutcome::AlreadyInitialized) => {}
                Err(e) => log::warn!("[menu] init_all: skipping {trigger}: {e}"),
            }
        }
        log::info!("[menu] auto-initialised {} toggles", initialized.len());
        initialized
    }

    /// The panel named by the trigger's `data-controls`, else its `aria-controls`.
    fn resolve_panel(&self, trigger: &str) -> Result<String, MenuError> {
        let panel = self
            .dom
            .data(trigger, &self.config.controls_key)
            .or_else(|| self.dom.attr(trigger, "aria-controls"))
            .ok_or_else(|| MenuError::MissingControls {
                trigger: trigger.to_string(),
            })?;
        if !self.dom.exists(&panel) {
            return Err(MenuError::PanelNotFound {
                trigger: trigger.to_string(),
                panel,
            });
        }
        Ok(panel)
    }

    fn add_close_button(&mut self, panel: &str) -> String {
        let config = Rc::clone(&self.config);
        let classes = &config.classes;

        let button = self.dom.create_element(Tag::Button, None);
        self.dom.add_class(&button, &classes.close_button);
        self.dom.set_attr(&button, "aria-controls", panel);

        let label = self.dom.create_element(Tag::Span, None);
        self.dom.add_class(&label, &classes.assistive_text);
        self.dom.set_text(&label, &config.close_label);
        self.dom.append_child(&button, &label);

        self.dom.append_child(panel, &button);
        self.bindings
            .insert(button.clone(), Binding::CloseButton(panel.to_string()));
        log::debug!("[menu] added close button {button} to {panel}");
        button
    }
}
