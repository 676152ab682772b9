use std::rc::Rc;

use menudom::Dom;

use super::{Menu, px};
use crate::toggle::ToggleId;

impl<D: Dom + 'static> Menu<D> {
    /// Cleanup once a panel's CSS transition has finished.
    ///
    /// Opened panels mark their ancestor chain as transitioned and re-check
    /// their height against the content, in case layout shifted while
    /// animating. Closed panels scroll back to the top and drop their own
    /// active-child markers.
    pub fn transition_end(&mut self, panel: &str) {
        if !self.toggles.contains_key(panel) {
            return;
        }
        let config = Rc::clone(&self.config);
        let classes = &config.classes;

        if self.dom.has_class(panel, &classes.panel_open) {
            for ancestor in self.ancestor_panels(panel) {
                self.dom
                    .add_class(&ancestor, &classes.panel_active_child_transitioned);
            }
            if !self.is_full_height(panel) {
                let expected = px(self.content_height(panel));
                if self.dom.style(panel, "height").as_deref() != Some(expected.as_str()) {
                    log::debug!("[menu] {panel} content moved during transition, re-measuring");
                    self.layout(panel);
                }
            }
        } else {
            self.dom.reset_scroll(panel);
            self.dom.remove_class(panel, &classes.panel_active_child);
            self.dom
                .remove_class(panel, &classes.panel_active_child_transitioned);
        }
    }

    /// Per-toggle resize callback: keep the managed marker in step with the
    /// trigger's visibility and keep the last opened panel sized.
    pub(crate) fn react_to_resize(&mut self, id: &str) {
        let Some(toggle) = self.toggles.get(id) else {
            return;
        };
        let visible = self.dom.is_displayed(&toggle.trigger);
        let managed_class = self.config.classes.panel_managed.clone();
        let managed = self.dom.has_class(id, &managed_class);
        if !visible && managed {
            log::debug!("[menu] trigger of {id} hidden, releasing panel");
            self.dom.remove_class(id, &managed_class);
        } else if visible && !managed {
            log::debug!("[menu] trigger of {id} visible, managing panel");
            self.dom.add_class(id, &managed_class);
        }

        let last_open = self
            .session
            .last_open()
            .filter(|last_open| self.dom.exists(last_open))
            .map(str::to_string);
        if let Some(last_open) = last_open {
            self.layout(&last_open);
        }
    }

    /// Enclosing toggles of `id`, nearest first.
    pub fn ancestor_panels(&self, id: &str) -> Vec<ToggleId> {
        let mut ancestors = Vec::new();
        let mut current = self.toggles.get(id).and_then(|t| t.parent.clone());
        while let Some(parent) = current {
            current = self.toggles.get(&parent).and_then(|t| t.parent.clone());
            ancestors.push(parent);
        }
        ancestors
    }
}
