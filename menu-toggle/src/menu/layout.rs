use std::rc::Rc;

use menudom::Dom;

use super::Menu;

/// CSS pixel length. Whole numbers print without a fraction: `750px`.
pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

impl<D: Dom + 'static> Menu<D> {
    /// Size `panel` and stretch the page wrapper to fit it.
    ///
    /// Full-height panels fill the viewport below their top edge and set the
    /// page `min-height` to the viewport height. Every length is written with
    /// a unit, so an 800 high viewport gives `min-height: 800px`, never a bare
    /// `800`.
    pub(super) fn layout(&mut self, panel: &str) {
        if !self.dom.exists(panel) {
            log::warn!("[menu] layout: no element {panel}");
            return;
        }
        let config = Rc::clone(&self.config);
        let classes = &config.classes;
        let top = self.panel_top(panel);
        let page = self.dom.find_by_class(&classes.page_wrapper);

        if self.is_full_height(panel) {
            let viewport = self.dom.viewport().height;
            self.dom.set_style(panel, "height", &px(viewport - top));
            if let Some(page) = &page {
                self.dom.set_style(page, "min-height", &px(viewport));
            }
            let body = self.dom.body();
            self.dom.add_class(&body, &classes.body_no_scroll);
            log::trace!("[menu] layout {panel}: full height {}", viewport - top);
        } else {
            let content = self.content_height(panel);
            self.dom.set_style(panel, "height", &px(content));
            if let Some(page) = &page {
                self.dom.set_style(page, "min-height", &px(content + top));
            }
            log::trace!("[menu] layout {panel}: content height {content}");
        }
    }

    /// Offset height of the panel's content wrapper, or of the panel itself.
    pub(super) fn content_height(&self, panel: &str) -> f64 {
        let wrapper_class = &self.config.classes.content_wrapper;
        match self
            .dom
            .descendants_with_class(panel, wrapper_class)
            .first()
        {
            Some(wrapper) => self.dom.offset_height(wrapper),
            None => self.dom.offset_height(panel),
        }
    }

    fn panel_top(&self, panel: &str) -> f64 {
        self.dom
            .bounding_rect(panel)
            .map(|rect| rect.top())
            .unwrap_or_default()
    }
}
