use crate::element::Element;

/// Tracks which element is currently focused (`document.activeElement`).
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let new_focus = match &self.focused {
            None => focusable.first()?.clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable.first()?.clone(),
            },
        };
        self.change_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let new_focus = match &self.focused {
            None => focusable.last()?.clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable.last()?.clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };
        self.change_to(new_focus)
    }

    fn change_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        log::trace!("[focus] {:?} -> {}", self.focused, new_focus);
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }
}

/// IDs of displayed, focusable elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut focusable = Vec::new();
    collect_visible(root, &mut focusable);
    focusable
}

fn collect_visible(element: &Element, out: &mut Vec<String>) {
    // A hidden element hides its whole subtree.
    if !element.is_displayed() {
        return;
    }
    if element.tag.is_focusable() {
        out.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_visible(child, out);
    }
}

