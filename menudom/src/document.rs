use crate::dom::Dom;
use crate::element::{
    find_element, find_element_mut, path_to, remove_element, replace_element, walk, Content,
    Display, Element, Tag,
};
use crate::focus::FocusState;
use crate::layout::{Rect, Viewport};

/// An in-memory document: the attached tree under `<body>`, elements that were
/// created but not yet inserted, the viewport and the focus.
#[derive(Debug)]
pub struct Document {
    root: Element,
    detached: Vec<Element>,
    viewport: Viewport,
    focus: FocusState,
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            root: body,
            detached: Vec::new(),
            viewport: Viewport::default(),
            focus: FocusState::new(),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id).or_else(|| {
            self.detached
                .iter()
                .find_map(|tree| find_element(tree, id))
        })
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        if find_element(&self.root, id).is_some() {
            return find_element_mut(&mut self.root, id);
        }
        self.detached
            .iter_mut()
            .find_map(|tree| find_element_mut(tree, id))
    }

    /// Whether the element is part of the document tree.
    pub fn is_attached(&self, id: &str) -> bool {
        find_element(&self.root, id).is_some()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Update the computed `display` of an element, e.g. after a media query flips.
    pub fn set_display(&mut self, id: &str, display: Display) {
        if let Some(el) = self.get_mut(id) {
            el.display = display;
        }
    }

    /// Update the measured bounding rect of an element.
    pub fn set_rect(&mut self, id: &str, rect: Rect) {
        if let Some(el) = self.get_mut(id) {
            el.rect = rect;
        }
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    /// Tab to the next focusable element.
    pub fn focus_next(&mut self) -> Option<String> {
        self.focus.focus_next(&self.root)
    }

    /// Shift+Tab to the previous focusable element.
    pub fn focus_prev(&mut self) -> Option<String> {
        self.focus.focus_prev(&self.root)
    }

    pub fn blur(&mut self) -> bool {
        self.focus.blur()
    }

    fn path(&self, id: &str) -> Option<Vec<String>> {
        path_to(&self.root, id).or_else(|| self.detached.iter().find_map(|tree| path_to(tree, id)))
    }

    /// Take an element out of wherever it lives so it can be re-inserted.
    fn take(&mut self, id: &str) -> Option<Element> {
        if let Some(index) = self.detached.iter().position(|tree| tree.id == id) {
            return Some(self.detached.remove(index));
        }
        remove_element(&mut self.root, id).or_else(|| {
            self.detached
                .iter_mut()
                .find_map(|tree| remove_element(tree, id))
        })
    }

    fn drop_stale_focus(&mut self) {
        let stale = self
            .focus
            .focused()
            .is_some_and(|id| find_element(&self.root, id).is_none());
        if stale {
            self.focus.blur();
        }
    }
}

impl Dom for Document {
    fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn tag(&self, id: &str) -> Option<Tag> {
        self.get(id).map(|el| el.tag.clone())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    fn classes(&self, id: &str) -> Vec<String> {
        self.get(id).map(|el| el.classes.clone()).unwrap_or_default()
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if el.has_class(class) {
            el.classes.retain(|c| c != class);
            false
        } else {
            el.classes.push(class.to_string());
            true
        }
    }

    fn attr(&self, id: &str, name: &str) -> Option<String> {
        let el = self.get(id)?;
        if name == "id" {
            return Some(el.id.clone());
        }
        el.get_attr(name).cloned()
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn data(&self, id: &str, key: &str) -> Option<String> {
        self.get(id)?.get_data(key).cloned()
    }

    fn set_data(&mut self, id: &str, key: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.data.insert(key.to_string(), value.to_string());
        }
    }

    fn style(&self, id: &str, property: &str) -> Option<String> {
        self.get(id)?.style.get(property).cloned()
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.style.insert(property.to_string(), value.to_string());
        }
    }

    fn remove_style(&mut self, id: &str, property: &str) {
        if let Some(el) = self.get_mut(id) {
            el.style.remove(property);
        }
    }

    fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.get(id).map(|el| el.rect)
    }

    fn offset_height(&self, id: &str) -> f64 {
        let Some(path) = self.path(id) else {
            return 0.0;
        };
        let rendered = path
            .iter()
            .all(|ancestor| self.get(ancestor).is_some_and(Element::is_displayed));
        match self.get(id) {
            Some(el) if rendered => el.rect.height,
            _ => 0.0,
        }
    }

    fn reset_scroll(&mut self, id: &str) {
        if let Some(el) = self.get_mut(id) {
            el.scroll_top = 0.0;
        }
    }

    fn is_displayed(&self, id: &str) -> bool {
        self.get(id).is_some_and(Element::is_displayed)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn body(&self) -> String {
        self.root.id.clone()
    }

    fn find_by_class(&self, class: &str) -> Option<String> {
        let mut found = None;
        walk(&self.root, &mut |el| {
            if found.is_none() && el.has_class(class) {
                found = Some(el.id.clone());
            }
        });
        found
    }

    fn find_by_attr(&self, name: &str, value: &str) -> Option<String> {
        let mut found = None;
        walk(&self.root, &mut |el| {
            if found.is_none() && el.get_attr(name).is_some_and(|v| v == value) {
                found = Some(el.id.clone());
            }
        });
        found
    }

    fn descendants_with_class(&self, root: &str, class: &str) -> Vec<String> {
        let Some(root) = self.get(root) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        for child in root.content.children() {
            walk(child, &mut |el| {
                if el.has_class(class) {
                    found.push(el.id.clone());
                }
            });
        }
        found
    }

    fn parent(&self, id: &str) -> Option<String> {
        let mut path = self.path(id)?;
        path.pop();
        path.pop()
    }

    fn closest(&self, id: &str, class: &str) -> Option<String> {
        self.path(id)?
            .into_iter()
            .rev()
            .find(|ancestor| self.has_class(ancestor, class))
    }

    fn contains(&self, ancestor: &str, descendant: &str) -> bool {
        self.path(descendant)
            .is_some_and(|path| path.iter().any(|id| id == ancestor))
    }

    fn active_element(&self) -> Option<String> {
        self.focus
            .focused()
            .filter(|id| self.is_attached(id))
            .map(str::to_string)
    }

    fn focus(&mut self, id: &str) {
        if self.is_attached(id) {
            self.focus.focus(id);
        }
    }

    fn create_element(&mut self, tag: Tag, id: Option<&str>) -> String {
        let mut element = Element::new(tag);
        if let Some(id) = id {
            element.id = id.to_string();
        }
        let id = element.id.clone();
        self.detached.push(element);
        id
    }

    fn move_content(&mut self, from: &str, to: &str) {
        if from == to || !self.exists(to) {
            return;
        }
        let Some(content) = self.get_mut(from).map(|el| std::mem::take(&mut el.content)) else {
            return;
        };
        if let Some(el) = self.get_mut(to) {
            el.content = content;
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.get_mut(id) {
            el.content = Content::Text(text.to_string());
        }
    }

    fn append_child(&mut self, parent: &str, child: &str) {
        if !self.exists(parent) || self.contains(child, parent) {
            return;
        }
        let Some(element) = self.take(child) else {
            return;
        };
        if let Some(parent) = self.get_mut(parent) {
            parent.content.children_mut().push(element);
        }
    }

    fn replace_with(&mut self, old: &str, new: &str) {
        if old == new || !self.is_attached(old) || self.contains(new, old) {
            return;
        }
        let Some(replacement) = self.take(new) else {
            return;
        };
        match replace_element(&mut self.root, old, replacement) {
            Ok(_replaced) => self.drop_stale_focus(),
            Err(replacement) => self.detached.push(replacement),
        }
    }

    fn remove(&mut self, id: &str) {
        if id == self.root.id {
            return;
        }
        if self.take(id).is_some() {
            self.drop_stale_focus();
        }
    }
}
