//! The DOM surface the menu controller is written against.
//!
//! Elements are addressed by ID. Lookups that find nothing return `None`,
//! empty collections or `false`; mutations of missing elements are no-ops.

use crate::element::Tag;
use crate::layout::{Rect, Viewport};

pub trait Dom {
    // Elements
    fn exists(&self, id: &str) -> bool;
    fn tag(&self, id: &str) -> Option<Tag>;

    // classList
    fn has_class(&self, id: &str, class: &str) -> bool;
    fn classes(&self, id: &str) -> Vec<String>;
    fn add_class(&mut self, id: &str, class: &str);
    fn remove_class(&mut self, id: &str, class: &str);
    /// Flip `class`, returning whether it is now present.
    fn toggle_class(&mut self, id: &str, class: &str) -> bool;

    // Attributes and dataset
    fn attr(&self, id: &str, name: &str) -> Option<String>;
    fn set_attr(&mut self, id: &str, name: &str, value: &str);
    fn data(&self, id: &str, key: &str) -> Option<String>;
    fn set_data(&mut self, id: &str, key: &str, value: &str);

    // Inline style
    fn style(&self, id: &str, property: &str) -> Option<String>;
    fn set_style(&mut self, id: &str, property: &str, value: &str);
    fn remove_style(&mut self, id: &str, property: &str);

    // Geometry
    fn bounding_rect(&self, id: &str) -> Option<Rect>;
    /// Rendered height; zero for elements that are not displayed.
    fn offset_height(&self, id: &str) -> f64;
    fn reset_scroll(&mut self, id: &str);
    /// Whether the computed `display` is anything but `none`.
    fn is_displayed(&self, id: &str) -> bool;
    fn viewport(&self) -> Viewport;

    // Queries
    fn body(&self) -> String;
    /// First attached element carrying `class`, in document order.
    fn find_by_class(&self, class: &str) -> Option<String>;
    /// First attached element whose attribute `name` equals `value`.
    fn find_by_attr(&self, name: &str, value: &str) -> Option<String>;
    /// Descendants of `root` (not `root` itself) carrying `class`, in document order.
    fn descendants_with_class(&self, root: &str, class: &str) -> Vec<String>;
    fn parent(&self, id: &str) -> Option<String>;
    /// Nearest ancestor-or-self carrying `class`.
    fn closest(&self, id: &str, class: &str) -> Option<String>;
    /// `Node.contains`: true when `descendant` is `ancestor` or lies beneath it.
    fn contains(&self, ancestor: &str, descendant: &str) -> bool;

    // Focus
    /// `document.activeElement`, or `None` when focus rests on the body.
    fn active_element(&self) -> Option<String>;
    fn focus(&mut self, id: &str);

    // Tree mutation
    /// Create a detached element, returning its ID.
    fn create_element(&mut self, tag: Tag, id: Option<&str>) -> String;
    /// Move the whole content of `from` into `to`.
    fn move_content(&mut self, from: &str, to: &str);
    fn set_text(&mut self, id: &str, text: &str);
    fn append_child(&mut self, parent: &str, child: &str);
    /// Put `new` where `old` is, detaching `old`.
    fn replace_with(&mut self, old: &str, new: &str);
    fn remove(&mut self, id: &str);
}
