use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::layout::Rect;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Body,
    Div,
    Nav,
    Button,
    Label,
    Input,
    Span,
    Other(String),
}

impl Tag {
    /// Upper-case tag name, as reported by `Element.tagName`.
    pub fn name(&self) -> &str {
        match self {
            Self::Body => "BODY",
            Self::Div => "DIV",
            Self::Nav => "NAV",
            Self::Button => "BUTTON",
            Self::Label => "LABEL",
            Self::Input => "INPUT",
            Self::Span => "SPAN",
            Self::Other(name) => name,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Div | Self::Nav | Self::Other(_) => "el",
            Self::Button => "button",
            Self::Label => "label",
            Self::Input => "input",
            Self::Span => "span",
        }
    }

    /// Whether elements with this tag take keyboard focus by default.
    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Button | Self::Input)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computed `display` value. Hosts update it as media queries change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Markup
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    /// `data-*` attributes, keyed by their camel-cased dataset name.
    pub data: HashMap<String, String>,
    /// Inline style properties.
    pub style: BTreeMap<String, String>,

    // Content
    pub content: Content,

    // Layout, as measured by the host
    pub rect: Rect,
    pub display: Display,
    pub scroll_top: f64,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.prefix()),
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            data: HashMap::new(),
            style: BTreeMap::new(),
            content: Content::None,
            rect: Rect::default(),
            display: Display::Block,
            scroll_top: 0.0,
        }
    }

    pub fn body() -> Self {
        Self::new(Tag::Body).id("body")
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn nav() -> Self {
        Self::new(Tag::Nav)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button).display(Display::Inline)
    }

    pub fn label() -> Self {
        Self::new(Tag::Label).display(Display::Inline)
    }

    /// A checkbox `<input>`.
    pub fn checkbox() -> Self {
        Self::new(Tag::Input)
            .attr("type", "checkbox")
            .display(Display::Inline)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span).display(Display::Inline)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::span()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add every whitespace-separated class in `list`.
    pub fn classes(mut self, list: &str) -> Self {
        for class in list.split_whitespace() {
            self = self.class(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn style_prop(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    // Layout
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the top offset of the bounding rect.
    pub fn top(mut self, top: f64) -> Self {
        self.rect.y = top;
        self
    }

    /// Set the rendered (offset) height.
    pub fn height(mut self, height: f64) -> Self {
        self.rect.height = height;
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.content.children_mut().push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.content.children_mut().extend(new_children);
        self
    }

    // Queries
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attrs.get(name)
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn is_displayed(&self) -> bool {
        self.display != Display::None
    }

    pub fn inner_text(&self) -> String {
        self.content.text()
    }
}
