#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable children, converting text or empty content into an empty child list.
    pub fn children_mut(&mut self) -> &mut Vec<super::Element> {
        if !matches!(self, Self::Children(_)) {
            *self = Self::Children(Vec::new());
        }
        match self {
            Self::Children(children) => children,
            _ => unreachable!("content was just converted to children"),
        }
    }

    /// Concatenated text of this content and every descendant.
    pub fn text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Text(text) => text.clone(),
            Self::Children(children) => children.iter().map(|c| c.content.text()).collect(),
        }
    }
}
