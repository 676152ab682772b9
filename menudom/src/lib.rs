pub mod document;
pub mod dom;
pub mod element;
pub mod event;
pub mod focus;
pub mod layout;

pub use document::Document;
pub use dom::Dom;
pub use element::{Content, Display, Element, Tag};
pub use event::{Event, Key, KeyEvent, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use layout::{Rect, Viewport};
