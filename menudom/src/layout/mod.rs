mod rect;

pub use rect::{Rect, Viewport};
