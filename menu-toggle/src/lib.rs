pub mod coalesce;
pub mod config;
pub mod error;
pub mod frame;
pub mod keys;
pub mod markup;
pub mod menu;
pub mod session;
pub mod toggle;

pub use config::MenuConfig;
pub use error::MenuError;
pub use menu::{Menu, MenuToggle};

pub mod prelude {
    pub use crate::coalesce::{Coalescer, EventKind, FlushReport, FlushState};
    pub use crate::config::{ClassNames, MenuConfig, Scheduling};
    pub use crate::error::MenuError;
    pub use crate::frame::{FrameQueue, FrameScheduler, Schedule};
    pub use crate::menu::{Menu, MenuToggle};
    pub use crate::session::Session;
    pub use crate::toggle::{Hooks, InitOptions, InitOutcome, Propagation, ToggleElements};

    pub use menudom::{Document, Dom, Element, Event, Key, KeyEvent, Rect, Viewport};
}
