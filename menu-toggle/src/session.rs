use crate::toggle::ToggleId;

/// Document-scoped menu state: which toggle was opened last.
///
/// Starts empty on page load and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    last_open: Option<ToggleId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_open(&self) -> Option<&str> {
        self.last_open.as_deref()
    }

    pub fn is_last_open(&self, id: &str) -> bool {
        self.last_open.as_deref() == Some(id)
    }

    pub fn set_last_open(&mut self, id: Option<ToggleId>) {
        if self.last_open != id {
            log::trace!("[session] last open {:?} -> {:?}", self.last_open, id);
            self.last_open = id;
        }
    }

    pub fn clear(&mut self) {
        self.set_last_open(None);
    }
}
