//! Error types.

use std::any::Any;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while wiring up a toggle or loading configuration.
///
/// Runtime operations (open, shut, back out) never fail: a missing toggle or
/// an already-closed panel is a no-op, not an error.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("element '{0}' not found")]
    ElementNotFound(String),

    #[error("trigger '{trigger}' does not reference a panel")]
    MissingControls { trigger: String },

    #[error("panel '{panel}' controlled by trigger '{trigger}' not found")]
    PanelNotFound { trigger: String, panel: String },

    #[error("element '{id}' is a {tag}, expected a BUTTON or LABEL trigger")]
    UnsupportedTrigger { id: String, tag: String },

    #[error("invalid menu config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extract a human-readable message from a panic payload.
///
/// Panics can carry either `&str` or `String` payloads; anything else falls
/// back to a generic message.
pub fn extract_panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
