//! Markup contract and scheduling options.
//!
//! Every class name the controller reads or writes lives here, so a site
//! with its own BEM prefix can load overrides from JSON:
//!
//! ```
//! use menu_toggle::MenuConfig;
//!
//! let config = MenuConfig::from_json(r#"{ "classes": { "page_wrapper": "site" } }"#).unwrap();
//! assert_eq!(config.classes.page_wrapper, "site");
//! assert_eq!(config.classes.panel, "menu-toggle__toggleable");
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::MenuError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub classes: ClassNames,
    pub scheduling: Scheduling,
    /// Dataset key on a trigger naming its panel (`data-controls`).
    pub controls_key: String,
    /// Dataset key written on a nested panel naming its parent panel.
    pub parent_key: String,
    /// Assistive text inside a synthesised close button.
    pub close_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            scheduling: Scheduling::default(),
            controls_key: "controls".to_string(),
            parent_key: "parentMenuToggle".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Triggers picked up by `Menu::init_all`.
    pub trigger: String,
    /// Added to a trigger once it has been initialised.
    pub trigger_initialized: String,
    pub trigger_active: String,
    /// Marks a toggleable panel in the markup.
    pub panel: String,
    /// Added while the panel is managed by the controller (trigger visible).
    pub panel_managed: String,
    pub panel_open: String,
    pub panel_active_child: String,
    pub panel_active_child_transitioned: String,
    pub full_height: String,
    pub full_height_on_open: String,
    pub with_close: String,
    pub content_wrapper: String,
    pub close_button: String,
    pub assistive_text: String,
    /// Page wrapper whose `min-height` keeps an open panel reachable.
    pub page_wrapper: String,
    pub body_no_scroll: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            trigger: "menu-toggle__button".to_string(),
            trigger_initialized: "js-menu-toggle-button".to_string(),
            trigger_active: "js-menu-toggle-button--active".to_string(),
            panel: "menu-toggle__toggleable".to_string(),
            panel_managed: "js-menu-toggle__toggleable".to_string(),
            panel_open: "js-menu-toggle__toggleable--open".to_string(),
            panel_active_child: "js-menu-toggle__toggleable--active-child".to_string(),
            panel_active_child_transitioned:
                "js-menu-toggle__toggleable--active-child--transitioned".to_string(),
            full_height: "menu-toggle__toggleable--full-height".to_string(),
            full_height_on_open: "menu-toggle__toggleable--full-height-on-open".to_string(),
            with_close: "menu-toggle__toggleable--with-close".to_string(),
            content_wrapper: "menu-toggle__toggleable-content-wrapper".to_string(),
            close_button: "js-menu-toggle__toggleable__close".to_string(),
            assistive_text: "element-invisible".to_string(),
            page_wrapper: "body-inner".to_string(),
            body_no_scroll: "u-body-no-scroll".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Scheduling {
    /// Whether the host has an animation-frame primitive.
    pub animation_frames: bool,
    /// Timer delay used instead of an animation frame.
    pub fallback_delay_ms: u64,
}

impl Default for Scheduling {
    fn default() -> Self {
        Self {
            animation_frames: true,
            fallback_delay_ms: 66,
        }
    }
}

impl Scheduling {
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }
}
