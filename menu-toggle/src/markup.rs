//! Trigger markup normalisation.
//!
//! Without JavaScript a toggle is a visually hidden checkbox plus a
//! `<label>`, which works but is poor for assistive technology:
//!
//! ```html
//! <input id="burger-toggle" class="menu-toggle u-element-invisible" type="checkbox" aria-controls="burger-menu">
//! <label class="menu-toggle__button" for="burger-toggle" data-controls="burger-menu">Menu</label>
//! <div id="burger-menu" class="menu-toggle__toggleable">
//!   <div class="menu-toggle__toggleable-content-wrapper">...</div>
//! </div>
//! ```
//!
//! At init the pair is replaced by a real `<button>` with the label's
//! content and classes, taking over the checkbox's ID.

use menudom::{Dom, Tag};

use crate::error::MenuError;

/// Turn `trigger` into an operable button controlling `panel` and return the button's ID.
///
/// Labels are migrated (checkbox removed, label replaced). Buttons are kept
/// and get any missing ARIA attributes filled in.
pub fn normalize_trigger<D: Dom>(dom: &mut D, trigger: &str, panel: &str) -> Result<String, MenuError> {
    match dom.tag(trigger) {
        None => Err(MenuError::ElementNotFound(trigger.to_string())),
        Some(Tag::Button) => {
            for (name, value) in [
                ("aria-controls", panel),
                ("aria-haspopup", "true"),
                ("aria-expanded", "false"),
            ] {
                if dom.attr(trigger, name).is_none() {
                    dom.set_attr(trigger, name, value);
                }
            }
            Ok(trigger.to_string())
        }
        Some(Tag::Label) => Ok(label_to_button(dom, trigger, panel)),
        Some(tag) => Err(MenuError::UnsupportedTrigger {
            id: trigger.to_string(),
            tag: tag.name().to_string(),
        }),
    }
}

fn label_to_button<D: Dom>(dom: &mut D, label: &str, panel: &str) -> String {
    // The checkbox goes first so the button can take over its ID.
    let checkbox = dom.attr(label, "for");
    if let Some(checkbox) = &checkbox {
        dom.remove(checkbox);
    }

    let button = dom.create_element(Tag::Button, checkbox.as_deref());
    dom.move_content(label, &button);
    for class in dom.classes(label) {
        let class = class.trim();
        if !class.is_empty() {
            dom.add_class(&button, class);
        }
    }
    dom.set_attr(&button, "aria-controls", panel);
    dom.set_attr(&button, "aria-haspopup", "true");
    dom.set_attr(&button, "aria-expanded", "false");

    dom.replace_with(label, &button);
    log::debug!("[markup] replaced label {label} with button {button}");
    button
}
