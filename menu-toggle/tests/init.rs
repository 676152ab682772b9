use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use menu_toggle::prelude::*;
use menudom::{Display, Tag};

const MANAGED: &str = "js-menu-toggle__toggleable";

/// Progressive-enhancement markup: a hidden checkbox plus a label.
fn checkbox_markup() -> Document {
    let body = Element::body().child(
        Element::div()
            .id("page")
            .class("body-inner")
            .child(
                Element::checkbox()
                    .id("burger-toggle")
                    .classes("menu-toggle u-element-invisible")
                    .attr("aria-controls", "burger-menu"),
            )
            .child(
                Element::label()
                    .id("burger-label")
                    .classes(" menu-toggle__button   site-burger ")
                    .attr("for", "burger-toggle")
                    .data("controls", "burger-menu")
                    .child(Element::text("Menu"))
                    .child(
                        Element::text("Toggle menu visibility")
                            .class("menu-toggle-assistive-text"),
                    ),
            )
            .child(
                Element::div()
                    .id("burger-menu")
                    .class("menu-toggle__toggleable")
                    .child(
                        Element::div()
                            .class("menu-toggle__toggleable-content-wrapper")
                            .height(200.0),
                    ),
            ),
    );
    Document::new(body)
}

fn button_markup(trigger: Element, panel: Element) -> Document {
    Document::new(Element::body().child(trigger).child(panel))
}

// ============================================================================
// Markup normalisation
// ============================================================================

#[test]
fn test_label_becomes_button() {
    let mut menu = Menu::new(checkbox_markup());
    let outcome = menu.init("burger-label", InitOptions::new()).unwrap();
    assert_eq!(outcome, InitOutcome::Initialized("burger-menu".to_string()));

    let dom = menu.dom();
    assert!(!dom.exists("burger-label"));
    assert_eq!(dom.tag("burger-toggle"), Some(Tag::Button));
    assert_eq!(
        dom.classes("burger-toggle"),
        vec!["menu-toggle__button", "site-burger", "js-menu-toggle-button"]
    );
    assert_eq!(dom.attr("burger-toggle", "aria-controls").as_deref(), Some("burger-menu"));
    assert_eq!(dom.attr("burger-toggle", "aria-haspopup").as_deref(), Some("true"));
    assert_eq!(dom.attr("burger-toggle", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(dom.parent("burger-toggle").as_deref(), Some("page"));

    let button = dom.get("burger-toggle").unwrap();
    assert_eq!(button.inner_text(), "MenuToggle menu visibility");

    assert_eq!(menu.toggle("burger-menu").unwrap().trigger, "burger-toggle");
}

#[test]
fn test_checkbox_is_removed() {
    let mut menu = Menu::new(checkbox_markup());
    menu.init("burger-label", InitOptions::new()).unwrap();

    assert_eq!(menu.dom().find_by_attr("type", "checkbox"), None);
    assert_eq!(menu.dom().find_by_class("u-element-invisible"), None);
}

#[test]
fn test_button_trigger_gets_missing_aria() {
    let doc = button_markup(
        Element::button()
            .id("trigger")
            .attr("aria-expanded", "false")
            .attr("aria-haspopup", "menu")
            .data("controls", "panel"),
        Element::div().id("panel").class("menu-toggle__toggleable"),
    );
    let mut menu = Menu::new(doc);
    menu.init("trigger", InitOptions::new()).unwrap();

    let dom = menu.dom();
    assert_eq!(dom.attr("trigger", "aria-controls").as_deref(), Some("panel"));
    assert_eq!(dom.attr("trigger", "aria-haspopup").as_deref(), Some("menu"));
    assert!(dom.has_class("trigger", "js-menu-toggle-button"));
}

#[test]
fn test_aria_controls_used_without_data_controls() {
    let doc = button_markup(
        Element::button().id("trigger").attr("aria-controls", "panel"),
        Element::div().id("panel").class("menu-toggle__toggleable"),
    );
    let mut menu = Menu::new(doc);

    let outcome = menu.init("trigger", InitOptions::new()).unwrap();
    assert_eq!(outcome, InitOutcome::Initialized("panel".to_string()));
}

// ============================================================================
// Re-init and errors
// ============================================================================

#[test]
fn test_reinit_is_ignored() {
    let mut menu = Menu::new(checkbox_markup());
    menu.init("burger-label", InitOptions::new()).unwrap();
    let before = menu.dom().root().clone();

    let outcome = menu.init("burger-toggle", InitOptions::new()).unwrap();
    assert_eq!(outcome, InitOutcome::AlreadyInitialized);
    assert_eq!(menu.dom().root(), &before);
    assert_eq!(menu.resize_events().len(), 1);
}

#[test]
fn test_init_all_twice_registers_once() {
    let mut menu = Menu::new(checkbox_markup());
    assert_eq!(menu.init_all(), vec!["burger-menu".to_string()]);
    assert!(menu.init_all().is_empty());
    assert_eq!(menu.toggle_ids(), vec!["burger-menu".to_string()]);
}

#[test]
fn test_second_trigger_for_same_panel_is_ignored() {
    let panel = Element::div().id("panel").class("menu-toggle__toggleable");
    let body = Element::body()
        .child(Element::button().id("a").attr("aria-controls", "panel"))
        .child(Element::button().id("b").attr("aria-controls", "panel"))
        .child(panel);
    let mut menu = Menu::new(Document::new(body));

    menu.init("a", InitOptions::new()).unwrap();
    let outcome = menu.init("b", InitOptions::new()).unwrap();
    assert_eq!(outcome, InitOutcome::AlreadyInitialized);
    assert_eq!(menu.resize_events().len(), 1);
    assert_eq!(menu.toggle("panel").unwrap().trigger, "a");

    menu.handle_event(&Event::click("a"));
    assert!(menu.is_open("panel"));
    assert_eq!(menu.dom().attr("a", "aria-expanded").as_deref(), Some("true"));
    assert_eq!(menu.dom().attr("b", "aria-expanded"), None);
}

#[test]
fn test_missing_trigger_error() {
    let mut menu = Menu::new(checkbox_markup());
    let err = menu.init("nope", InitOptions::new()).unwrap_err();
    assert!(matches!(err, MenuError::ElementNotFound(ref id) if id == "nope"));
}

#[test]
fn test_missing_controls_error() {
    let doc = button_markup(
        Element::button().id("trigger"),
        Element::div().id("panel").class("menu-toggle__toggleable"),
    );
    let mut menu = Menu::new(doc);
    let err = menu.init("trigger", InitOptions::new()).unwrap_err();
    assert!(matches!(err, MenuError::MissingControls { .. }));
    assert!(!menu.dom().has_class("trigger", "js-menu-toggle-button"));
}

#[test]
fn test_panel_not_found_error() {
    let doc = button_markup(
        Element::button().id("trigger").data("controls", "ghost"),
        Element::div().id("panel"),
    );
    let mut menu = Menu::new(doc);
    let err = menu.init("trigger", InitOptions::new()).unwrap_err();
    assert!(matches!(err, MenuError::PanelNotFound { ref panel, .. } if panel == "ghost"));
}

#[test]
fn test_unsupported_trigger_error() {
    let doc = button_markup(
        Element::div().id("trigger").data("controls", "panel"),
        Element::div().id("panel"),
    );
    let mut menu = Menu::new(doc);
    let err = menu.init("trigger", InitOptions::new()).unwrap_err();
    assert!(matches!(err, MenuError::UnsupportedTrigger { ref tag, .. } if tag == "DIV"));
}

#[test]
fn test_init_all_skips_broken_triggers() {
    let body = Element::body()
        .child(Element::button().id("broken").class("menu-toggle__button"))
        .child(
            Element::button()
                .id("good")
                .class("menu-toggle__button")
                .data("controls", "panel"),
        )
        .child(Element::div().id("panel").class("menu-toggle__toggleable"));
    let mut menu = Menu::new(Document::new(body));

    assert_eq!(menu.init_all(), vec!["panel".to_string()]);
}

// ============================================================================
// Nesting and visibility
// ============================================================================

#[test]
fn test_parent_recorded_from_ancestry() {
    let body = Element::body()
        .child(
            Element::button()
                .id("outer-trigger")
                .class("menu-toggle__button")
                .data("controls", "outer"),
        )
        .child(
            Element::div()
                .id("outer")
                .class("menu-toggle__toggleable")
                .child(
                    Element::div().child(
                        Element::button()
                            .id("inner-trigger")
                            .class("menu-toggle__button")
                            .data("controls", "inner"),
                    ),
                )
                .child(Element::div().id("inner").class("menu-toggle__toggleable")),
        );
    let mut menu = Menu::new(Document::new(body));
    menu.init_all();

    assert_eq!(menu.toggle("inner").unwrap().parent.as_deref(), Some("outer"));
    assert_eq!(menu.toggle("outer").unwrap().parent, None);
    assert_eq!(menu.dom().data("inner", "parentMenuToggle").as_deref(), Some("outer"));
    assert_eq!(menu.dom().data("outer", "parentMenuToggle"), None);
    assert_eq!(menu.ancestor_panels("inner"), vec!["outer".to_string()]);
}

#[test]
fn test_hidden_trigger_leaves_panel_unmanaged() {
    let doc = button_markup(
        Element::button()
            .id("trigger")
            .data("controls", "panel")
            .hidden(),
        Element::div().id("panel").class("menu-toggle__toggleable"),
    );
    let mut menu = Menu::new(doc);
    menu.init("trigger", InitOptions::new()).unwrap();

    assert!(!menu.dom().has_class("panel", MANAGED));
    assert!(!menu.is_visible("panel"));
}

#[test]
fn test_resize_syncs_managed_marker() {
    let doc = button_markup(
        Element::button().id("trigger").data("controls", "panel"),
        Element::div().id("panel").class("menu-toggle__toggleable"),
    );
    let mut menu = Menu::new(doc);
    menu.init("trigger", InitOptions::new()).unwrap();
    assert!(menu.dom().has_class("panel", MANAGED));

    // Breakpoint hides the trigger.
    menu.dom_mut().set_display("trigger", Display::None);
    menu.handle_event(&Event::Resize {
        width: 1400.0,
        height: 900.0,
    });
    menu.run_frame(Duration::from_millis(16));
    assert!(!menu.dom().has_class("panel", MANAGED));

    // And shows it again.
    menu.dom_mut().set_display("trigger", Display::Inline);
    menu.handle_event(&Event::Resize {
        width: 600.0,
        height: 900.0,
    });
    menu.run_frame(Duration::from_millis(16));
    assert!(menu.dom().has_class("panel", MANAGED));
}

// ============================================================================
// Close button
// ============================================================================

fn panel_with_close() -> Document {
    button_markup(
        Element::button().id("trigger").data("controls", "panel"),
        Element::div()
            .id("panel")
            .classes("menu-toggle__toggleable menu-toggle__toggleable--with-close")
            .child(Element::div().class("menu-toggle__toggleable-content-wrapper")),
    )
}

#[test]
fn test_close_button_synthesised() {
    let mut menu = Menu::new(panel_with_close());
    menu.init("trigger", InitOptions::new()).unwrap();

    let toggle = menu.toggle("panel").unwrap();
    assert!(toggle.has_close_button());
    let close = toggle.close_button.clone().unwrap();

    let dom = menu.dom();
    assert_eq!(dom.tag(&close), Some(Tag::Button));
    assert_eq!(dom.parent(&close).as_deref(), Some("panel"));
    assert!(dom.has_class(&close, "js-menu-toggle__toggleable__close"));
    assert_eq!(dom.attr(&close, "aria-controls").as_deref(), Some("panel"));
    assert_eq!(
        dom.descendants_with_class(&close, "element-invisible").len(),
        1
    );
    assert_eq!(dom.get(&close).unwrap().inner_text(), "Close");
}

#[test]
fn test_close_button_shuts_panel() {
    let mut menu = Menu::new(panel_with_close());
    menu.init("trigger", InitOptions::new()).unwrap();
    let close = menu.toggle("panel").unwrap().close_button.clone().unwrap();

    menu.handle_event(&Event::click("trigger"));
    assert!(menu.is_open("panel"));

    menu.handle_event(&Event::click(close));
    assert!(!menu.is_open("panel"));
    assert_eq!(menu.dom().active_element().as_deref(), Some("trigger"));
}

#[test]
fn test_close_label_from_config() {
    let config = MenuConfig::from_json(r#"{ "close_label": "Sluiten" }"#).unwrap();
    let mut menu = Menu::with_config(panel_with_close(), config);
    menu.init("trigger", InitOptions::new()).unwrap();
    let close = menu.toggle("panel").unwrap().close_button.clone().unwrap();

    assert_eq!(menu.dom().get(&close).unwrap().inner_text(), "Sluiten");
}

#[test]
fn test_no_close_button_without_modifier() {
    let mut menu = Menu::new(checkbox_markup());
    menu.init_all();
    assert!(!menu.toggle("burger-menu").unwrap().has_close_button());
}

// ============================================================================
// Init hook
// ============================================================================

#[test]
fn test_init_hook_can_drive_menu() {
    let mut menu = Menu::new(checkbox_markup());
    let seen = Rc::new(RefCell::new(None));
    let record = Rc::clone(&seen);

    menu.init(
        "burger-label",
        InitOptions::new().on_init_done(move |menu: &mut Menu<Document>, el: &ToggleElements| {
            *record.borrow_mut() = Some(el.clone());
            let hooks = menu.hooks_for(&el.panel);
            menu.open(&el.panel, &hooks);
        }),
    )
    .unwrap();

    assert_eq!(
        *seen.borrow(),
        Some(ToggleElements {
            trigger: "burger-toggle".to_string(),
            panel: "burger-menu".to_string(),
            parent: None,
        })
    );
    assert!(menu.is_open("burger-menu"));
}
