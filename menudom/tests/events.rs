use menudom::{collect_focusable, Document, Dom, Element, Event, FocusState, Key, Modifiers};

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    // Focus an element
    assert!(focus.focus("button1"));
    assert_eq!(focus.focused(), Some("button1"));

    // Focus same element - no change
    assert!(!focus.focus("button1"));

    // Focus different element
    assert!(focus.focus("button2"));
    assert_eq!(focus.focused(), Some("button2"));

    // Blur
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);

    // Blur when nothing focused
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_skips_hidden_subtrees() {
    let root = Element::body()
        .child(Element::button().id("first"))
        .child(
            Element::div()
                .id("collapsed")
                .hidden()
                .child(Element::button().id("hidden")),
        )
        .child(Element::button().id("last"));

    assert_eq!(collect_focusable(&root), vec!["first", "last"]);

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("first".to_string()));
    assert_eq!(focus.focus_next(&root), Some("last".to_string()));
    // Wrap around
    assert_eq!(focus.focus_next(&root), Some("first".to_string()));
}

#[test]
fn test_focus_prev_navigation() {
    let root = Element::body()
        .child(Element::button().id("a"))
        .child(Element::button().id("b"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("a".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
}

#[test]
fn test_focus_no_focusable_elements() {
    let root = Element::body().child(Element::text("Not focusable"));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focus_prev(&root), None);
}

#[test]
fn test_document_tab_navigation() {
    let body = Element::body()
        .child(Element::button().id("one"))
        .child(Element::button().id("two"));
    let mut doc = Document::new(body);

    assert_eq!(doc.active_element(), None);
    assert_eq!(doc.focus_next(), Some("one".to_string()));
    assert_eq!(doc.active_element(), Some("one".to_string()));
    assert_eq!(doc.focus_prev(), Some("two".to_string()));
    assert!(doc.blur());
    assert_eq!(doc.active_element(), None);
}

#[test]
fn test_focus_ignores_detached_elements() {
    let mut doc = Document::new(Element::body());
    let id = doc.create_element(menudom::Tag::Button, None);
    doc.focus(&id);
    assert_eq!(doc.active_element(), None);
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_from_legacy_codes() {
    assert_eq!(Key::from_code(13), Some(Key::Enter));
    assert_eq!(Key::from_code(27), Some(Key::Escape));
    assert_eq!(Key::from_code(32), Some(Key::Space));
    assert_eq!(Key::from_code(37), Some(Key::Left));
    assert_eq!(Key::from_code(38), Some(Key::Up));
    assert_eq!(Key::from_code(39), Some(Key::Right));
    assert_eq!(Key::from_code(40), Some(Key::Down));
    assert_eq!(Key::from_code(65), Some(Key::Char('a')));
    assert_eq!(Key::from_code(113), Some(Key::F(2)));
    assert_eq!(Key::from_code(500), None);
}

#[test]
fn test_key_from_names() {
    assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
    assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
    assert_eq!(Key::from_name(" "), Some(Key::Space));
    assert_eq!(Key::from_name("F5"), Some(Key::F(5)));
    assert_eq!(Key::from_name("q"), Some(Key::Char('q')));
    assert_eq!(Key::from_name("Unidentified"), None);
}

#[test]
fn test_activation_keys() {
    assert!(Key::Enter.is_activation());
    assert!(Key::Space.is_activation());
    assert!(Key::Char(' ').is_activation());
    assert!(!Key::Escape.is_activation());
}

#[test]
fn test_event_constructors() {
    assert_eq!(
        Event::key("btn", Key::Enter),
        Event::Key {
            target: Some("btn".to_string()),
            key: Key::Enter,
            modifiers: Modifiers::new(),
        }
    );
    assert_eq!(
        Event::click("btn"),
        Event::Click {
            target: Some("btn".to_string())
        }
    );
    assert!(Modifiers::ctrl().ctrl);
    assert!(Modifiers::new().none());
}
