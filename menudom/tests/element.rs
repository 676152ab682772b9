use menudom::element::{find_element, path_to, remove_element, replace_element, walk};
use menudom::{Content, Display, Element, Rect, Tag, Viewport};

fn tree() -> Element {
    Element::body().child(
        Element::nav()
            .id("nav")
            .child(Element::button().id("a").child(Element::text("One")))
            .child(Element::div().id("b").child(Element::text("Two").id("b-text"))),
    )
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_defaults() {
    let button = Element::button();
    assert_eq!(button.tag, Tag::Button);
    assert_eq!(button.display, Display::Inline);
    assert!(button.id.starts_with("button-"));
    assert_eq!(button.content, Content::None);

    let checkbox = Element::checkbox();
    assert_eq!(checkbox.tag, Tag::Input);
    assert_eq!(checkbox.get_attr("type").map(String::as_str), Some("checkbox"));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_classes_split_and_dedupe() {
    let el = Element::div().classes("  one two  one ").class("two").class("three");
    assert_eq!(el.classes, vec!["one", "two", "three"]);
}

#[test]
fn test_geometry_builders() {
    let el = Element::div().top(50.0).height(300.0);
    assert_eq!(el.rect.top(), 50.0);
    assert_eq!(el.rect.height, 300.0);
    assert_eq!(Element::div().hidden().display, Display::None);
}

#[test]
fn test_inner_text_concatenates_children() {
    assert_eq!(tree().inner_text(), "OneTwo");
}

#[test]
fn test_tag_names() {
    assert_eq!(Tag::Label.name(), "LABEL");
    assert_eq!(Tag::Other("a".into()).to_string(), "a");
    assert!(Tag::Input.is_focusable());
    assert!(!Tag::Div.is_focusable());
}

// ============================================================================
// Tree helpers
// ============================================================================

#[test]
fn test_path_to() {
    let root = tree();
    assert_eq!(
        path_to(&root, "b-text"),
        Some(vec![
            "body".to_string(),
            "nav".to_string(),
            "b".to_string(),
            "b-text".to_string()
        ])
    );
    assert_eq!(path_to(&root, "body"), Some(vec!["body".to_string()]));
    assert_eq!(path_to(&root, "missing"), None);
}

#[test]
fn test_walk_is_pre_order() {
    let root = tree();
    let mut ids = Vec::new();
    walk(&root, &mut |el: &Element| ids.push(el.id.clone()));
    assert_eq!(ids.len(), 6);
    assert_eq!(&ids[..3], &["body", "nav", "a"]);
    assert_eq!(ids[4], "b");
}

#[test]
fn test_remove_element() {
    let mut root = tree();
    let removed = remove_element(&mut root, "b").unwrap();
    assert_eq!(removed.inner_text(), "Two");
    assert!(find_element(&root, "b-text").is_none());
    assert!(remove_element(&mut root, "body").is_none());
}

#[test]
fn test_replace_element() {
    let mut root = tree();
    let old = replace_element(&mut root, "a", Element::span().id("a2")).unwrap();
    assert_eq!(old.id, "a");
    assert!(find_element(&root, "a2").is_some());

    let missing = replace_element(&mut root, "zzz", Element::span().id("back"));
    assert_eq!(missing.unwrap_err().id, "back");
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_rect_edges() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(rect.left(), 10.0);
    assert_eq!(rect.right(), 110.0);
    assert_eq!(rect.bottom(), 70.0);
    assert!(rect.contains(10.0, 20.0));
    assert!(!rect.contains(110.0, 20.0));
    assert_eq!(rect.with_height(5.0).bottom(), 25.0);
    assert!(Rect::from_size(0.0, 10.0).is_empty());
}

#[test]
fn test_default_viewport() {
    assert_eq!(Viewport::default(), Viewport::new(1280.0, 800.0));
}
