//! The demo page: a mobile burger drawer with two submenus, plus a search panel.

use menudom::{Document, Element, Tag, Viewport};

fn link(id: &str, text: &str) -> Element {
    Element::new(Tag::Other("a".into()))
        .id(id)
        .child(Element::text(text))
}

fn submenu(name: &str, top: f64, links: &[&str]) -> [Element; 2] {
    let slug = name.to_lowercase();
    let trigger = Element::button()
        .id(format!("{slug}-trigger"))
        .class("menu-toggle__button")
        .data("controls", format!("{slug}-menu"))
        .child(Element::text(name));
    let panel = Element::div()
        .id(format!("{slug}-menu"))
        .class("menu-toggle__toggleable")
        .top(top)
        .child(
            Element::div()
                .class("menu-toggle__toggleable-content-wrapper")
                .height(40.0 * links.len() as f64)
                .children(
                    links
                        .iter()
                        .map(|label| link(&format!("{slug}-{}", label.to_lowercase()), label)),
                ),
        );
    [trigger, panel]
}

pub fn build() -> Document {
    let burger = [
        Element::checkbox()
            .id("burger-toggle")
            .classes("menu-toggle u-element-invisible")
            .attr("aria-controls", "burger-menu"),
        Element::label()
            .id("burger-label")
            .class("menu-toggle__button")
            .attr("for", "burger-toggle")
            .data("controls", "burger-menu")
            .child(Element::text("Menu"))
            .child(Element::text("Toggle menu visibility").class("element-invisible")),
        Element::div()
            .id("burger-menu")
            .classes(
                "menu-toggle__toggleable menu-toggle__toggleable--full-height-on-open \
                 menu-toggle__toggleable--with-close",
            )
            .top(64.0)
            .child(
                Element::div()
                    .class("menu-toggle__toggleable-content-wrapper")
                    .height(420.0)
                    .children(submenu("Products", 120.0, &["Shoes", "Bags", "Hats"]))
                    .children(submenu("Company", 300.0, &["About", "Careers"])),
            ),
    ];

    let search = [
        Element::button()
            .id("search-trigger")
            .class("menu-toggle__button")
            .attr("aria-controls", "search-panel")
            .child(Element::text("Search")),
        Element::div()
            .id("search-panel")
            .class("menu-toggle__toggleable")
            .top(64.0)
            .child(
                Element::div()
                    .class("menu-toggle__toggleable-content-wrapper")
                    .height(72.0)
                    .child(Element::new(Tag::Input).id("search-input")),
            ),
    ];

    let body = Element::body().child(
        Element::div()
            .id("page")
            .class("body-inner")
            .child(Element::nav().id("site-nav").children(burger).children(search))
            .child(Element::div().id("main").height(1200.0)),
    );
    Document::new(body).with_viewport(Viewport::new(390.0, 844.0))
}
