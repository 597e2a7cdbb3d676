use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::dom::{listen, query, query_all, EventListener};

/// Inline styles for the three hamburger bars, as `(property, value)`.
/// Open turns the icon into a cross.
pub fn icon_bar_styles(expanded: bool) -> [(&'static str, &'static str); 3] {
    if expanded {
        [
            ("transform", "rotate(45deg) translate(5px, 5px)"),
            ("opacity", "0"),
            ("transform", "rotate(-45deg) translate(7px, -6px)"),
        ]
    } else {
        [("transform", "none"), ("opacity", "1"), ("transform", "none")]
    }
}

pub fn is_mobile_viewport(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

pub fn should_close_on_outside_click(width: f64, click_inside: bool, menu_open: bool) -> bool {
    is_mobile_viewport(width) && !click_inside && menu_open
}

struct MenuElements {
    toggle: HtmlElement,
    menu: Element,
    bars: Vec<HtmlElement>,
}

impl MenuElements {
    fn is_expanded(&self) -> bool {
        self.toggle.get_attribute("aria-expanded").as_deref() == Some("true")
    }

    fn toggle(&self) {
        let expanded = !self.is_expanded();
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        let _ = self.menu.class_list().toggle("active");

        for (bar, (property, value)) in self.bars.iter().zip(icon_bar_styles(expanded)) {
            let _ = bar.style().set_property(property, value);
        }
        debug!("Mobile menu {}", if expanded { "opened" } else { "closed" });
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        self.menu.contains(node) || self.toggle.contains(node)
    }
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}

/// Hamburger toggle for the collapsed navigation.
pub struct MobileMenu {
    _listeners: Vec<EventListener>,
}

impl MobileMenu {
    pub fn mount(window: &Window, document: &Document) -> Option<Self> {
        let toggle = query::<HtmlElement>(document, ".mobile-menu-toggle")?;
        let menu = query::<Element>(document, ".nav-menu")?;
        let bars = query_all::<HtmlElement>(&*toggle, ".icon-bar");
        let elements = Rc::new(MenuElements { toggle, menu, bars });
        let mut listeners = Vec::new();

        let on_toggle = elements.clone();
        listeners.extend(listen(&elements.toggle, "click", move |_| on_toggle.toggle()));

        for link in query_all::<Element>(&elements.menu, "a") {
            let on_link = elements.clone();
            let window = window.clone();
            listeners.extend(listen(&link, "click", move |_| {
                if is_mobile_viewport(viewport_width(&window)) {
                    on_link.toggle();
                }
            }));
        }

        let on_outside = elements.clone();
        let outside_window = window.clone();
        listeners.extend(listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = on_outside.contains(target.as_ref());
            let open = on_outside.menu.class_list().contains("active");
            if should_close_on_outside_click(viewport_width(&outside_window), inside, open) {
                on_outside.toggle();
            }
        }));

        Some(Self { _listeners: listeners })
    }
}
