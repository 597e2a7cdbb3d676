use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::HEADER_SHADOW_THRESHOLD_PX;
use crate::dom::{listen, query, query_all, EventListener};

const RESTING_SHADOW: &str = "0 2px 4px rgba(0, 0, 0, 0.1)";
const SCROLLED_SHADOW: &str = "0 4px 8px rgba(0, 0, 0, 0.15)";

/// Id targeted by a same-page link, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `target_top` just below the fixed header.
pub fn scroll_offset(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > HEADER_SHADOW_THRESHOLD_PX {
        SCROLLED_SHADOW
    } else {
        RESTING_SHADOW
    }
}

/// Smooth scrolling for every `a[href^="#"]` on the page.
pub struct AnchorLinks {
    _listeners: Vec<EventListener>,
}

impl AnchorLinks {
    pub fn mount(window: &Window, document: &Document) -> Self {
        let listeners = query_all::<Element>(document, "a[href^=\"#\"]")
            .into_iter()
            .filter_map(|link| {
                let window = window.clone();
                let document = document.clone();
                let href_source = link.clone();
                listen(&link, "click", move |event| {
                    let Some(href) = href_source.get_attribute("href") else {
                        return;
                    };
                    let Some(target) = anchor_target(&href)
                        .and_then(|id| document.get_element_by_id(id))
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    else {
                        return;
                    };
                    event.prevent_default();

                    let header_height = query::<HtmlElement>(&document, ".header")
                        .map(|header| header.offset_height())
                        .unwrap_or(0);
                    let top = scroll_offset(f64::from(target.offset_top()), f64::from(header_height));

                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);

                    match window.history() {
                        Ok(history) => {
                            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&href)) {
                                warn!("Failed to push {} to history: {:?}", href, err);
                            }
                        }
                        Err(err) => warn!("History unavailable: {:?}", err),
                    }
                })
            })
            .collect::<Vec<_>>();

        debug!("Smooth scrolling attached to {} anchor links", listeners.len());
        Self { _listeners: listeners }
    }
}

/// Deepens the header shadow once the page is scrolled.
pub struct HeaderShadow {
    _listener: EventListener,
}

impl HeaderShadow {
    pub fn mount(window: &Window, document: &Document) -> Option<Self> {
        let header = query::<HtmlElement>(document, ".header")?;
        let scroll_window = window.clone();
        let listener = listen(window, "scroll", move |_| {
            let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
            let _ = header.style().set_property("box-shadow", header_shadow(scroll_y));
        })?;
        Some(Self { _listener: listener })
    }
}
