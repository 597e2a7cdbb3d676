use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::SKIP_LINK_TABINDEX_MS;
use crate::dom::{listen, query, EventListener};
use crate::scroll::anchor_target;

/// Moves keyboard focus to the skip link's target instead of only scrolling.
pub struct SkipLink {
    _listener: EventListener,
}

impl SkipLink {
    pub fn mount(document: &Document) -> Option<Self> {
        let link = query::<Element>(document, ".skip-link")?;
        let href_source = link.clone();
        let document = document.clone();

        let listener = listen(&link, "click", move |event| {
            let href = href_source.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href)
                .and_then(|id| document.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            event.prevent_default();

            // Not focusable by default; give it a temporary tab stop.
            if let Err(err) = target.set_attribute("tabindex", "-1") {
                warn!("Failed to make skip target focusable: {:?}", err);
            }
            if let Err(err) = target.focus() {
                warn!("Failed to focus skip target: {:?}", err);
            }
            Timeout::new(SKIP_LINK_TABINDEX_MS, move || {
                let _ = target.remove_attribute("tabindex");
            })
            .forget();
        })?;

        Some(Self { _listener: listener })
    }
}
