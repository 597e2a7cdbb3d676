use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::dom::{observer_options, query_all, VisibilityObserver};

const CARD_SELECTOR: &str = ".feature-card";
const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Staggered fade-in transition for the card at `index`.
pub fn stagger_transition(index: usize) -> String {
    let delay = index as f64 / 10.0;
    format!("opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s")
}

fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in styles {
        if let Err(err) = style.set_property(property, value) {
            warn!("Failed to set {}: {:?}", property, err);
        }
    }
}

/// Fades feature cards in as they scroll into view.
pub struct FadeInCards {
    _observer: VisibilityObserver,
}

impl FadeInCards {
    pub fn mount(document: &Document) -> Option<Self> {
        let cards = query_all::<HtmlElement>(document, CARD_SELECTOR);
        if cards.is_empty() {
            return None;
        }

        let observer = VisibilityObserver::new(
            &observer_options(Some(0.1), "0px 0px -50px 0px"),
            |entry, _| {
                if !entry.is_intersecting() {
                    return;
                }
                if let Ok(card) = entry.target().dyn_into::<HtmlElement>() {
                    set_styles(&card, &[("opacity", "1"), ("transform", "translateY(0)")]);
                }
            },
        )
        .map_err(|err| warn!("Fade-in observer unavailable: {:?}", err))
        .ok()?;

        for (index, card) in cards.iter().enumerate() {
            let transition = stagger_transition(index);
            set_styles(
                card,
                &[
                    ("opacity", "0"),
                    ("transform", "translateY(20px)"),
                    ("transition", transition.as_str()),
                ],
            );
            observer.observe(card);
        }
        debug!("Fade-in attached to {} cards", cards.len());
        Some(Self { _observer: observer })
    }
}

/// Swaps `data-src` into `src` once an image is about to be seen.
pub struct LazyImages {
    _observer: VisibilityObserver,
}

impl LazyImages {
    pub fn mount(document: &Document) -> Option<Self> {
        let images = query_all::<HtmlImageElement>(document, LAZY_IMAGE_SELECTOR);
        if images.is_empty() {
            return None;
        }

        let observer = VisibilityObserver::new(&observer_options(None, "0px"), |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() else {
                return;
            };
            if let Some(source) = image.get_attribute("data-src") {
                image.set_src(&source);
                let _ = image.remove_attribute("data-src");
                observer.unobserve(&image);
            }
        })
        .map_err(|err| warn!("Lazy image observer unavailable: {:?}", err))
        .ok()?;

        for image in &images {
            observer.observe(image);
        }
        debug!("Lazy loading {} images", images.len());
        Some(Self { _observer: observer })
    }
}
