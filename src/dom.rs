//! Small wrappers around web-sys listener and observer plumbing.

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

/// A registered DOM event listener. Dropping it unregisters the callback.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// Registers a listener, logging instead of failing when the browser refuses.
pub fn listen<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Option<EventListener>
where
    F: FnMut(Event) + 'static,
{
    match EventListener::new(target, event_type, callback) {
        Ok(listener) => Some(listener),
        Err(err) => {
            warn!("Failed to attach {} listener: {:?}", event_type, err);
            None
        }
    }
}

/// An `IntersectionObserver` together with the closure it calls.
/// Dropping it disconnects the observer.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `on_entry` is called once per changed entry.
    pub fn new<F>(options: &IntersectionObserverInit, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observer_options(threshold: Option<f64>, root_margin: &str) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }
    options.set_root_margin(root_margin);
    options
}

/// Something that can be searched with CSS selectors.
pub trait QueryRoot {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
}

impl QueryRoot for Document {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// Every element under `root` matching `selector` that casts to `T`.
pub fn query_all<T: JsCast>(root: &impl QueryRoot, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.select_all(selector) else {
        warn!("Invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query<T: JsCast>(root: &impl QueryRoot, selector: &str) -> Option<T> {
    root.select(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn by_id<T: JsCast>(root: &Document, id: &str) -> Option<T> {
    root.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}
