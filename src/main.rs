use tracing::{debug, info, warn};
use tracing_wasm::WASMLayerConfigBuilder;
use web_sys::window;

mod a11y;
mod config;
mod dom;
mod nav;
mod reveal;
mod scroll;
mod video;
mod contact {
    pub mod controller;
    pub mod error;
    pub mod page;
    pub mod state;
    pub mod transport;
    pub mod validation;
}

use a11y::SkipLink;
use config::ContactConfig;
use contact::page::ContactForm;
use nav::MobileMenu;
use reveal::{FadeInCards, LazyImages};
use scroll::{AnchorLinks, HeaderShadow};
use video::DemoVideo;

/// Every behaviour mounted on the current page. Behaviours whose elements
/// are missing are simply absent.
struct Site {
    _menu: Option<MobileMenu>,
    _anchors: AnchorLinks,
    _video: Option<DemoVideo>,
    _contact: Option<ContactForm>,
    _header: Option<HeaderShadow>,
    _cards: Option<FadeInCards>,
    _skip_link: Option<SkipLink>,
    _images: Option<LazyImages>,
}

fn mounted<T>(name: &str, behaviour: Option<T>) -> Option<T> {
    match &behaviour {
        Some(_) => debug!("Mounted {}", name),
        None => debug!("Skipped {}, not on this page", name),
    }
    behaviour
}

impl Site {
    fn mount() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;

        Some(Self {
            _menu: mounted("mobile menu", MobileMenu::mount(&window, &document)),
            _anchors: AnchorLinks::mount(&window, &document),
            _video: mounted("demo video", DemoVideo::mount(&document)),
            _contact: mounted("contact form", ContactForm::mount(&document, ContactConfig::default())),
            _header: mounted("header shadow", HeaderShadow::mount(&window, &document)),
            _cards: mounted("fade-in cards", FadeInCards::mount(&document)),
            _skip_link: mounted("skip link", SkipLink::mount(&document)),
            _images: mounted("lazy images", LazyImages::mount(&document)),
        })
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config::log_level())
            .build(),
    );

    info!("Starting site script");
    match Site::mount() {
        // Listeners must outlive `main` for as long as the page is open.
        Some(site) => std::mem::forget(site),
        None => warn!("No window or document, nothing mounted"),
    }
}
