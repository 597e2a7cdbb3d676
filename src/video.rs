use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlMediaElement, HtmlVideoElement, KeyboardEvent};

use crate::dom::{by_id, listen, observer_options, EventListener, VisibilityObserver};

const VIDEO_ID: &str = "demo-video";
const ERROR_CLASS: &str = "video-error";
const ERROR_STYLE: &str = "color: #ff6b6b; margin-top: 1rem; text-align: center; padding: 1rem; background: rgba(255, 107, 107, 0.1); border-radius: 4px;";

/// `HTMLMediaElement.HAVE_NOTHING`: no data loaded yet.
const HAVE_NOTHING: u16 = 0;

/// `MediaError.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    Aborted,
    Network,
    Decode,
    SourceNotSupported,
    Unknown,
}

impl MediaErrorKind {
    pub fn from_code(code: Option<u16>) -> Self {
        match code {
            Some(1) => MediaErrorKind::Aborted,
            Some(2) => MediaErrorKind::Network,
            Some(3) => MediaErrorKind::Decode,
            Some(4) => MediaErrorKind::SourceNotSupported,
            _ => MediaErrorKind::Unknown,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MediaErrorKind::Aborted => "Video playback was aborted.",
            MediaErrorKind::Network => "Network error while loading video.",
            MediaErrorKind::Decode => "Video file is corrupted or in an unsupported format.",
            MediaErrorKind::SourceNotSupported => "Video format is not supported or the file is missing.",
            MediaErrorKind::Unknown => "Video is currently unavailable.",
        }
    }
}

pub fn error_notice(code: Option<u16>) -> String {
    format!(
        "{} Please check back later or contact support.",
        MediaErrorKind::from_code(code).description()
    )
}

pub fn is_playback_key(key: &str) -> bool {
    key == " " || key == "Enter"
}

fn load_if_empty(video: &HtmlMediaElement) {
    if video.ready_state() == HAVE_NOTHING {
        video.load();
    }
}

fn play(video: &HtmlMediaElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                debug!("Video play was refused: {:?}", err);
            }
        }),
        Err(err) => debug!("Video play failed: {:?}", err),
    }
}

/// The demo video: lazy loading, error notice, fullscreen and keyboard control.
pub struct DemoVideo {
    _listeners: Vec<EventListener>,
    _observer: Option<VisibilityObserver>,
}

impl DemoVideo {
    pub fn mount(document: &Document) -> Option<Self> {
        let video = Rc::new(by_id::<HtmlVideoElement>(document, VIDEO_ID)?);
        load_if_empty(&video);

        let mut listeners = Vec::new();

        let on_error = video.clone();
        let error_document = document.clone();
        listeners.extend(listen(&video, "error", move |_| {
            let code = on_error.error().map(|err| err.code());
            warn!("Demo video failed with code {:?}", code);
            let Some(wrapper) = on_error.closest(".video-wrapper").ok().flatten() else {
                return;
            };
            match error_document.create_element("p") {
                Ok(notice) => {
                    notice.set_class_name(ERROR_CLASS);
                    let _ = notice.set_attribute("style", ERROR_STYLE);
                    notice.set_text_content(Some(&error_notice(code)));
                    let _ = wrapper.append_child(&notice);
                }
                Err(err) => warn!("Failed to create video error notice: {:?}", err),
            }
        }));

        let on_click = video.clone();
        listeners.extend(listen(&video, "click", move |_| load_if_empty(&on_click)));

        let play_document = document.clone();
        listeners.extend(listen(&video, "play", move |_| {
            if let Ok(Some(notice)) = play_document.query_selector(&format!(".{}", ERROR_CLASS)) {
                notice.remove();
            }
        }));

        let on_dblclick = video.clone();
        listeners.extend(listen(&video, "dblclick", move |_| {
            let _ = on_dblclick.request_fullscreen();
        }));

        let on_key = video.clone();
        listeners.extend(listen(&video, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if !is_playback_key(&key_event.key()) {
                return;
            }
            event.prevent_default();
            if on_key.paused() {
                play(&on_key);
            } else {
                let _ = on_key.pause();
            }
        }));

        let on_visibility = video.clone();
        let observer = VisibilityObserver::new(&observer_options(None, "50px"), move |entry, _| {
            if entry.is_intersecting() {
                load_if_empty(&on_visibility);
            } else if !on_visibility.paused() {
                let _ = on_visibility.pause();
            }
        });
        let observer = match observer {
            Ok(observer) => {
                observer.observe(&video);
                Some(observer)
            }
            Err(err) => {
                warn!("Video visibility observer unavailable: {:?}", err);
                None
            }
        };

        let _ = video.set_attribute("tabindex", "0");
        Some(Self {
            _listeners: listeners,
            _observer: observer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_error_codes_map_to_notices() {
        assert_eq!(MediaErrorKind::from_code(Some(1)), MediaErrorKind::Aborted);
        assert_eq!(MediaErrorKind::from_code(Some(4)), MediaErrorKind::SourceNotSupported);
        assert_eq!(MediaErrorKind::from_code(Some(9)), MediaErrorKind::Unknown);
        assert_eq!(MediaErrorKind::from_code(None), MediaErrorKind::Unknown);
        assert_eq!(
            error_notice(Some(2)),
            "Network error while loading video. Please check back later or contact support."
        );
        assert_eq!(
            error_notice(None),
            "Video is currently unavailable. Please check back later or contact support."
        );
    }

    #[test]
    fn space_and_enter_toggle_playback() {
        assert!(is_playback_key(" "));
        assert!(is_playback_key("Enter"));
        assert!(!is_playback_key("k"));
        assert!(!is_playback_key("Spacebar"));
    }
}
