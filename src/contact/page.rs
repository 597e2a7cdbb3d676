use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::controller::{FormSubmissionController, FormView};
use super::state::{FeedbackMessage, FEEDBACK_CLASS};
use super::transport::GlooTransport;
use super::validation::{email_hint, FormInput};
use crate::config::ContactConfig;
use crate::dom::{by_id, listen, EventListener};

/// The message box may be either an `<input>` or a `<textarea>`.
enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    fn locate(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Some(TextField::TextArea(area)),
            Err(element) => element.dyn_into::<HtmlInputElement>().ok().map(TextField::Input),
        }
    }

    fn value(&self) -> String {
        match self {
            TextField::Input(input) => input.value(),
            TextField::TextArea(area) => area.value(),
        }
    }

    fn clear(&self) {
        match self {
            TextField::Input(input) => input.set_value(""),
            TextField::TextArea(area) => area.set_value(""),
        }
    }
}

/// Element handles for the contact form, looked up once at mount.
pub struct DomContactForm {
    form: HtmlFormElement,
    name: TextField,
    email: HtmlInputElement,
    message: TextField,
    submit: HtmlButtonElement,
    feedback: HtmlElement,
}

impl DomContactForm {
    pub fn locate(document: &Document, config: &ContactConfig) -> Option<Self> {
        let form = by_id::<HtmlFormElement>(document, &config.form_id)?;
        let feedback = by_id::<HtmlElement>(document, &config.feedback_id)?;
        let submit = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())?;

        Some(Self {
            name: TextField::locate(document, &config.name_id)?,
            email: by_id::<HtmlInputElement>(document, &config.email_id)?,
            message: TextField::locate(document, &config.message_id)?,
            form,
            submit,
            feedback,
        })
    }
}

impl FormView for DomContactForm {
    fn read_input(&self) -> FormInput {
        FormInput::new(self.name.value(), self.email.value(), self.message.value())
    }

    fn endpoint(&self) -> String {
        self.form.action()
    }

    fn clear_fields(&self) {
        self.name.clear();
        self.email.set_value("");
        self.message.clear();
    }

    fn reset_feedback(&self) {
        self.feedback.set_class_name(FEEDBACK_CLASS);
        self.feedback.set_text_content(Some(""));
    }

    fn show_feedback(&self, feedback: &FeedbackMessage) {
        self.feedback.set_class_name(feedback.kind.class_name());
        self.feedback.set_text_content(Some(&feedback.text));
        if let Err(err) = self.feedback.set_attribute("role", feedback.kind.aria_role()) {
            warn!("Failed to set feedback role: {:?}", err);
        }
    }

    fn begin_pending(&self, label: &str) -> String {
        let original = self.submit.text_content().unwrap_or_default();
        self.submit.set_disabled(true);
        self.submit.set_text_content(Some(label));
        original
    }

    fn end_pending(&self, original_label: &str) {
        self.submit.set_disabled(false);
        self.submit.set_text_content(Some(original_label));
    }

    fn reveal_feedback(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.feedback.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

type PageController = FormSubmissionController<DomContactForm, GlooTransport>;

/// The mounted contact form. Listeners stay registered while this lives.
pub struct ContactForm {
    _listeners: Vec<EventListener>,
}

impl ContactForm {
    pub fn mount(document: &Document, config: ContactConfig) -> Option<Self> {
        let Some(view) = DomContactForm::locate(document, &config) else {
            debug!("No contact form on this page");
            return None;
        };
        let form = view.form.clone();
        let email = view.email.clone();
        let controller: Rc<PageController> =
            Rc::new(FormSubmissionController::new(view, GlooTransport, config));

        let mut listeners = Vec::new();

        listeners.extend(listen(&form, "submit", move |event| {
            event.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.handle_submit().await;
                debug!("Contact form attempt finished: {:?}", outcome);
            });
        }));

        let email_field = email.clone();
        listeners.extend(listen(&email, "blur", move |_| {
            let hint = email_hint(&email_field.value()).map(|err| err.to_string());
            email_field.set_custom_validity(hint.as_deref().unwrap_or(""));
        }));

        Some(Self { _listeners: listeners })
    }
}
