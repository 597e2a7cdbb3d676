use tracing::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::DEBUG  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::INFO
}

/// Viewport width at or below which the navigation collapses into the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the header gets its stronger shadow.
pub const HEADER_SHADOW_THRESHOLD_PX: f64 = 100.0;

/// How long a skip-link target keeps its temporary `tabindex`.
pub const SKIP_LINK_TABINDEX_MS: u32 = 1_000;

/// Element ids and fixed texts used by the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    pub feedback_id: String,
    pub pending_label: String,
    pub success_text: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            name_id: "name".to_string(),
            email_id: "email".to_string(),
            message_id: "message".to_string(),
            feedback_id: "form-message".to_string(),
            pending_label: "Sending...".to_string(),
            success_text: "Thank you! Your message has been sent successfully.".to_string(),
        }
    }
}
