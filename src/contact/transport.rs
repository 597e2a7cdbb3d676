use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::FormData;

use super::error::SubmissionError;
use super::validation::FormInput;

/// What came back from the form endpoint. The body is only kept for
/// non-success responses, where it may explain the rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers the form to its endpoint. An `Err` means the request never
/// completed; HTTP failures come back as an `EndpointResponse`.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_form(
        &self,
        endpoint: &str,
        input: &FormInput,
    ) -> Result<EndpointResponse, SubmissionError>;
}

/// Browser `fetch` through gloo-net, sending a multipart body.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_form(
        &self,
        endpoint: &str,
        input: &FormInput,
    ) -> Result<EndpointResponse, SubmissionError> {
        let form_data = FormData::new().map_err(js_error)?;
        for (field, value) in input.fields() {
            form_data.append_with_str(field, value).map_err(js_error)?;
        }

        debug!("Posting contact form to {}", endpoint);
        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(form_data)
            .send()
            .await
            .map_err(net_error)?;

        let status = response.status();
        let body = if response.ok() {
            String::new()
        } else {
            // An unreadable body is treated like one without an error field.
            response.text().await.unwrap_or_default()
        };
        Ok(EndpointResponse { status, body })
    }
}

fn net_error(err: gloo_net::Error) -> SubmissionError {
    match err {
        gloo_net::Error::JsError(js) => SubmissionError::transport(js.message),
        other => SubmissionError::transport(other.to_string()),
    }
}

fn js_error(value: JsValue) -> SubmissionError {
    let error_message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()));
    SubmissionError::transport(thrown_message(error_message, value.as_string()))
}

/// An `Error` object's `message` wins over a thrown plain string.
fn thrown_message(error_message: Option<String>, thrown: Option<String>) -> String {
    error_message
        .filter(|message| !message.is_empty())
        .or(thrown)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_counts_as_success() {
        let response = |status| EndpointResponse { status, body: String::new() };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(302).is_success());
        assert!(!response(422).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn thrown_errors_keep_their_message() {
        assert_eq!(
            thrown_message(Some("Failed to construct 'FormData'".to_string()), None),
            "Failed to construct 'FormData'"
        );
        assert_eq!(thrown_message(Some(String::new()), Some("boom".to_string())), "boom");
        assert_eq!(thrown_message(None, Some("boom".to_string())), "boom");
        assert_eq!(
            SubmissionError::transport(thrown_message(None, None)).to_string(),
            crate::contact::error::TRANSPORT_FALLBACK
        );
    }
}
