use reqwest::StatusCode;
use screening::{ApiError, ApiResponse, AuthResponse, SubmissionResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A response body carrying the backend's `success` flag.
pub(crate) trait Envelope {
    fn succeeded(&self) -> bool;

    fn failure_reason(&self) -> Option<&str>;
}

impl Envelope for SubmissionResult {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn failure_reason(&self) -> Option<&str> {
        SubmissionResult::failure_reason(self)
    }
}

impl Envelope for AuthResponse {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn failure_reason(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

impl<T> Envelope for ApiResponse<T> {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn failure_reason(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// The fields an error body may explain itself with.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a status and body into a typed outcome.
///
/// - non-2xx: `Transport`, with the body's `error`/`message` when it has one
/// - 2xx with a body that does not parse as `T`: `Application`
/// - 2xx with `success: false`: `Application` with the backend's reason
pub(crate) fn classify<T>(status: StatusCode, body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Envelope,
{
    if !status.is_success() {
        return Err(ApiError::transport(status.as_u16(), status_message(status, body)));
    }

    let envelope: T = serde_json::from_slice(body)
        .map_err(|err| ApiError::Application(format!("malformed response body: {err}")))?;

    if !envelope.succeeded() {
        let reason = envelope
            .failure_reason()
            .filter(|reason| !reason.is_empty())
            .unwrap_or("request failed without a reason");
        return Err(ApiError::Application(reason.to_string()));
    }
    Ok(envelope)
}

fn status_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP status {}", status.as_u16()))
}
