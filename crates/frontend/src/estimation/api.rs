use contracts::estimation::{EstimationRequest, EstimationResponse};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use thiserror::Error;

use crate::shared::api_utils::service_url;

/// How long a submission may stay in flight before it is aborted.
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Failure of a single submission cycle. Terminal: the user resubmits by
/// hand, there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The service answered with a non-success status. The body is not
    /// parsed for structured detail.
    #[error("API Error: {0}")]
    Service(u16),
    /// The service was unreachable, the request was aborted, or the body
    /// was not a valid estimation response.
    #[error("{0}")]
    Network(String),
}

impl EstimateError {
    /// Message shown inline next to the form.
    pub fn user_message(&self) -> String {
        match self {
            EstimateError::Network(cause) if cause.is_empty() => {
                "Failed to calculate. Please check if the API is running.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// POST the request to the estimation service and parse the success body.
pub async fn estimate(request: &EstimationRequest) -> Result<EstimationResponse, EstimateError> {
    // Abort signal so a hung service cannot keep the submission in flight
    // forever. Aborting after the response has settled is a no-op.
    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    if let Some(controller) = controller.clone() {
        spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            controller.abort();
        });
    }

    let response = Request::post(&service_url("/estimate"))
        .abort_signal(signal.as_ref())
        .json(request)
        .map_err(|e| EstimateError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| EstimateError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(EstimateError::Service(response.status()));
    }

    response
        .json::<EstimationResponse>()
        .await
        .map_err(|e| EstimateError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_embed_the_status_code() {
        let err = EstimateError::Service(500);
        assert_eq!(err.user_message(), "API Error: 500");
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn network_errors_without_a_cause_fall_back_to_the_generic_message() {
        assert_eq!(
            EstimateError::Network(String::new()).user_message(),
            "Failed to calculate. Please check if the API is running."
        );
        assert_eq!(
            EstimateError::Network("connection refused".to_string()).user_message(),
            "connection refused"
        );
    }
}
