//! Generic HTTP exchange helpers
//!
//! The endpoint contract is status-only: any 2xx is success, everything else is failure.
//! Bodies are read solely so they can appear in logs and error messages.

use std::time::Duration;

use reqwest::RequestBuilder;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::types::MessageOperation;
use crate::utils::log_sanitizer::summarize_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send one request and classify the outcome
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, form body)
    /// * `operation` - operation name, used for logs and errors
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok(status_code)` - any 2xx status
    /// * `Err(ClientError::HttpStatus)` - any other status
    /// * `Err(ClientError::Timeout | ClientError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        operation: MessageOperation,
        url: &str,
    ) -> Result<u16> {
        let request_id = Uuid::new_v4();
        log::debug!("[{operation}] POST {url} (request {request_id})");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    operation: operation.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    operation: operation.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{operation}] Response Status: {status} (request {request_id})");

        if status.is_success() {
            return Ok(status.as_u16());
        }

        let body = response.text().await.unwrap_or_default();
        log::debug!(
            "[{operation}] Response Body: {} (request {request_id})",
            summarize_for_log(&body)
        );

        Err(ClientError::HttpStatus {
            operation: operation.to_string(),
            status: status.as_u16(),
            raw_message: (!body.is_empty()).then_some(body),
        })
    }

    /// Send a request, retrying transient failures
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request
    /// * `operation` - operation name
    /// * `url` - target URL (for logging)
    /// * `max_retries` - extra attempts after the first one (0 means no retries)
    ///
    /// # Retry strategy
    /// - Only [`ClientError::is_retryable`] errors are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 5 seconds)
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        operation: MessageOperation,
        url: &str,
        max_retries: u32,
    ) -> Result<u16> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, operation, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is consumed by send()
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{operation}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, operation, url).await;
            };

            match Self::execute_request(req, operation, url).await {
                Ok(status) => return Ok(status),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        operation,
                        attempt + 1,
                        max_retries + 1,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::NetworkError {
            operation: operation.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Exponential backoff: 100ms doubling per attempt, capped at 5 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(16);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(5_000))
}
