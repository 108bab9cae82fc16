//! Generic HTTP client tools
//!
//! Shared request processing for the gateway: sending, logging, reading and
//! classifying responses, and parsing JSON bodies.
//!
//! # design principles
//! - **One attempt per call** - failures are reported to the caller, never retried here
//! - **Unified and universal HTTP processing flow** - sending requests, logging, and reading responses
//! - **Flexible response parsing** - parsing is a separate step so `DELETE` can ignore the body

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::utils::body_preview::{preview, BodyPreview};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `resource` - path relative to the base URL (for logging and errors)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status, the body fully read
    /// * `Err(GatewayError::NetworkError)` / `Err(GatewayError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        resource: &str,
    ) -> Result<(u16, String), GatewayError> {
        log::debug!("[gateway] {method_name} {resource}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                GatewayError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[gateway] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[gateway] Response Body: {}",
            BodyPreview(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Turn a non-2xx answer into a request failure
    ///
    /// # Returns
    /// * `Ok(response_text)` - status was 2xx
    /// * `Err(GatewayError::NotFound)` - HTTP 404
    /// * `Err(GatewayError::RequestFailed)` - any other non-success status
    pub fn ensure_success(
        status_code: u16,
        response_text: String,
        resource: &str,
    ) -> Result<String, GatewayError> {
        if (200..300).contains(&status_code) {
            return Ok(response_text);
        }

        let raw_message = if response_text.trim().is_empty() {
            None
        } else {
            Some(preview(&response_text))
        };

        if status_code == 404 {
            log::warn!("[gateway] {resource} not found");
            return Err(GatewayError::NotFound {
                resource: resource.to_string(),
                raw_message,
            });
        }

        log::warn!("[gateway] {resource} failed with HTTP {status_code}");
        Err(GatewayError::RequestFailed {
            status: status_code,
            raw_message,
        })
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[gateway] JSON parse failed: {e}");
            log::error!("[gateway] Raw response: {}", BodyPreview(response_text));
            GatewayError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
