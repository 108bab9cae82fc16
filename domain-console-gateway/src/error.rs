use serde::{Deserialize, Serialize};

/// Unified error type for all gateway operations.
///
/// The remote store is treated as an opaque collaborator, so the taxonomy is
/// deliberately small: either the request never completed (transport
/// failure) or the store answered with a non-success status (request
/// failure). Everything else is a local encoding problem.
///
/// Errors are `Clone` because a single in-flight list request may be awaited
/// by several readers at once, and each of them receives the same error.
///
/// # Retries
///
/// The gateway never retries. [`is_transport`](Self::is_transport) only
/// classifies the failure for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// The request never reached the store or the response never arrived
    /// (DNS resolution failure, connection refused, reset, ...).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting for a response.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The addressed record does not exist (HTTP 404).
    NotFound {
        /// Path of the missing resource, relative to the base URL.
        resource: String,
        /// Original response body, if any.
        raw_message: Option<String>,
    },

    /// The store answered with any other non-success status.
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Original response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse a response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL cannot address the collection.
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        detail: String,
    },
}

impl GatewayError {
    /// 是否为预期行为（资源不存在、参数错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::RequestFailed { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Whether the request failed before the store produced an answer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// HTTP status reported by the store, if the request got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::NotFound {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Resource '{resource}' not found: {msg}")
                } else {
                    write!(f, "Resource '{resource}' not found")
                }
            }
            Self::RequestFailed {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Request failed with HTTP {status}: {msg}")
                } else {
                    write!(f, "Request failed with HTTP {status}")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidUrl { url, detail } => write!(f, "Invalid URL '{url}': {detail}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = GatewayError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_not_found_with_message() {
        let e = GatewayError::NotFound {
            resource: "domain/7".to_string(),
            raw_message: Some("\"Not found\"".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "Resource 'domain/7' not found: \"Not found\""
        );
    }

    #[test]
    fn display_request_failed_without_message() {
        let e = GatewayError::RequestFailed {
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Request failed with HTTP 500");
    }

    #[test]
    fn display_invalid_url() {
        let e = GatewayError::InvalidUrl {
            url: "nope".to_string(),
            detail: "relative URL without a base".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid URL 'nope': relative URL without a base"
        );
    }

    #[test]
    fn client_errors_are_expected() {
        assert!(
            GatewayError::RequestFailed {
                status: 400,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !GatewayError::RequestFailed {
                status: 503,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !GatewayError::NetworkError {
                detail: "reset".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn transport_classification() {
        assert!(GatewayError::Timeout { detail: "x".into() }.is_transport());
        assert!(GatewayError::NetworkError { detail: "x".into() }.is_transport());
        assert!(
            !GatewayError::RequestFailed {
                status: 500,
                raw_message: None,
            }
            .is_transport()
        );
    }

    #[test]
    fn status_is_reported_for_request_failures_only() {
        let not_found = GatewayError::NotFound {
            resource: "domain/1".into(),
            raw_message: None,
        };
        assert_eq!(not_found.status(), Some(404));
        assert_eq!(GatewayError::ParseError { detail: "x".into() }.status(), None);
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = GatewayError::RequestFailed {
            status: 429,
            raw_message: Some("slow down".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RequestFailed\""));
        assert!(json.contains("\"status\":429"));
    }
}
