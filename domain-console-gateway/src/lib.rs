//! # domain-console-gateway
//!
//! Remote data gateway for the `domain` record collection of a REST-like
//! data store (mockapi-style: `GET/POST /domain`, `PUT/DELETE /domain/{id}`).
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_console_gateway::{
//!     CreateDomainRequest, DomainGateway, DomainStatus, RestGateway, DEFAULT_BASE_URL,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = RestGateway::new(DEFAULT_BASE_URL)?;
//!
//!     let created = gateway
//!         .create_domain(&CreateDomainRequest {
//!             domain: "https://c.com".to_string(),
//!             status: DomainStatus::Pending,
//!             is_active: true,
//!             created_date: 1_737_900_000_000,
//!         })
//!         .await?;
//!
//!     for domain in gateway.list_domains().await? {
//!         println!("{} {} ({})", domain.id, domain.domain, domain.status.label());
//!     }
//!
//!     gateway.delete_domain(&created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GatewayError>`](GatewayError):
//!
//! - [`GatewayError::NetworkError`] / [`GatewayError::Timeout`]: transport failure
//! - [`GatewayError::NotFound`] / [`GatewayError::RequestFailed`]: non-2xx answer
//! - [`GatewayError::ParseError`]: the body is not the expected JSON
//!
//! Nothing is retried.

mod error;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{GatewayError, Result};

// Re-export the gateway trait and its HTTP implementation
pub use rest::{DEFAULT_BASE_URL, RestGateway};
pub use traits::DomainGateway;

// Re-export types
pub use types::{CreateDomainRequest, Domain, DomainStatus, UpdateDomainRequest};
