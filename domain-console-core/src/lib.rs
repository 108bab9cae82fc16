//! Domain Console Core Library
//!
//! Provides the client-side logic of the domain management console:
//! - Request cache with in-flight de-duplication and tag invalidation
//! - Derived list view (search + sort)
//! - Operation orchestration (create / update / delete / verify) and the
//!   edit session
//!
//! The remote collection is reached through the
//! [`DomainGateway`](traits::DomainGateway) trait, so the UI layer only wires
//! a concrete gateway into a [`ServiceContext`].

pub mod cache;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::{CacheTag, DomainListCache, QueryCache, QueryStatus, LIST_DOMAINS_KEY};
pub use error::{CoreError, CoreResult};
pub use services::{DomainService, ServiceContext};
pub use traits::{Clock, DomainGateway, SystemClock};
pub use view::{derive_view, SortMode, ViewQuery};

// Re-export gateway types
pub use domain_console_gateway::{
    CreateDomainRequest, Domain, DomainStatus, GatewayError, RestGateway, UpdateDomainRequest,
    DEFAULT_BASE_URL,
};
