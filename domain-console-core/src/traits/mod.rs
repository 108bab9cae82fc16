//! Abstraction traits injected into the services

mod clock;

pub use clock::{Clock, SystemClock};

// Re-export the gateway seam
pub use domain_console_gateway::DomainGateway;
