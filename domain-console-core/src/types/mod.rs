//! 类型定义模块

mod form;
mod operation;
mod session;

pub use form::DomainForm;
pub use operation::{OperationKind, OperationStatus, VerifyOutcome};
pub use session::{EditSession, SessionTarget};

// Re-export gateway 库的公共类型
pub use domain_console_gateway::{CreateDomainRequest, Domain, DomainStatus, UpdateDomainRequest};
