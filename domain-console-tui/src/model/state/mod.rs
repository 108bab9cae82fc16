//! 页面状态

mod domains;
mod modal;

pub use domains::DomainsState;
pub use modal::{DomainFormModal, FormField, Modal, ModalState};
