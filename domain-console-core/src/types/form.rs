//! 域名表单

use serde::{Deserialize, Serialize};

use domain_console_gateway::{CreateDomainRequest, Domain, DomainStatus, UpdateDomainRequest};

use crate::error::{CoreError, CoreResult};

/// Editable fields of a domain record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainForm {
    pub domain: String,
    pub status: DomainStatus,
    pub is_active: bool,
}

impl Default for DomainForm {
    /// Blank form for a new record: pending and active.
    fn default() -> Self {
        Self {
            domain: String::new(),
            status: DomainStatus::Pending,
            is_active: true,
        }
    }
}

impl DomainForm {
    /// Form prefilled from an existing record.
    #[must_use]
    pub fn from_domain(domain: &Domain) -> Self {
        Self {
            domain: domain.domain.clone(),
            status: domain.status,
            is_active: domain.is_active,
        }
    }

    /// Reject a form without a domain URL.
    pub fn validate(&self) -> CoreResult<()> {
        if self.domain.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Domain URL is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Create request stamped with `created_date`.
    #[must_use]
    pub fn to_create_request(&self, created_date: i64) -> CreateDomainRequest {
        CreateDomainRequest {
            domain: self.domain.trim().to_string(),
            status: self.status,
            is_active: self.is_active,
            created_date,
        }
    }

    /// Update request carrying every form field.
    #[must_use]
    pub fn to_update_request(&self) -> UpdateDomainRequest {
        UpdateDomainRequest {
            domain: Some(self.domain.trim().to_string()),
            status: Some(self.status),
            is_active: Some(self.is_active),
        }
    }
}
