use serde::{Deserialize, Serialize};

// ============ 记录类型 ============

/// Verification state of a domain record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Awaiting verification. New records start here.
    #[default]
    Pending,
    /// Ownership confirmed.
    Verified,
    /// Verification refused.
    Rejected,
}

impl DomainStatus {
    /// All statuses, in selector order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Verified, Self::Rejected];

    /// Wire name (`pending`, `verified`, `rejected`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }
}

/// A domain record as stored by the remote data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// The domain URL.
    pub domain: String,
    /// Verification state.
    pub status: DomainStatus,
    /// Whether the domain is currently active.
    pub is_active: bool,
    /// Creation time in epoch milliseconds, stamped by the client.
    pub created_date: i64,
}

// ============ 请求类型 ============

/// Body of `POST /domain`: every field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    pub domain: String,
    pub status: DomainStatus,
    pub is_active: bool,
    pub created_date: i64,
}

/// Body of `PUT /domain/{id}`.
///
/// Only the fields that are `Some` are sent; the store keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateDomainRequest {
    /// Partial update that only moves the record to `verified`.
    #[must_use]
    pub fn verify() -> Self {
        Self {
            status: Some(DomainStatus::Verified),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_uses_camel_case_wire_names() {
        let json = r#"{
            "id": "12",
            "domain": "https://a.com",
            "status": "verified",
            "isActive": false,
            "createdDate": 1737900000000
        }"#;
        let d: Domain = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "12");
        assert_eq!(d.status, DomainStatus::Verified);
        assert!(!d.is_active);
        assert_eq!(d.created_date, 1_737_900_000_000);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{"id":"1","domain":"a","status":"archived","isActive":true,"createdDate":1}"#;
        assert!(serde_json::from_str::<Domain>(json).is_err());
    }

    #[test]
    fn create_request_has_no_id() {
        let req = CreateDomainRequest {
            domain: "c.com".to_string(),
            status: DomainStatus::Pending,
            is_active: true,
            created_date: 300,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "domain": "c.com",
                "status": "pending",
                "isActive": true,
                "createdDate": 300
            })
        );
    }

    #[test]
    fn verify_update_only_sends_status() {
        let value = serde_json::to_value(UpdateDomainRequest::verify()).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "verified" }));
    }

    #[test]
    fn status_names_match_wire_format() {
        for status in DomainStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
