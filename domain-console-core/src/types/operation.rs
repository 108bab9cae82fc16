//! 操作状态相关类型定义

use std::fmt;

use domain_console_gateway::Domain;

/// The mutations the console can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
    Verify,
}

impl OperationKind {
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Create => 0,
            Self::Update => 1,
            Self::Delete => 2,
            Self::Verify => 3,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Verify => "verify",
        };
        f.write_str(name)
    }
}

/// Pending / success / error flags of one operation, as a single state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl OperationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Result of a verify request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The record was moved to `verified`.
    Verified(Domain),
    /// The record was already verified; nothing was sent.
    AlreadyVerified,
}
