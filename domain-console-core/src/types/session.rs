//! 编辑会话

use domain_console_gateway::Domain;

use super::DomainForm;

/// What an open session edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTarget {
    /// A record that does not exist yet.
    New,
    /// The record selected for editing.
    Existing(Domain),
}

/// The edit/create panel. At most one is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        /// Distinguishes successive sessions, so a late completion can tell
        /// whether the session it was started from is still the open one.
        id: u64,
        target: SessionTarget,
    },
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Open { id, .. } => Some(*id),
            Self::Closed => None,
        }
    }

    /// The record being edited, if any.
    pub fn selected(&self) -> Option<&Domain> {
        match self {
            Self::Open {
                target: SessionTarget::Existing(domain),
                ..
            } => Some(domain),
            _ => None,
        }
    }

    /// Initial form values for this session.
    pub fn initial_form(&self) -> DomainForm {
        self.selected()
            .map(DomainForm::from_domain)
            .unwrap_or_default()
    }
}
