//! 弹窗状态

use domain_console_core::types::{DomainForm, EditSession};
use domain_console_core::DomainStatus;

/// 表单字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    DomainUrl,
    Status,
    Active,
}

impl FormField {
    const ORDER: [Self; 3] = [Self::DomainUrl, Self::Status, Self::Active];

    fn position(self) -> usize {
        match self {
            Self::DomainUrl => 0,
            Self::Status => 1,
            Self::Active => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// 新增 / 编辑表单弹窗
///
/// A view of one edit session; `session_id` ties it to the session the
/// domain service opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFormModal {
    pub session_id: u64,
    /// `true` when editing an existing record
    pub editing: bool,
    pub form: DomainForm,
    pub focus: FormField,
    /// 字段错误（如 "Domain URL is required"）
    pub error: Option<String>,
    /// 提交中
    pub submitting: bool,
}

impl DomainFormModal {
    /// Build the form for an open session. `None` when the session is closed.
    pub fn from_session(session: &EditSession) -> Option<Self> {
        let session_id = session.id()?;
        Some(Self {
            session_id,
            editing: session.selected().is_some(),
            form: session.initial_form(),
            focus: FormField::DomainUrl,
            error: None,
            submitting: false,
        })
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            "Edit Domain"
        } else {
            "Add Domain"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing {
            "Save"
        } else {
            "Add"
        }
    }

    pub fn cycle_status(&mut self, forward: bool) {
        let all = DomainStatus::ALL;
        let current = all.iter().position(|s| *s == self.form.status).unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.form.status = all[next];
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 新增 / 编辑域名
    DomainForm(DomainFormModal),

    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    /// 当前的表单弹窗
    pub fn form(&self) -> Option<&DomainFormModal> {
        match &self.active {
            Some(Modal::DomainForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut DomainFormModal> {
        match &mut self.active {
            Some(Modal::DomainForm(form)) => Some(form),
            _ => None,
        }
    }

    /// Follow the edit session: open the form for a new session, close it
    /// when the session ends. Other modals are left alone.
    pub fn sync_session(&mut self, session: &EditSession) {
        let current = self.form().map(|f| f.session_id);
        match (DomainFormModal::from_session(session), current) {
            (Some(form), current) if current != Some(form.session_id) => {
                self.show(Modal::DomainForm(form));
            }
            (None, Some(_)) => self.close(),
            _ => {}
        }
    }
}
