//! 后台结果处理

use domain_console_core::types::{OperationKind, VerifyOutcome};
use domain_console_core::QueryStatus;

use crate::message::{BackendMessage, Command};
use crate::model::App;

fn success_text(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Create => "Domain added successfully",
        // 验证就是一次状态更新
        OperationKind::Update | OperationKind::Verify => "Domain updated successfully",
        OperationKind::Delete => "Domain removed successfully",
    }
}

fn failure_text(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Create => "Failed to add domain",
        OperationKind::Update | OperationKind::Verify => "Failed to update domain",
        OperationKind::Delete => "Failed to remove domain",
    }
}

/// 处理后台消息
///
/// 每个操作完成后都重新通过缓存读取列表。
pub fn update(app: &mut App, msg: BackendMessage) -> Option<Command> {
    match msg {
        BackendMessage::ListLoaded(Ok(domains)) => {
            app.domains.set_domains(domains);
            None
        }

        BackendMessage::ListLoaded(Err(e)) => {
            app.domains.set_error(e);
            None
        }

        BackendMessage::ListStatus(status) => match status {
            QueryStatus::Fetching => {
                app.domains.loading = true;
                None
            }
            QueryStatus::Stale => Some(Command::LoadDomains),
            QueryStatus::Idle | QueryStatus::Ready | QueryStatus::Failed(_) => None,
        },

        BackendMessage::Session(session) => {
            app.modal.sync_session(&session);
            None
        }

        BackendMessage::Saved {
            session_id,
            kind,
            result,
        } => {
            match result {
                Ok(_) => app.notify_success(success_text(kind)),
                Err(e) => {
                    app.notify_error(failure_text(kind));
                    // 只回到发起提交的那个表单
                    if let Some(form) = app
                        .modal
                        .form_mut()
                        .filter(|f| f.session_id == session_id)
                    {
                        form.submitting = false;
                        form.error = Some(e);
                    }
                }
            }
            Some(Command::LoadDomains)
        }

        BackendMessage::Deleted(result) => {
            match result {
                Ok(_) => app.notify_success(success_text(OperationKind::Delete)),
                Err(_) => app.notify_error(failure_text(OperationKind::Delete)),
            }
            Some(Command::LoadDomains)
        }

        BackendMessage::Verified(result) => {
            match result {
                Ok(VerifyOutcome::Verified(_)) => {
                    app.notify_success(success_text(OperationKind::Verify));
                }
                Ok(VerifyOutcome::AlreadyVerified) => {}
                Err(_) => app.notify_error(failure_text(OperationKind::Verify)),
            }
            Some(Command::LoadDomains)
        }
    }
}
