//! 弹窗更新逻辑

use domain_console_core::CoreError;

use crate::message::{Command, ModalMessage};
use crate::model::{App, FormField, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::DomainForm(_)) => handle_domain_form(app, msg),
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
            None
        }
        None => None,
    }
}

/// 处理新增 / 编辑表单
fn handle_domain_form(app: &mut App, msg: ModalMessage) -> Option<Command> {
    if msg == ModalMessage::Close {
        // 关闭面板不会取消进行中的请求
        app.modal.close();
        return Some(Command::CloseSession);
    }

    let modal = app.modal.form_mut()?;
    if modal.submitting {
        return None;
    }

    match msg {
        ModalMessage::NextField => modal.focus = modal.focus.next(),
        ModalMessage::PrevField => modal.focus = modal.focus.prev(),

        ModalMessage::Left | ModalMessage::Right => match modal.focus {
            FormField::Status => modal.cycle_status(msg == ModalMessage::Right),
            FormField::Active => modal.form.is_active = !modal.form.is_active,
            FormField::DomainUrl => {}
        },

        ModalMessage::Input(ch) => match modal.focus {
            FormField::DomainUrl => {
                modal.form.domain.push(ch);
                modal.error = None;
            }
            FormField::Status if ch == ' ' => modal.cycle_status(true),
            FormField::Active if ch == ' ' => modal.form.is_active = !modal.form.is_active,
            _ => {}
        },

        ModalMessage::Backspace => {
            if modal.focus == FormField::DomainUrl {
                modal.form.domain.pop();
            }
        }

        ModalMessage::Confirm => {
            if let Err(e) = modal.form.validate() {
                modal.error = Some(match e {
                    CoreError::ValidationError(message) => message,
                    other => other.to_string(),
                });
                modal.focus = FormField::DomainUrl;
                return None;
            }

            modal.error = None;
            modal.submitting = true;

            let session_id = modal.session_id;
            let form = modal.form.clone();
            return Some(if modal.editing {
                Command::Update { session_id, form }
            } else {
                Command::Create { session_id, form }
            });
        }

        ModalMessage::Close => {}
    }

    None
}
