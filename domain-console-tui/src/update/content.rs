//! 列表更新逻辑

use domain_console_core::DomainStatus;

use crate::message::{Command, ContentMessage};
use crate::model::{App, FocusPanel};

/// 处理列表消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let domains = &mut app.domains;

    match msg {
        ContentMessage::SelectPrevious => domains.select_previous(),
        ContentMessage::SelectNext => domains.select_next(),
        ContentMessage::SelectFirst => domains.select_first(),
        ContentMessage::SelectLast => domains.select_last(),

        ContentMessage::Add => return Some(Command::OpenAdd),

        ContentMessage::Edit => {
            return domains.selected_domain().cloned().map(Command::OpenEdit);
        }

        ContentMessage::Delete => {
            return domains.selected_domain().map(|domain| Command::Delete {
                id: domain.id.clone(),
            });
        }

        ContentMessage::Verify => {
            let Some(domain) = domains.selected_domain() else {
                return None;
            };
            if domain.status == DomainStatus::Verified {
                // 已验证的记录不可再次验证
                return None;
            }
            return Some(Command::Verify {
                id: domain.id.clone(),
            });
        }

        ContentMessage::FocusSearch => app.focus = FocusPanel::Search,
        ContentMessage::LeaveSearch => app.focus = FocusPanel::Table,
        ContentMessage::SearchInput(ch) => domains.search_push(ch),
        ContentMessage::SearchBackspace => domains.search_pop(),
        ContentMessage::SearchClear => domains.search_clear(),

        ContentMessage::NextSort => domains.next_sort(),
        ContentMessage::PrevSort => domains.prev_sort(),
    }

    None
}
