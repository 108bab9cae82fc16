//! 后台任务回传消息
//!
//! Errors arrive as their display text; the typed error was already logged
//! where it happened.

use std::sync::Arc;

use domain_console_core::types::{EditSession, OperationKind, VerifyOutcome};
use domain_console_core::{Domain, QueryStatus};

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表读取完成
    ListLoaded(Result<Arc<Vec<Domain>>, String>),

    /// 列表缓存状态变化
    ListStatus(QueryStatus),

    /// 编辑会话变化
    Session(EditSession),

    /// 新增 / 修改完成
    Saved {
        session_id: u64,
        kind: OperationKind,
        result: Result<Domain, String>,
    },

    /// 删除完成（携带记录 id）
    Deleted(Result<String, String>),

    /// 验证完成
    Verified(Result<VerifyOutcome, String>),
}
