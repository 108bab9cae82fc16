//! Update 层产生的后台指令

use domain_console_core::types::DomainForm;
use domain_console_core::Domain;

/// 交给 Backend 执行的指令
///
/// Update 只修改 Model；需要网络或服务状态的动作以 Command 返回，
/// 由主循环交给 `CoreService` 执行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 通过缓存读取列表
    LoadDomains,
    /// 作废缓存后重新读取
    Refresh,
    /// 打开新增会话
    OpenAdd,
    /// 打开编辑会话
    OpenEdit(Domain),
    /// 关闭会话
    CloseSession,
    /// 提交新增
    Create { session_id: u64, form: DomainForm },
    /// 提交修改
    Update { session_id: u64, form: DomainForm },
    /// 删除记录
    Delete { id: String },
    /// 验证记录
    Verify { id: String },
}
