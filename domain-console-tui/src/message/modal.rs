//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 选项左移（状态选择 / 按钮焦点）
    Left,

    /// 选项右移
    Right,

    /// 切换开关
    Toggle,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
