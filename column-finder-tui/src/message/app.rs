//! 应用主消息枚举

use super::FinderMessage;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 列浏览器相关消息
    Finder(FinderMessage),

    /// 设置状态栏消息
    Status(String),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
