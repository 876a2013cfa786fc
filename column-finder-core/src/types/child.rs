//! 子节点数据载荷
//!
//! 默认 JSON 模板识别的响应结构。
//! 响应原样传给模板，仅注入 `colname` 字段。

use serde::{Deserialize, Serialize};

use super::Item;

/// 响应中的一条子节点记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildEntry {
    /// 唯一标识
    pub id: String,
    /// 显示文本
    pub label: String,
    /// 是否有下一层子节点
    #[serde(default)]
    pub has_children: bool,
    /// 下一层子节点的请求地址
    #[serde(default)]
    pub url: Option<String>,
    /// 初始勾选状态
    #[serde(default)]
    pub checked: bool,
    /// 是否禁用
    #[serde(default)]
    pub disabled: bool,
}

/// 子节点响应载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildrenPayload {
    /// 子节点列表
    #[serde(default)]
    pub items: Vec<ChildEntry>,
    /// 注入的列名（渲染前由引擎写入）
    #[serde(default)]
    pub colname: Option<String>,
}

impl From<ChildEntry> for Item {
    fn from(entry: ChildEntry) -> Self {
        Self {
            id: entry.id,
            label: entry.label,
            checked: entry.checked,
            selected: false,
            disabled: entry.disabled,
            has_children: entry.has_children,
            url: entry.url,
        }
    }
}
