//! 列（Section）定义

use super::Item;

/// 横向序列中的一列
///
/// 名称形如 `col<N>`（N 为 1 起始的列号）。
/// 焦点不记录在列上，由 `FinderState::focus` 以下标形式持有。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// 列名（`col1`、`col2`…）
    pub name: String,
    /// 列中的项
    pub items: Vec<Item>,
    /// 是否正在等待子节点数据
    pub loading: bool,
}

impl Section {
    /// 创建空列
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            loading: false,
        }
    }

    /// 创建带初始项的列
    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            loading: false,
        }
    }

    /// 清空列内容
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// 取消列中所有项的勾选与选中
    pub fn deselect_all(&mut self) {
        for item in &mut self.items {
            item.checked = false;
            item.selected = false;
        }
    }
}
