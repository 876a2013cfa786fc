//! 部件配置
//!
//! 开关的默认值：缓存开启，横向滚动与加载标记关闭。
//! 协作者（模板、地址解析、回调）都以 trait 对象注入。

use std::sync::Arc;

use crate::traits::{
    ColumnTemplate, ItemTemplate, JsonItemTemplate, NamedColumnTemplate, UrlFieldResolver,
    UrlResolver,
};
use crate::types::Item;

/// 选择回调（携带被点击的项）
pub type ItemCallback = Arc<dyn Fn(&Item) + Send + Sync>;
/// 渲染完成回调（携带新渲染出的项）
pub type ItemsAddedCallback = Arc<dyn Fn(&[Item]) + Send + Sync>;
/// 勾选谓词
pub type SelectedPredicate = Arc<dyn Fn(&Item) -> bool + Send + Sync>;

/// 部件配置
pub struct FinderOptions {
    /// 是否启用横向滚动
    pub horizontal_scroll: bool,
    /// 等待子节点数据时是否在新列上显示加载标记
    pub loading: bool,
    /// 是否缓存响应
    pub cache: bool,
    /// 项模板
    pub item_template: Arc<dyn ItemTemplate>,
    /// 列模板
    pub column_template: Arc<dyn ColumnTemplate>,
    /// 子节点地址解析
    pub url_resolver: Arc<dyn UrlResolver>,
    /// 勾选谓词（`mark_selected` 以它为准）
    pub selected_predicate: SelectedPredicate,
    /// 点击带子节点的项之后触发
    pub item_selected_callback: Option<ItemCallback>,
    /// 选定叶子项之后触发
    pub last_child_selected_callback: Option<ItemCallback>,
    /// 新列内容渲染完成之后触发
    pub items_added_callback: Option<ItemsAddedCallback>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            horizontal_scroll: false,
            loading: false,
            cache: true,
            item_template: Arc::new(JsonItemTemplate),
            column_template: Arc::new(NamedColumnTemplate),
            url_resolver: Arc::new(UrlFieldResolver),
            selected_predicate: Arc::new(|item: &Item| item.checked),
            item_selected_callback: None,
            last_child_selected_callback: None,
            items_added_callback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_switches() {
        let options = FinderOptions::default();

        assert!(!options.horizontal_scroll);
        assert!(!options.loading);
        assert!(options.cache);
        assert!(options.item_selected_callback.is_none());
        assert!(options.last_child_selected_callback.is_none());
        assert!(options.items_added_callback.is_none());
    }

    #[test]
    fn default_predicate_reads_checked_state() {
        let options = FinderOptions::default();
        let mut item = Item::new("a", "A");

        assert!(!(options.selected_predicate)(&item));
        item.checked = true;
        assert!((options.selected_predicate)(&item));
    }
}
