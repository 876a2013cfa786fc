//! 模板与地址解析协作者
//!
//! 引擎把数据（含注入的 `colname`）交给模板，不解释模板产物。

use serde_json::Value;

use crate::types::{ChildrenPayload, Item, Section};

/// 项模板：把响应数据渲染为一列的项
pub trait ItemTemplate: Send + Sync {
    /// 渲染子节点数据
    ///
    /// # Arguments
    /// * `data` - 响应载荷，已注入 `colname` 字段
    fn render(&self, data: &Value) -> Vec<Item>;
}

/// 列模板：按列名构建一个空列
pub trait ColumnTemplate: Send + Sync {
    /// 构建名为 `colname` 的新列
    fn render(&self, colname: &str) -> Section;
}

/// 地址解析：从项上取得子节点请求地址
pub trait UrlResolver: Send + Sync {
    /// 返回该项的请求地址（没有则返回 `None`）
    fn url(&self, item: &Item) -> Option<String>;
}

/// 默认项模板：按 [`ChildrenPayload`] 结构反序列化
///
/// 无法识别的载荷渲染为空列表（引擎不对外报错）。
#[derive(Debug, Default)]
pub struct JsonItemTemplate;

impl ItemTemplate for JsonItemTemplate {
    fn render(&self, data: &Value) -> Vec<Item> {
        match serde_json::from_value::<ChildrenPayload>(data.clone()) {
            Ok(payload) => payload.items.into_iter().map(Item::from).collect(),
            Err(e) => {
                log::warn!("[FINDER] unrecognized child payload: {e}");
                Vec::new()
            }
        }
    }
}

/// 默认列模板：只带列名的空列
#[derive(Debug, Default)]
pub struct NamedColumnTemplate;

impl ColumnTemplate for NamedColumnTemplate {
    fn render(&self, colname: &str) -> Section {
        Section::new(colname)
    }
}

/// 默认地址解析：读取项自身的 `url` 字段
#[derive(Debug, Default)]
pub struct UrlFieldResolver;

impl UrlResolver for UrlFieldResolver {
    fn url(&self, item: &Item) -> Option<String> {
        item.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_template_maps_entries_to_items() {
        let data = json!({
            "items": [
                {"id": "x1", "label": "One", "has_children": true, "url": "/x1"},
                {"id": "x2", "label": "Two"}
            ],
            "colname": "col2"
        });

        let items = JsonItemTemplate.render(&data);
        assert_eq!(items.len(), 2);
        assert!(items[0].has_children);
        assert_eq!(items[0].url.as_deref(), Some("/x1"));
        assert!(!items[1].has_children);
        assert!(!items[1].selected);
    }

    #[test]
    fn json_template_renders_unknown_payload_as_empty() {
        let items = JsonItemTemplate.render(&json!({"items": "not-a-list"}));
        assert!(items.is_empty());
    }

    #[test]
    fn named_column_template_builds_empty_section() {
        let section = NamedColumnTemplate.render("col3");
        assert_eq!(section.name, "col3");
        assert!(section.items.is_empty());
        assert!(!section.loading);
    }
}
