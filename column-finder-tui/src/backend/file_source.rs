//! 文件子节点数据源
//!
//! 从一个 JSON 树文件提供子节点数据，
//! 实现 column-finder-core 的 ChildSource trait。
//! 文件格式：顶层对象，键是请求地址，值是该地址的响应载荷。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use column_finder_core::traits::ChildSource;
use column_finder_core::{FinderError, FinderResult};

/// 基于 JSON 文件的子节点数据源
pub struct FileChildSource {
    tree: HashMap<String, Value>,
}

impl FileChildSource {
    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let tree = serde_json::from_str(&content)?;
        Ok(Self { tree })
    }

    /// 内置示例数据（未配置任何数据源时使用）
    pub fn sample() -> Self {
        let tree = HashMap::from([
            (
                "/".to_string(),
                json!({"items": [
                    {"id": "jazz", "label": "Jazz", "has_children": true, "url": "/jazz"},
                    {"id": "rock", "label": "Rock", "has_children": true, "url": "/rock"},
                    {"id": "ambient", "label": "Ambient"}
                ]}),
            ),
            (
                "/jazz".to_string(),
                json!({"items": [
                    {"id": "davis", "label": "Miles Davis", "has_children": true, "url": "/jazz/davis"},
                    {"id": "coltrane", "label": "John Coltrane", "has_children": true, "url": "/jazz/coltrane"}
                ]}),
            ),
            (
                "/jazz/davis".to_string(),
                json!({"items": [
                    {"id": "kob", "label": "Kind of Blue"},
                    {"id": "bb", "label": "Bitches Brew"}
                ]}),
            ),
            (
                "/jazz/coltrane".to_string(),
                json!({"items": [
                    {"id": "als", "label": "A Love Supreme"},
                    {"id": "gs", "label": "Giant Steps"}
                ]}),
            ),
            (
                "/rock".to_string(),
                json!({"items": [
                    {"id": "beatles", "label": "The Beatles", "has_children": true, "url": "/rock/beatles"},
                    {"id": "zeppelin", "label": "Led Zeppelin", "has_children": true, "url": "/rock/zeppelin"}
                ]}),
            ),
            (
                "/rock/beatles".to_string(),
                json!({"items": [
                    {"id": "abbey", "label": "Abbey Road"},
                    {"id": "revolver", "label": "Revolver"}
                ]}),
            ),
            (
                "/rock/zeppelin".to_string(),
                json!({"items": [
                    {"id": "iv", "label": "Led Zeppelin IV"},
                    {"id": "houses", "label": "Houses of the Holy"}
                ]}),
            ),
        ]);
        Self { tree }
    }
}

#[async_trait]
impl ChildSource for FileChildSource {
    async fn fetch(&self, url: &str) -> FinderResult<Value> {
        self.tree
            .get(url)
            .cloned()
            .ok_or_else(|| FinderError::HttpStatus {
                status: 404,
                url: url.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_tree_serves_the_root_layer() {
        let source = FileChildSource::sample();
        let root = source.fetch("/").await.unwrap();

        let items = root.get("items").and_then(Value::as_array).unwrap();
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn unknown_urls_answer_with_a_404_status() {
        let source = FileChildSource::sample();
        let err = source.fetch("/missing").await.unwrap_err();

        match err {
            FinderError::HttpStatus { status, url } => {
                assert_eq!(status, 404);
                assert_eq!(url, "/missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
