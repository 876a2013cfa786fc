//! 响应缓存
//!
//! URL 到最近一次成功响应的映射，归属于单个部件实例，
//! 随部件创建与销毁。条目在页面生命周期内不过期、不淘汰。

use std::collections::HashMap;

use serde_json::Value;

/// 实例级响应缓存
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Value>,
}

impl ResponseCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询某个 URL 的缓存响应
    pub fn get(&self, url: &str) -> Option<&Value> {
        self.entries.get(url)
    }

    /// 是否已缓存某个 URL
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// 写入（或覆盖）一条响应
    pub fn insert(&mut self, url: impl Into<String>, data: Value) {
        self.entries.insert(url.into(), data);
    }

    /// 缓存条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
