//! 测试辅助模块
//!
//! 提供 mock 协作者实现。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FinderError, FinderResult};
use crate::traits::ChildSource;

/// 预置响应的子节点数据源，记录请求次数
pub struct MockChildSource {
    responses: HashMap<String, Value>,
    calls: AtomicUsize,
}

impl MockChildSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// 预置某个 URL 的响应
    #[must_use]
    pub fn with_response(mut self, url: impl Into<String>, data: Value) -> Self {
        self.responses.insert(url.into(), data);
        self
    }

    /// 已收到的请求次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChildSource for MockChildSource {
    async fn fetch(&self, url: &str) -> FinderResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FinderError::HttpStatus {
                status: 404,
                url: url.to_string(),
            })
    }
}
