//! 子节点加载服务
//!
//! 按配置构建数据源，把加载请求派发到异步运行时，
//! 完成后以消息送回主循环。

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

use column_finder_core::traits::{ChildSource, HttpChildSource};
use column_finder_core::LoadRequest;

use crate::message::{AppMessage, FinderMessage};

use super::config_service::AppConfig;
use super::file_source::FileChildSource;

/// 子节点加载服务
pub struct ChildService {
    source: Arc<dyn ChildSource>,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl ChildService {
    /// 按配置创建服务
    ///
    /// 数据源优先级：文件 → HTTP → 内置示例。
    pub fn new(config: &AppConfig, handle: Handle, tx: UnboundedSender<AppMessage>) -> Result<Self> {
        let source: Arc<dyn ChildSource> = if let Some(path) = &config.data_file {
            log::debug!("[CHILD] file source: {}", path.display());
            Arc::new(FileChildSource::load(path).context("loading data_file")?)
        } else if let Some(base) = &config.server_url {
            log::debug!("[CHILD] http source: {base}");
            let base = Url::parse(base).context("invalid server_url")?;
            Arc::new(HttpChildSource::new(Some(base)))
        } else {
            log::debug!("[CHILD] built-in sample source");
            Arc::new(FileChildSource::sample())
        };

        Ok(Self { source, handle, tx })
    }

    /// 数据源句柄
    pub fn source(&self) -> Arc<dyn ChildSource> {
        self.source.clone()
    }

    /// 消息发送端（回调与异步任务共用）
    pub fn sender(&self) -> UnboundedSender<AppMessage> {
        self.tx.clone()
    }

    /// 发起一次子节点请求；完成后把结果送回主循环
    ///
    /// 请求不随后续点击取消，完成回报由引擎决定是否丢弃。
    pub fn spawn_load(&self, request: LoadRequest) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = source.fetch(&request.url).await;
            let _ = tx.send(AppMessage::Finder(FinderMessage::ChildrenLoaded {
                request,
                result,
            }));
        });
    }
}
