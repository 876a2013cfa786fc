//! Backend 层：数据服务
//!
//! 配置加载、子节点数据源与异步加载桥接。

mod child_service;
mod config_service;
mod file_source;

pub use child_service::ChildService;
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
