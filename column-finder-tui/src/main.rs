//! Column Finder TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 数据服务 (`backend/`)
//!
//! 部件引擎本身在 column-finder-core：
//! Update 层驱动引擎，把引擎要求的滚动动画与子节点请求
//! 交给 Model 的滚动状态和 Backend 的加载服务执行。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use column_finder_core::traits::ChildSource;

use backend::{ChildService, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置（首次运行时落盘默认配置，方便用户修改）
    let config = LocalConfigService.load()?;
    LocalConfigService.save(&config)?;
    view::theme::set_theme(config.theme);

    // 2. 启动异步运行时与加载服务
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let children = ChildService::new(&config, runtime.handle().clone(), tx)?;

    // 3. 取根层数据（在进入备用屏幕之前完成，出错可正常打印）
    let root = runtime.block_on(children.source().fetch(&config.root_url))?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例，运行主循环
    let mut app = model::App::new(&config, children, rx, &root);
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
