//! 应用主循环
//!
//! 每轮循环：渲染 → 驱动滚动动画 → 送达异步加载结果 → 轮询输入。
//! 动画结束与请求结束都以消息进入 Update 层，
//! 保证依赖滚动完成的列移除排在动画之后。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::{AppMessage, FinderMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI，记录本帧区域（鼠标命中与滚动几何都用它）
        let completed = terminal.draw(|frame| {
            view::render(app, frame);
        })?;
        app.frame_area = completed.area;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 驱动滚动动画；刚完成时通知引擎
        if app.scroll.is_animating() && app.scroll.tick() {
            update::update(app, AppMessage::Finder(FinderMessage::ScrollFinished));
        }

        // 4. 送达异步加载结果
        while let Ok(msg) = app.messages.try_recv() {
            update::update(app, msg);
        }

        // 5. 轮询事件（50ms 超时，超时用于动画计时）
        if let Some(event) = event::poll_event(Duration::from_millis(50))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
