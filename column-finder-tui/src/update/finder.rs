//! 列浏览器更新逻辑
//!
//! 驱动引擎的状态迁移，并执行迁移要求的滚动与加载：
//! - 加载请求交给 Backend 的加载服务（结果以消息返回）；
//! - 滚动请求换算成目标偏移，交给 Model 的滚动动画；
//!   无需动画时（目标等于当前偏移，或未启用横向滚动）
//!   视为滚动立即完成，直接回报引擎。

use crate::message::FinderMessage;
use crate::model::App;

use column_finder_core::StepOutcome;

/// 处理列浏览器消息
pub fn update(app: &mut App, msg: FinderMessage) {
    match msg {
        FinderMessage::ItemClick { section, item } => {
            app.cursor.section = section;
            app.cursor.item = item;
            let outcome = app.finder.item_click(section, item);
            apply_outcome(app, outcome);
        }

        FinderMessage::SectionClick { section } => {
            app.cursor.section = section;
            let outcome = app.finder.section_click(section);
            apply_outcome(app, outcome);
        }

        FinderMessage::CursorLeft => app.cursor.move_left(app.finder.state()),
        FinderMessage::CursorRight => app.cursor.move_right(app.finder.state()),
        FinderMessage::CursorUp => app.cursor.move_up(),
        FinderMessage::CursorDown => app.cursor.move_down(app.finder.state()),

        FinderMessage::Activate => {
            let (section, item) = (app.cursor.section, app.cursor.item);
            if app.finder.state().item(section, item).is_some() {
                let outcome = app.finder.item_click(section, item);
                apply_outcome(app, outcome);
            }
        }

        FinderMessage::ScrollFinished => {
            let outcome = app.finder.scroll_finished();
            apply_outcome(app, outcome);
        }

        FinderMessage::ChildrenLoaded { request, result } => {
            let outcome = app.finder.complete_load(&request, result);
            apply_outcome(app, outcome);
        }
    }

    // 列结构可能已变化，光标收回合法范围
    app.cursor.clamp(app.finder.state());
}

/// 执行一次状态迁移要求的滚动与加载
fn apply_outcome(app: &mut App, outcome: StepOutcome) {
    if let Some(request) = outcome.load {
        app.children.spawn_load(request);
    }

    if let Some(request) = outcome.scroll {
        let geometry = app.scroll_geometry();
        match app.finder.scroll_target(&geometry, request.last) {
            Some(target) => {
                // 终端视口和 DOM 滚动容器一样把偏移夹在内容范围内
                let target = target.clamp(0, app.max_scroll());
                if target == app.scroll.offset {
                    let outcome = app.finder.scroll_finished();
                    apply_outcome(app, outcome);
                } else {
                    app.scroll.start(target);
                }
            }
            None => {
                let outcome = app.finder.scroll_finished();
                apply_outcome(app, outcome);
            }
        }
    }
}
