//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。
//! 列浏览器子消息委托给 `finder` 子模块处理。

mod finder;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Finder(finder_msg) => {
            finder::update(app, finder_msg);
        }

        AppMessage::Status(text) => {
            app.set_status(text);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
