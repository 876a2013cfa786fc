//! Event 层：输入处理
//!
//! 把键盘与鼠标事件翻译成 Message。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
