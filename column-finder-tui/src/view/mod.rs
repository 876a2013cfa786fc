//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。

mod components;
pub mod layout;
pub mod theme;

pub use layout::render;
