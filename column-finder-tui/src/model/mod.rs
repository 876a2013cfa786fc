//! Model 层：应用状态

mod app;
mod scroll;

pub use app::{App, Cursor};
pub use scroll::ScrollState;
