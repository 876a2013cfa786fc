//! 数据模型定义

mod child;
mod item;
mod section;

pub use child::{ChildEntry, ChildrenPayload};
pub use item::Item;
pub use section::Section;
