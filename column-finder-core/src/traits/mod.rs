//! 协作者抽象 Trait

mod child_source;
mod template;

pub use child_source::{ChildSource, HttpChildSource};
pub use template::{
    ColumnTemplate, ItemTemplate, JsonItemTemplate, NamedColumnTemplate, UrlFieldResolver,
    UrlResolver,
};
