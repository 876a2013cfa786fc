//! Column Finder Core Library
//!
//! Engine for a miller-column ("finder") navigation widget:
//! - explicit section/item state with single-focus bookkeeping
//! - the three-branch click state machine
//! - horizontal scroll target arithmetic
//! - instance-owned response cache with async child fetching behind a trait
//!
//! The engine never talks to a rendering host. Front-ends render
//! [`FinderState`], execute the scroll/load requests carried by
//! [`StepOutcome`], and report completions back through
//! [`Finder::scroll_finished`] / [`Finder::complete_load`].

pub mod cache;
pub mod error;
pub mod finder;
pub mod method;
pub mod options;
pub mod scroll;
pub mod state;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::ResponseCache;
pub use error::{FinderError, FinderResult};
pub use finder::{Finder, LoadRequest, ScrollRequest, StepOutcome};
pub use method::{DispatchOutcome, Method, MethodCall};
pub use options::FinderOptions;
pub use scroll::{ScrollGeometry, SectionGeometry};
pub use state::FinderState;
pub use types::{ChildEntry, ChildrenPayload, Item, Section};
