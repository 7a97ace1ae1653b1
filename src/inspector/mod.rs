//! 检查编排：快速检查、完整检查与快照比较。
//!
//! Check orchestration.
//!
//! | Operation | Returns | On fetch failure |
//! |-----------|---------|------------------|
//! | [`Inspector::quick_check`] | status and messages | the fetch message only |
//! | [`Inspector::full_check`] | status, messages, categories, entries | an empty snapshot |
//! | [`Inspector::compare`] | status, warnings, `hasChanges`, diff | n/a |

pub mod builder;
pub mod core;
pub mod request;

pub use builder::InspectorBuilder;
pub use core::Inspector;
pub use request::{CheckRequest, CompareRequest, FullCheckReport};
