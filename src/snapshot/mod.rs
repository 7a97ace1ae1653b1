//! 快照层：把一次检查的结果规范化为可比较的记录。
//!
//! Normalized, timestamped records of one check.

pub mod builder;
pub mod model;

pub use builder::{build, build_at, build_empty, build_empty_at, format_timestamp};
pub use model::{Categories, Entries, SkillSummary, Snapshot};
