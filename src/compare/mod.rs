//! 快照比较：六个维度的差异与完整性警告。
//!
//! Snapshot comparison.
//!
//! | Facet | Source | Shape |
//! |-------|--------|-------|
//! | identity | `entries.agentName/agentVersion/agentDescription` | `changed` |
//! | capabilities | `categories.supportsStreaming/...PushNotifications/...ExtendedCard` | `changed` |
//! | skills | `entries.skills` by id | `added/removed/modified` |
//! | interfaces | `entries.protocolBindings` | `added/removed` |
//! | security | `entries.securitySchemes` keys | `added/removed` |
//! | categories | every `categories` flag | `changed` |

pub mod engine;
pub mod model;

pub use engine::{
    check_integrity, compare, diff_capabilities, diff_categories, diff_identity, diff_interfaces,
    diff_security, diff_skills,
};
pub use model::{
    Comparison, FieldChange, FieldDiff, SetDiff, SkillModification, SkillsDiff, SnapshotDiff,
};
