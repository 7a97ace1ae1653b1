//! 智能体卡片层：卡片模型、结构校验与能力分类。
//!
//! # Agent Card Layer
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | Loosely-typed card model with explicit field presence |
//! | [`structure`] | Staged structure validation with coded messages |
//! | [`classifier`] | Projection of a card onto the fixed category flags |

pub mod classifier;
pub mod document;
pub mod structure;

pub use classifier::classify;
pub use document::{
    AgentCapabilities, AgentDocument, AgentInterface, AgentProvider, AgentSkill, Field,
};
pub use structure::validate_structure;
