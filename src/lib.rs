//! # agent-card-inspector
//!
//! 抓取远端智能体发布的 Agent Card，校验其结构、归类其能力，并比较两次检查的快照。
//!
//! Fetches the agent card a remote agent publishes, validates its structure,
//! classifies its capabilities and diffs snapshots taken by two checks.
//!
//! ## Overview
//!
//! An agent card is a JSON self-description served at a well-known path. The card
//! comes from a party we do not control, so every problem with it is an expected
//! outcome, reported as data: a `status` flag and a list of coded messages.
//! Only mistakes by the caller (bad parameters, malformed snapshots) are errors.
//!
//! ## Operations
//!
//! - **Quick check**: fetch and validate; returns `{status, messages}`
//! - **Full check**: fetch, validate, classify and snapshot; the snapshot is produced
//!   even when the card is unreachable or broken
//! - **Compare**: diff two snapshots across six facets with integrity warnings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agent_card_inspector::{CheckRequest, Inspector};
//!
//! #[tokio::main]
//! async fn main() -> agent_card_inspector::Result<()> {
//!     let inspector = Inspector::new()?;
//!
//!     let report = inspector
//!         .full_check(&CheckRequest::new("https://agent.example.com").with_timeout(5000))
//!         .await?;
//!     for message in &report.messages {
//!         println!("{message}");
//!     }
//!
//!     // Later: compare against a fresh check
//!     let later = inspector
//!         .full_check(&CheckRequest::new("https://agent.example.com"))
//!         .await?;
//!     let comparison = inspector.compare_snapshots(&report.snapshot(), &later.snapshot());
//!     println!("changed: {}", comparison.has_changes);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`inspector`] | Quick check, full check and comparison entry points |
//! | [`validation`] | Caller-input validation and [`ValidationResult`] |
//! | [`card`] | Card model, structure validation and capability classification |
//! | [`snapshot`] | Snapshot records and building |
//! | [`compare`] | Facet diffs and integrity warnings |
//! | [`transport`] | Card fetching over HTTP |
//! | [`config`] | Runtime configuration |
//! | [`error_code`] | Stable message codes |

pub mod card;
pub mod compare;
pub mod config;
pub mod error_code;
pub mod inspector;
pub mod snapshot;
pub mod transport;
pub mod validation;

// Re-export main types for convenience
pub use compare::Comparison;
pub use config::InspectorConfig;
pub use error_code::{Message, MessageCode};
pub use inspector::{CheckRequest, CompareRequest, FullCheckReport, Inspector, InspectorBuilder};
pub use snapshot::{Categories, Entries, Snapshot};
pub use transport::{CardFetcher, FetchError, HttpCardFetcher};
pub use validation::ValidationResult;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
