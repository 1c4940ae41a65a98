//! DataBounty - Marketplace for paid data-collection bounties
//!
//! Requesters post bounties with a fixed reward. Hunters upload data against
//! them and requesters settle each submission once.
//!
//! # How it works
//!
//! 1. A requester posts a bounty (title, requirements, category, reward, tags)
//! 2. Hunters submit files; only file metadata (name, size, type) is kept
//! 3. The requester pays each submission in full or in part, or rejects it
//! 4. Payouts are debited from the requester's balance
//!
//! # Guarantees
//!
//! - A submission is settled at most once; a second payout is refused
//! - A bounty's submission count is always computed from its submissions
//! - Every operation receives the acting user explicitly
//!
//! Requirement refinement and strategy suggestions are delegated to a hosted
//! text model and degrade to fallbacks when it is unavailable.

pub mod advisory;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod seed;
pub mod server;
pub mod session;
pub mod storage;
pub mod types;

pub use advisory::{AdvisoryService, GeminiClient, TextGenerator, NO_STRATEGY};
pub use config::Config;
pub use error::{MarketError, MarketResult};
pub use lifecycle::Marketplace;
pub use session::Session;
pub use storage::MarketStorage;
pub use types::{
    format_size, Bounty, BountyDraft, BountyStatus, FileKind, PayoutKind, Role, Submission,
    SubmissionFile, SubmissionStatus, User,
};
