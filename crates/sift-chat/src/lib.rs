//! Conversational core for Sift.
//!
//! Provides the commission dialogue router (multi-turn refinement of a
//! commissions query), per-session dialogue state, and the chat
//! orchestrator that composes classification, routing, SQL execution, and
//! chart normalization into one request/response cycle.

pub mod error;
pub mod orchestrator;
pub mod router;
pub mod session;
pub mod types;

pub use error::ChatError;
pub use orchestrator::ChatOrchestrator;
pub use router::{CommissionRouter, RouterOutcome};
pub use session::SessionStore;
pub use types::{ChatReply, CommissionDialogue, DialogueState};
