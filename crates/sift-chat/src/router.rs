//! Commission dialogue router.
//!
//! A small state machine that intercepts turns belonging to the
//! agent-commissions sub-flow. The first commissions query is cached and
//! the user is offered two literal refinements; the follow-up turn either
//! consolidates the query or drills into an upline manager.
//!
//! Priority rule: a non-Idle dialogue consumes the turn BEFORE intent
//! classification runs. Once a manager name is awaited, the next turn's
//! raw text is always the manager identifier, never re-classified.

use tracing::debug;

use crate::types::{ChatReply, CommissionDialogue, DialogueState};

/// Literal follow-up the user sends to consolidate the cached query.
pub const CHOICE_CONSOLIDATE: &str = "consolidate";
/// Literal follow-up the user sends to drill into an upline manager.
pub const CHOICE_UPLINE_MANAGER: &str = "upline manager";

const OFFER_RESPONSE: &str =
    "I can refine that commissions query for you. Would you like me to consolidate the \
     commissions, or break them down by a specific upline manager?";
const ASK_MANAGER_RESPONSE: &str =
    "Which upline manager? Please provide the manager's name or ID.";

/// What the router decided for one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterOutcome {
    /// Turn not consumed; continue with normal intent handling.
    Pass,
    /// Turn consumed; send this reply without touching the SQL pipeline.
    Reply(ChatReply),
    /// Turn consumed; run this modified query through the data pipeline.
    Dispatch(String),
}

/// Stateless transition logic over a [`CommissionDialogue`].
pub struct CommissionRouter;

impl CommissionRouter {
    /// Handle a turn while a sub-flow may be in progress.
    ///
    /// Called before intent classification on every turn. Idle dialogues
    /// always pass. Unrecognized input in `AwaitingChoice` abandons the
    /// sub-flow and passes the turn through.
    pub fn resume(dialogue: &mut CommissionDialogue, user_text: &str) -> RouterOutcome {
        match dialogue.state {
            DialogueState::Idle => RouterOutcome::Pass,
            DialogueState::AwaitingChoice => {
                let choice = user_text.trim().to_lowercase();
                if choice == CHOICE_CONSOLIDATE {
                    let pending = dialogue.pending_query.take().unwrap_or_default();
                    dialogue.state = DialogueState::Idle;
                    let modified = format!("{} and consolidate them", pending);
                    debug!(query = %modified, "Consolidate follow-up chosen");
                    RouterOutcome::Dispatch(modified)
                } else if choice == CHOICE_UPLINE_MANAGER {
                    // Keep the pending query; the next turn names the manager.
                    dialogue.state = DialogueState::AwaitingManagerName;
                    debug!("Upline-manager follow-up chosen");
                    RouterOutcome::Reply(ChatReply::text(ASK_MANAGER_RESPONSE))
                } else {
                    // Sub-flow abandoned; the turn is a fresh request.
                    dialogue.state = DialogueState::Idle;
                    dialogue.pending_query = None;
                    debug!("Choice not recognized; abandoning commissions sub-flow");
                    RouterOutcome::Pass
                }
            }
            DialogueState::AwaitingManagerName => {
                let pending = dialogue.pending_query.take().unwrap_or_default();
                dialogue.state = DialogueState::Idle;
                let modified = format!("{} for upline manager {}", pending, user_text.trim());
                debug!(query = %modified, "Manager name received");
                RouterOutcome::Dispatch(modified)
            }
        }
    }

    /// Open the sub-flow for a freshly classified commissions query.
    ///
    /// Caches the query text and offers the two refinement choices; the
    /// SQL pipeline is not contacted this turn.
    pub fn begin(dialogue: &mut CommissionDialogue, user_text: &str) -> ChatReply {
        dialogue.state = DialogueState::AwaitingChoice;
        dialogue.pending_query = Some(user_text.to_string());
        debug!("Commissions sub-flow opened");
        ChatReply::choices(
            OFFER_RESPONSE,
            vec!["Consolidate".to_string(), "Upline Manager".to_string()],
        )
    }
}
