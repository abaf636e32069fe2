//! Per-session dialogue storage.
//!
//! Dialogue state is keyed by session ID so concurrent conversations
//! cannot interleave on one pending query. Dialogues are created lazily
//! on first touch.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::error::ChatError;
use crate::types::{CommissionDialogue, DialogueState};

/// Map from session ID to its commission dialogue state.
///
/// Only sessions with a sub-flow in progress occupy an entry; a dialogue
/// that ends a turn idle with nothing pending is dropped on write-back,
/// so anonymous one-shot requests do not accumulate.
#[derive(Default)]
pub struct SessionStore {
    dialogues: Mutex<HashMap<Uuid, CommissionDialogue>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the given session ID, or mint a fresh one.
    pub fn resolve(&self, session_id: Option<Uuid>) -> Uuid {
        session_id.unwrap_or_else(Uuid::new_v4)
    }

    /// Run `f` against the session's dialogue, creating it if absent.
    ///
    /// Entries that come out idle with no pending query are evicted so
    /// the map only holds sessions mid-sub-flow.
    pub fn with_dialogue<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut CommissionDialogue) -> R,
    ) -> Result<R, ChatError> {
        let mut dialogues = self
            .dialogues
            .lock()
            .map_err(|e| ChatError::SessionStore(format!("dialogue lock poisoned: {}", e)))?;
        let dialogue = dialogues.entry(session_id).or_default();
        let out = f(dialogue);
        if dialogue.state == DialogueState::Idle && dialogue.pending_query.is_none() {
            dialogues.remove(&session_id);
        }
        Ok(out)
    }

    /// Number of sessions with dialogue state (for diagnostics).
    pub fn session_count(&self) -> usize {
        self.dialogues.lock().map(|d| d.len()).unwrap_or(0)
    }
}
