#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use std::collections::HashMap;

use serde_derive::Serialize;

use crate::domain::models::Author;
use crate::domain::models::CompletionResponse;
use crate::domain::models::Message;
use crate::domain::models::MessageId;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::Session;
use crate::domain::models::SessionId;

pub const REGENERATED_RESPONSE: &str = "This is a regenerated AI response.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MessageAction {
    Copy,
    Dislike,
    Like,
}

/// The single authority over chat sessions, the visible thread, and
/// per-message feedback toggles. Holds no rendering state and performs no IO,
/// so every operation here runs under plain unit tests.
///
/// `messages` mirrors the active session's stored messages and is kept in
/// sync on every mutation; the two must never diverge.
#[derive(Default, Serialize)]
pub struct Conversation {
    sessions: Vec<Session>,
    active: Option<SessionId>,
    messages: Vec<Message>,
    generating: bool,
    pending: Option<SessionId>,
    feedback: HashMap<(MessageId, MessageAction), bool>,
    next_message_id: MessageId,
}

impl Conversation {
    pub fn new() -> Conversation {
        return Conversation::default();
    }

    /// Sessions in display order, newest first.
    pub fn sessions(&self) -> &[Session] {
        return &self.sessions;
    }

    pub fn active_session_id(&self) -> Option<SessionId> {
        return self.active;
    }

    /// The visible thread.
    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn is_generating(&self) -> bool {
        return self.generating;
    }

    /// The session a pending reply will land in, if one is in flight.
    pub fn pending_session_id(&self) -> Option<SessionId> {
        return self.pending;
    }

    /// True before the first message of the first chat: no active session and
    /// nothing on screen. Distinct from an active session with zero messages.
    pub fn is_empty(&self) -> bool {
        return self.active.is_none() && self.messages.is_empty();
    }

    fn alloc_message_id(&mut self) -> MessageId {
        self.next_message_id += 1;
        return self.next_message_id;
    }

    fn active_session_mut(&mut self) -> Option<&mut Session> {
        let id = self.active?;
        return self.sessions.iter_mut().find(|session| return session.id == id);
    }

    /// Appends a user message to the active session, creating and activating
    /// one when none exists. Returns the prompt to hand to the responder, or
    /// `None` for empty input. Sets the generating flag; the caller clears
    /// the composer and scrolls to the latest message.
    pub fn submit(&mut self, text: &str) -> Option<ResponderPrompt> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let message = Message::new(self.alloc_message_id(), Author::User, text);
        let session_id = match self.active {
            Some(id) => {
                self.messages.push(message.clone());
                if let Some(session) = self.active_session_mut() {
                    session.messages.push(message);
                }
                id
            }
            None => {
                // Ids are session_count + 1. Unique only because sessions are
                // never deleted in scope.
                let mut session = Session::new(self.sessions.len() + 1);
                session.messages.push(message.clone());
                let id = session.id;
                self.sessions.insert(0, session);
                self.active = Some(id);
                self.messages = vec![message];
                id
            }
        };

        self.generating = true;
        self.pending = Some(session_id);
        return Some(ResponderPrompt::new(session_id, trimmed));
    }

    /// The deferred completion. The reply lands in the session named by the
    /// response, which is the session that was active at submit time. When
    /// that session has since been deselected its stored thread still gets
    /// the reply and only the visible mirror is skipped. Replies tagged with
    /// a session that does not exist are dropped.
    pub fn complete(&mut self, response: &CompletionResponse) {
        let message = Message::new(
            self.alloc_message_id(),
            response.author.clone(),
            &response.text,
        );

        let session = self
            .sessions
            .iter_mut()
            .find(|session| return session.id == response.session_id);
        if let Some(session) = session {
            session.messages.push(message.clone());
            if self.active == Some(response.session_id) {
                self.messages.push(message);
            }
        }

        self.generating = false;
        self.pending = None;
    }

    /// Clears the generating flag after the pending worker was aborted.
    pub fn cancel_generation(&mut self) {
        self.generating = false;
        self.pending = None;
    }

    /// Prepends an empty session and activates it. No-op while the visible
    /// thread is empty, which also covers the no-active-session state.
    pub fn start_new_session(&mut self) -> bool {
        if self.messages.is_empty() {
            return false;
        }

        let session = Session::new(self.sessions.len() + 1);
        self.active = Some(session.id);
        self.sessions.insert(0, session);
        self.messages.clear();
        return true;
    }

    /// Unconditionally swaps the active session and the visible thread. No
    /// merge and no confirmation, even mid-generation.
    pub fn select_session(&mut self, id: SessionId) -> bool {
        let messages = match self.sessions.iter().find(|session| return session.id == id) {
            Some(session) => session.messages.clone(),
            None => return false,
        };

        self.active = Some(id);
        self.messages = messages;
        return true;
    }

    /// The session id `offset` rows away from the active one in display
    /// order. With nothing active, any downward step lands on the newest
    /// session.
    pub fn neighbor_session_id(&self, offset: isize) -> Option<SessionId> {
        if self.sessions.is_empty() {
            return None;
        }

        let current = match self.active {
            Some(id) => self
                .sessions
                .iter()
                .position(|session| return session.id == id)?,
            None => return Some(self.sessions[0].id),
        };

        let target = current.checked_add_signed(offset)?;
        return self.sessions.get(target).map(|session| return session.id);
    }

    /// Replaces the last visible message with a fresh assistant reply, in
    /// both the mirror and the stored session. No-op unless the last message
    /// is an assistant one. The replacement gets a new id, so feedback on the
    /// old reply is deliberately orphaned.
    pub fn regenerate_last(&mut self) -> bool {
        match self.messages.last() {
            Some(message) if message.author == Author::Assistant => {}
            _ => return false,
        }

        let replacement = Message::new(
            self.alloc_message_id(),
            Author::Assistant,
            REGENERATED_RESPONSE,
        );

        if let Some(last) = self.messages.last_mut() {
            *last = replacement.clone();
        }
        if let Some(session) = self.active_session_mut() {
            if let Some(last) = session.messages.last_mut() {
                *last = replacement;
            }
        }

        return true;
    }

    /// Flips a feedback flag and returns its new value.
    pub fn toggle_action(&mut self, id: MessageId, action: MessageAction) -> bool {
        let flag = self.feedback.entry((id, action)).or_insert(false);
        *flag = !*flag;
        return *flag;
    }

    pub fn action_state(&self, id: MessageId, action: MessageAction) -> bool {
        return self.feedback.get(&(id, action)).copied().unwrap_or(false);
    }

    /// 1-based lookup into the visible thread.
    pub fn message_at(&self, position: usize) -> Option<&Message> {
        if position == 0 {
            return None;
        }

        return self.messages.get(position - 1);
    }

    pub fn last_assistant_message(&self) -> Option<&Message> {
        return self
            .messages
            .iter()
            .rev()
            .find(|message| return message.author == Author::Assistant);
    }
}
