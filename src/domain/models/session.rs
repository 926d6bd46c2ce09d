use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Message;

pub type SessionId = usize;

/// One conversation thread. Sessions only live for the lifetime of the
/// process; there is no save or restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new(id: SessionId) -> Session {
        return Session {
            id,
            title: format!("New Chat {id}"),
            messages: vec![],
        };
    }
}
