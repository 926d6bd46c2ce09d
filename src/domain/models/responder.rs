use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use super::Author;
use super::Event;
use super::SessionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ResponderName {
    Canned,
}

impl ResponderName {
    pub fn parse(text: &str) -> Result<ResponderName> {
        let name = ResponderName::iter().find(|e| return e.to_string() == text);
        if let Some(name) = name {
            return Ok(name);
        }

        bail!(format!("{text} is not a valid responder"))
    }
}

/// A submitted prompt, tagged with the session it was submitted from so the
/// reply can be routed back to that session no matter what is active when it
/// lands.
pub struct ResponderPrompt {
    pub session_id: SessionId,
    pub text: String,
}

impl ResponderPrompt {
    pub fn new(session_id: SessionId, text: &str) -> ResponderPrompt {
        return ResponderPrompt {
            session_id,
            text: text.to_string(),
        };
    }
}

pub struct CompletionResponse {
    pub session_id: SessionId,
    pub author: Author,
    pub text: String,
}

/// Produces assistant replies. There is no model behind this seam in scope;
/// implementations simulate one.
#[async_trait]
pub trait Responder {
    fn name(&self) -> ResponderName;

    /// Delivers a single completion event for the prompt. Implementations
    /// own their latency; callers own cancellation by aborting the task this
    /// runs on.
    async fn generate<'a>(
        &self,
        prompt: ResponderPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}
