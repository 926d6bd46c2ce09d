#[cfg(test)]
#[path = "canned_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::CompletionResponse;
use crate::domain::models::Event;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;

pub const SIMULATED_RESPONSE: &str = "This is a simulated AI response to your message.";

/// Stand-in for a model backend: waits out the configured latency, then
/// replies with a fixed line tagged with the prompt's session.
#[derive(Default)]
pub struct Canned {}

#[async_trait]
impl Responder for Canned {
    fn name(&self) -> ResponderName {
        return ResponderName::Canned;
    }

    async fn generate<'a>(
        &self,
        prompt: ResponderPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        let delay = Config::get(ConfigKey::ResponseDelay).parse::<u64>()?;
        time::sleep(Duration::from_millis(delay)).await;

        tracing::debug!(session_id = prompt.session_id, "sending canned reply");
        tx.send(Event::CompletionResponse(CompletionResponse {
            session_id: prompt.session_id,
            author: Author::Assistant,
            text: SIMULATED_RESPONSE.to_string(),
        }))?;

        return Ok(());
    }
}
