use super::ResponderPrompt;
use super::SessionId;

pub enum Action {
    CompletionAbort(SessionId),
    CompletionRequest(ResponderPrompt),
    CopyText(String),
}
