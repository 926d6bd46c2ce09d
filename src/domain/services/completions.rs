use std::collections::HashMap;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::clipboard::ClipboardService;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::ResponderName;
use crate::domain::models::SessionId;
use crate::infrastructure::responders::ResponderManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /new (/n) - Start a new chat. Ignored while the current chat has no messages.
- /like [MESSAGE_NUMBER?] (/l) - Toggle the thumbs-up marker on an assistant reply. Defaults to the latest reply.
- /dislike [MESSAGE_NUMBER?] (/d) - Toggle the thumbs-down marker on an assistant reply. Defaults to the latest reply.
- /copy [MESSAGE_NUMBER?] (/c) - Copy an assistant reply to your clipboard. Defaults to the latest reply.
- /regenerate (/r) - Replace the latest assistant reply with a fresh one.
- /upgrade (/u, /plans) - Show the plans overlay.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Mockingbird.

HOTKEYS:
- Enter - Send the composed message.
- Shift+Enter - Insert a line break instead of sending.
- Up/Down arrows, mouse wheel - Scroll the thread.
- CTRL+U / CTRL+D - Page up / page down.
- CTRL+N - Start a new chat.
- CTRL+B - Toggle the chat sidebar.
- ALT+Up / ALT+Down - Switch to the previous / next chat.
- CTRL+R - Regenerate the latest assistant reply.
- CTRL+C - Abort a pending reply if one is in flight, otherwise exit.
- ESC - Close an open overlay.

MESSAGE_NUMBER counts messages in the visible thread from the top, starting at 1. Feedback commands quietly do nothing when the target is not an assistant reply.
        "#;

    return text.trim().to_string();
}

/// Background loop between the UI and the responder. Each completion runs on
/// its own task keyed by session id, so a resubmit into the same session or
/// an explicit abort cancels exactly that pending reply.
pub struct CompletionsService {}

impl CompletionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut workers: HashMap<SessionId, JoinHandle<Result<()>>> = HashMap::new();

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            match action.unwrap() {
                Action::CompletionAbort(session_id) => {
                    if let Some(worker) = workers.remove(&session_id) {
                        tracing::debug!(session_id = session_id, "aborting pending reply");
                        worker.abort();
                    }
                }
                Action::CompletionRequest(prompt) => {
                    if let Some(worker) = workers.remove(&prompt.session_id) {
                        worker.abort();
                    }

                    let worker_tx = tx.clone();
                    let session_id = prompt.session_id;
                    workers.insert(
                        session_id,
                        tokio::spawn(async move {
                            let name = ResponderName::parse(&Config::get(ConfigKey::Responder))?;
                            let res = ResponderManager::get(name)?
                                .generate(prompt, &worker_tx)
                                .await;

                            if let Err(err) = res {
                                tracing::error!(error = ?err, "responder failed to reply");
                            }

                            return Ok(());
                        }),
                    );
                }
                Action::CopyText(text) => {
                    if let Err(err) = ClipboardService::set(text) {
                        tracing::warn!(error = ?err, "clipboard copy failed");
                    }
                }
            }
        }
    }
}
