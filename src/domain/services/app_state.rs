#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Conversation;
use super::MessageAction;
use super::Scroll;
use super::Sidebar;
use super::Theme;
use super::Themes;
use super::UpgradeDialog;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::CompletionResponse;
use crate::domain::models::Loading;
use crate::domain::models::MessageId;
use crate::domain::models::SessionId;
use crate::domain::models::SlashCommand;

/// Terminals narrower than this behave like the compact layout: opening a
/// new chat or picking one from the sidebar collapses the sidebar.
pub const NARROW_VIEWPORT_WIDTH: u16 = 90;

pub enum Overlay {
    Help,
    Upgrade(UpgradeDialog),
}

/// Render-side state. The `Conversation` is the source of truth; everything
/// else here is a projection of it plus purely visual toggles, resynced
/// after every mutation.
pub struct AppState<'a> {
    pub conversation: Conversation,
    pub bubble_list: BubbleList<'a>,
    pub scroll: Scroll,
    pub sidebar: Sidebar,
    pub overlay: Option<Overlay>,
    pub loading: Loading,
    pub theme: Theme,
    pub terminal_width: u16,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl<'a> AppState<'a> {
    pub fn new(theme_name: &str) -> Result<AppState<'a>> {
        let theme = Themes::get(theme_name)?;

        return Ok(AppState {
            conversation: Conversation::new(),
            bubble_list: BubbleList::new(theme),
            scroll: Scroll::default(),
            sidebar: Sidebar::default(),
            overlay: None,
            loading: Loading::default(),
            theme,
            terminal_width: 0,
            last_known_width: 0,
            last_known_height: 0,
        });
    }

    pub fn is_narrow(&self) -> bool {
        return self.terminal_width < NARROW_VIEWPORT_WIDTH;
    }

    pub fn set_rect(&mut self, rect: Rect, terminal_width: u16) {
        self.terminal_width = terminal_width;
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_conversation(&self.conversation, self.last_known_width as usize);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.conversation.is_generating() {
            self.scroll.jump_to_latest();
        }
    }

    /// Submits composed text. Returns true when a message was sent, telling
    /// the caller to clear the composer.
    pub fn submit(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let prompt = match self.conversation.submit(input) {
            Some(prompt) => prompt,
            None => return Ok(false),
        };

        tx.send(Action::CompletionRequest(prompt))?;
        self.sync_dependants();
        self.scroll.jump_to_latest();
        return Ok(true);
    }

    pub fn handle_completion(&mut self, response: &CompletionResponse) {
        self.conversation.complete(response);
        self.sync_dependants();
        self.scroll.jump_to_latest();
    }

    /// Aborts the in-flight reply, if any. Returns true when one was pending.
    pub fn abort_generation(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let session_id = match self.conversation.pending_session_id() {
            Some(id) => id,
            None => return Ok(false),
        };

        tx.send(Action::CompletionAbort(session_id))?;
        self.conversation.cancel_generation();
        self.sync_dependants();
        return Ok(true);
    }

    pub fn start_new_session(&mut self) {
        if !self.conversation.start_new_session() {
            return;
        }

        self.sync_dependants();
        if self.is_narrow() {
            self.sidebar.open = false;
        }
    }

    pub fn select_session(&mut self, id: SessionId) {
        if !self.conversation.select_session(id) {
            return;
        }

        self.sync_dependants();
        self.scroll.jump_to_latest();
        if self.is_narrow() {
            self.sidebar.open = false;
        }
    }

    pub fn select_neighbor_session(&mut self, offset: isize) {
        if let Some(id) = self.conversation.neighbor_session_id(offset) {
            self.select_session(id);
        }
    }

    pub fn regenerate(&mut self) {
        if self.conversation.regenerate_last() {
            self.sync_dependants();
            self.scroll.jump_to_latest();
        }
    }

    /// Resolves the assistant message a feedback command refers to: an
    /// explicit 1-based position, or the latest reply without one. User
    /// messages are never a valid target.
    fn feedback_target(&self, command: &SlashCommand) -> Option<MessageId> {
        if let Some(position) = command.position_arg() {
            let message = self.conversation.message_at(position)?;
            if message.author != Author::Assistant {
                return None;
            }
            return Some(message.id);
        }

        return self
            .conversation
            .last_assistant_message()
            .map(|message| return message.id);
    }

    fn toggle_feedback(&mut self, command: &SlashCommand, action: MessageAction) {
        if let Some(id) = self.feedback_target(command) {
            self.conversation.toggle_action(id, action);
            self.sync_dependants();
        }
    }

    fn copy_message(
        &mut self,
        command: &SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let id = match self.feedback_target(command) {
            Some(id) => id,
            None => return Ok(()),
        };

        let text = self
            .conversation
            .messages()
            .iter()
            .find(|message| return message.id == id)
            .map(|message| return message.text.to_string());

        self.conversation.toggle_action(id, MessageAction::Copy);
        if let Some(text) = text {
            tx.send(Action::CopyText(text))?;
        }
        self.sync_dependants();

        return Ok(());
    }

    /// Runs the input as a slash command when it parses as one. Returns
    /// `(should_break, handled)`: break ends the UI loop, handled means the
    /// composer should be cleared without submitting anything.
    pub fn handle_slash_commands(
        &mut self,
        input: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        let command = match SlashCommand::parse(input) {
            Some(command) => command,
            None => return Ok((false, false)),
        };

        if command.is_quit() {
            return Ok((true, true));
        }

        if command.is_help() {
            self.overlay = Some(Overlay::Help);
        } else if command.is_upgrade() {
            self.overlay = Some(Overlay::Upgrade(UpgradeDialog::default()));
        } else if command.is_new_chat() {
            self.start_new_session();
        } else if command.is_regenerate() {
            self.regenerate();
        } else if command.is_like() {
            self.toggle_feedback(&command, MessageAction::Like);
        } else if command.is_dislike() {
            self.toggle_feedback(&command, MessageAction::Dislike);
        } else if command.is_copy() {
            self.copy_message(&command, tx)?;
        }

        return Ok((false, true));
    }
}
