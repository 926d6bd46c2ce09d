#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::HashMap;
use std::collections::HashSet;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use super::BubbleFlags;
use super::Conversation;
use super::MessageAction;
use super::Theme;
use crate::domain::models::Author;
use crate::domain::models::MessageId;

struct BubbleCacheEntry<'a> {
    flags: BubbleFlags,
    text_len: usize,
    lines: Vec<Line<'a>>,
}

/// Renders the visible thread as bubbles, caching rendered lines per message
/// id. Entries are rebuilt when the width, the message text, or the feedback
/// flags change.
pub struct BubbleList<'a> {
    cache: HashMap<MessageId, BubbleCacheEntry<'a>>,
    order: Vec<MessageId>,
    line_width: usize,
    lines_len: usize,
    theme: Theme,
}

impl<'a> BubbleList<'a> {
    pub fn new(theme: Theme) -> BubbleList<'a> {
        return BubbleList {
            cache: HashMap::new(),
            order: vec![],
            line_width: 0,
            lines_len: 0,
            theme,
        };
    }

    pub fn set_conversation(&mut self, conversation: &Conversation, line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        self.order = conversation
            .messages()
            .iter()
            .map(|message| return message.id)
            .collect();

        let visible: HashSet<MessageId> = self.order.iter().copied().collect();
        self.cache.retain(|id, _| return visible.contains(id));

        self.lines_len = conversation
            .messages()
            .iter()
            .map(|message| {
                let flags = BubbleFlags {
                    liked: conversation.action_state(message.id, MessageAction::Like),
                    disliked: conversation.action_state(message.id, MessageAction::Dislike),
                    copied: conversation.action_state(message.id, MessageAction::Copy),
                };

                if let Some(entry) = self.cache.get(&message.id) {
                    if entry.text_len == message.text.len() && entry.flags == flags {
                        return entry.lines.len();
                    }
                }

                let mut alignment = BubbleAlignment::Left;
                if message.author == Author::User {
                    alignment = BubbleAlignment::Right;
                }

                let lines =
                    Bubble::new(message, alignment, flags, line_width).as_lines(&self.theme);
                let lines_count = lines.len();

                self.cache.insert(
                    message.id,
                    BubbleCacheEntry {
                        flags,
                        text_len: message.text.len(),
                        lines,
                    },
                );

                return lines_count;
            })
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let lines: Vec<Line<'a>> = self
            .order
            .iter()
            .filter_map(|id| return self.cache.get(id))
            .flat_map(|entry| return entry.lines.to_owned())
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
