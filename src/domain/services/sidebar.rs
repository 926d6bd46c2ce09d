use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Conversation;
use super::Theme;

/// The session list panel. Newest chat first, active chat highlighted.
#[derive(Default)]
pub struct Sidebar {
    pub open: bool,
}

impl Sidebar {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn render<B: Backend>(
        &self,
        frame: &mut Frame<B>,
        rect: Rect,
        conversation: &Conversation,
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Chats");

        if conversation.sessions().is_empty() {
            frame.render_widget(
                Paragraph::new("No chats yet")
                    .style(Style::default().fg(theme.dim))
                    .block(block),
                rect,
            );
            return;
        }

        let items = conversation
            .sessions()
            .iter()
            .map(|session| {
                let mut style = Style::default().fg(theme.text);
                if conversation.active_session_id() == Some(session.id) {
                    style = Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD);
                }

                return ListItem::new(Line::from(Span::styled(
                    session.title.to_string(),
                    style,
                )));
            })
            .collect::<Vec<ListItem>>();

        frame.render_widget(List::new(items).block(block), rect);
    }
}
