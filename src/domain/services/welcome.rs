use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Theme;

const SUGGESTIONS: [&str; 4] = [
    "Create image",
    "Analyze data",
    "Brainstorm",
    "Summarize text",
];

/// Empty-state pane shown before the first message of the first chat.
pub struct Welcome {}

impl Welcome {
    pub fn render<B: Backend>(frame: &mut Frame<B>, rect: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Percentage(30),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(rect);

        frame.render_widget(
            Paragraph::new("What can I help with?")
                .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            rows[1],
        );

        let tile_rows = [rows[2], rows[3]];
        for (row_idx, row) in tile_rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Percentage(20),
                    Constraint::Percentage(30),
                    Constraint::Percentage(30),
                    Constraint::Percentage(20),
                ])
                .split(*row);

            for (col_idx, column) in columns.iter().skip(1).take(2).enumerate() {
                frame.render_widget(
                    Paragraph::new(SUGGESTIONS[row_idx * 2 + col_idx])
                        .style(Style::default().fg(theme.dim))
                        .alignment(Alignment::Center)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_type(BorderType::Rounded),
                        ),
                    *column,
                );
            }
        }
    }
}
