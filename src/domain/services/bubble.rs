#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::Theme;
use crate::domain::models::Author;
use crate::domain::models::Message;

// Left border + padding + padding + right border.
const BUBBLE_FRAME_CELLS: usize = 4;
// Minimum share of the window kept clear beside a bubble.
const OUTER_MARGIN_RATIO: f32 = 0.04;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

/// Feedback markers drawn into an assistant bubble's bottom border.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleFlags {
    pub liked: bool,
    pub disliked: bool,
    pub copied: bool,
}

impl BubbleFlags {
    fn markers(&self) -> String {
        let mut parts: Vec<&str> = vec![];
        if self.liked {
            parts.push("▲");
        }
        if self.disliked {
            parts.push("▽");
        }
        if self.copied {
            parts.push("⧉");
        }

        return parts.join(" ");
    }
}

pub struct Bubble<'a> {
    message: &'a Message,
    alignment: BubbleAlignment,
    flags: BubbleFlags,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        flags: BubbleFlags,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            message,
            alignment,
            flags,
            window_max_width,
        };
    }

    pub fn as_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let max_line_length = self.max_line_length();
        let style = self.border_style(theme);

        let mut lines = vec![self.bar_line(self.title_bar(max_line_length), max_line_length, style)];
        for text_line in self.message.as_string_lines(max_line_length) {
            lines.push(self.content_line(&text_line, max_line_length, style));
        }
        lines.push(self.bar_line(self.footer_bar(max_line_length), max_line_length, style));

        return lines;
    }

    /// Interior width: the longest source line, capped by the window budget
    /// and floored by the author name so the title always fits the top bar.
    fn max_line_length(&self) -> usize {
        let margin = ((self.window_max_width as f32) * OUTER_MARGIN_RATIO).ceil() as usize;
        let budget = self
            .window_max_width
            .saturating_sub(BUBBLE_FRAME_CELLS + margin);

        let mut longest = self
            .message
            .text
            .lines()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(0);
        if longest > budget {
            longest = budget;
        }

        let title_length = self.message.author.to_string().chars().count();
        if longest < title_length {
            longest = title_length;
        }

        return longest;
    }

    fn border_style(&self, theme: &Theme) -> Style {
        if self.message.author == Author::Assistant {
            return Style::default().fg(theme.assistant);
        }

        return Style::default().fg(theme.user);
    }

    fn title_bar(&self, max_line_length: usize) -> String {
        let title = self.message.author.to_string();
        let dashes = "─".repeat(max_line_length + 2 - title.chars().count());
        return format!("╭{title}{dashes}╮");
    }

    fn footer_bar(&self, max_line_length: usize) -> String {
        let markers = self.flags.markers();
        if markers.is_empty() || self.message.author != Author::Assistant {
            return format!("╰{}╯", "─".repeat(max_line_length + 2));
        }

        let dashes =
            "─".repeat((max_line_length + 2).saturating_sub(markers.chars().count()));
        return format!("╰{markers}{dashes}╯");
    }

    fn outer_padding(&self, max_line_length: usize) -> String {
        return " ".repeat(
            self.window_max_width
                .saturating_sub(max_line_length + BUBBLE_FRAME_CELLS),
        );
    }

    fn bar_line(&self, bar: String, max_line_length: usize, style: Style) -> Line<'static> {
        let padding = Span::from(self.outer_padding(max_line_length));
        if self.alignment == BubbleAlignment::Left {
            return Line::from(vec![Span::styled(bar, style), padding]);
        }

        return Line::from(vec![padding, Span::styled(bar, style)]);
    }

    fn content_line(&self, text: &str, max_line_length: usize, style: Style) -> Line<'static> {
        let fill = " ".repeat(max_line_length.saturating_sub(text.chars().count()));
        let mut spans = vec![
            Span::styled("│ ".to_string(), style),
            Span::from(text.to_owned()),
            Span::styled(format!("{fill} │"), style),
        ];

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(self.outer_padding(max_line_length)));
            return Line::from(spans);
        }

        let mut padded = vec![Span::from(self.outer_padding(max_line_length))];
        padded.append(&mut spans);
        return Line::from(padded);
    }
}
