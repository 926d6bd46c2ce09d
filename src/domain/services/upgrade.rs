use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use super::Theme;
use crate::domain::models::Plan;
use crate::domain::models::PlanAudience;

/// Centers a fixed-size overlay on the frame, clamped to the frame size.
pub fn overlay_area(frame_size: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_size.width);
    let height = height.min(frame_size.height);

    return Rect {
        x: frame_size.x + (frame_size.width - width) / 2,
        y: frame_size.y + (frame_size.height - height) / 2,
        width,
        height,
    };
}

/// The pricing overlay. Presentational only: the audience tabs flip a
/// highlight and nothing else, and no plan can actually be purchased.
pub struct UpgradeDialog {
    pub audience: PlanAudience,
}

impl Default for UpgradeDialog {
    fn default() -> UpgradeDialog {
        return UpgradeDialog {
            audience: PlanAudience::Personal,
        };
    }
}

impl UpgradeDialog {
    pub fn toggle_audience(&mut self) {
        self.audience = self.audience.toggled();
    }

    fn audience_tabs(&self, theme: &Theme) -> Line<'static> {
        let audiences = [PlanAudience::Personal, PlanAudience::Business];
        let mut spans: Vec<Span> = vec![];

        for audience in audiences {
            let mut style = Style::default().fg(theme.dim);
            if audience == self.audience {
                style = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
            }

            spans.push(Span::styled(format!("[ {} ]", audience.label()), style));
            spans.push(Span::from("  "));
        }

        return Line::from(spans);
    }

    fn plan_card(&self, plan: &Plan, theme: &Theme) -> Paragraph<'static> {
        let mut cta_style = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        if plan.current {
            cta_style = Style::default().fg(theme.dim);
        }

        let mut lines = vec![
            Line::from(Span::styled(
                plan.name.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                plan.price.to_string(),
                Style::default().fg(theme.text),
            )),
            Line::from(Span::styled(
                plan.blurb.to_string(),
                Style::default().fg(theme.dim),
            )),
            Line::from(""),
            Line::from(Span::styled(plan.cta.to_string(), cta_style)),
            Line::from(""),
        ];

        for feature in &plan.features {
            lines.push(Line::from(Span::styled(
                format!("· {feature}"),
                Style::default().fg(theme.text),
            )));
        }

        return Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, theme: &Theme) {
        let area = overlay_area(frame.size(), 64, 22);
        frame.render_widget(Clear, area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Upgrade your plan")
            .padding(Padding::new(1, 1, 0, 0));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.audience_tabs(theme)), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        for (idx, plan) in Plan::catalog().iter().enumerate() {
            frame.render_widget(self.plan_card(plan, theme), columns[idx]);
        }

        frame.render_widget(
            Paragraph::new("tab switches audience · esc closes")
                .style(Style::default().fg(theme.dim))
                .alignment(Alignment::Center),
            rows[3],
        );
    }
}
