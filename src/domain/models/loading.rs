use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Footer indicator shown while a reply is pending. Animated by UI ticks.
#[derive(Default)]
pub struct Loading {
    frame: usize,
}

impl Loading {
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, style: Style) {
        let dots = ".".repeat(self.frame % 3 + 1);
        frame.render_widget(Paragraph::new(format!("Thinking{dots}")).style(style), rect);
    }
}
