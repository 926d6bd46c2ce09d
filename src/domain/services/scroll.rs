use ratatui::widgets::ScrollbarState;

#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_length: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    fn page_size(&self) -> u16 {
        return (self.viewport_length / 2).max(1);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
        self.scrollbar_state.next();
    }

    pub fn up_page(&mut self) {
        for _ in 0..self.page_size() {
            self.up();
        }
    }

    pub fn down_page(&mut self) {
        for _ in 0..self.page_size() {
            self.down();
        }
    }

    /// The auto-scroll signal: pin the viewport to the newest line.
    pub fn jump_to_latest(&mut self) {
        self.position = self.max_position();
        self.scrollbar_state.last();
    }

    pub fn set_state(&mut self, content_length: u16, viewport_length: u16) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(content_length)
            .viewport_content_length(viewport_length);
    }
}
