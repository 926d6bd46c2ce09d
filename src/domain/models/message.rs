#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;

pub type MessageId = u64;

/// A single chat entry. Immutable once created; regeneration replaces the
/// whole message rather than editing it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub author: Author,
    pub text: String,
}

impl Message {
    pub fn new(id: MessageId, author: Author, text: &str) -> Message {
        return Message {
            id,
            author,
            text: text.to_string().replace('\t', "  "),
        };
    }

    /// Word-wraps the message for a bubble interior of the given width.
    /// Blank source lines survive as single-space lines so paragraph breaks
    /// keep their height.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = vec![];

        for paragraph in self.text.split('\n') {
            if paragraph.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut current = String::new();
            for word in paragraph.split(' ') {
                let fits =
                    current.chars().count() + word.chars().count() + 1 <= line_max_width;
                if !current.is_empty() && !fits {
                    lines.push(current.trim_end().to_string());
                    current = String::new();
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }

            if !current.is_empty() {
                lines.push(current.trim_end().to_string());
            }
        }

        return lines;
    }
}
