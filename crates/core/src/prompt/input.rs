use log::debug;

use super::{question_line, Answer, Prompt};
use crate::config::{PromptConfig, PromptMode};
use crate::display::display_width;
use crate::prompt::frame::{Frame, SpanStyle};
use crate::state::{KeyAction, Phase};
use crate::tokenizer::Candidate;

/// Single line edit buffer with a cursor counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display width of the text left of the cursor.
    #[must_use]
    pub fn width_before_cursor(&self) -> usize {
        display_width(&self.text[..self.byte_index(self.cursor)])
    }
}

/// Free text prompt; the candidates only serve to seed the buffer.
pub struct InputPrompt {
    message: String,
    buffer: TextBuffer,
    phase: Phase,
}

impl InputPrompt {
    /// Seeds the buffer with the configured default, else the first
    /// candidate trimmed, else nothing.
    ///
    /// Seeding types the text in, so the cursor ends up after it.
    pub fn new(config: &PromptConfig, candidates: &[Candidate]) -> Self {
        let seed = config
            .default
            .clone()
            .or_else(|| candidates.first().map(|c| c.value().trim().to_string()))
            .unwrap_or_default();
        debug!("Seeding input prompt with {} characters", seed.chars().count());

        let mut prompt = Self {
            message: config.message.clone(),
            buffer: TextBuffer::default(),
            phase: Phase::Idle,
        };
        for c in seed.chars() {
            prompt.edit(KeyAction::FilterInput(c));
        }
        prompt
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    fn edit(&mut self, action: KeyAction) {
        match action {
            KeyAction::FilterInput(c) => self.buffer.insert(c),
            KeyAction::DeleteBackward => self.buffer.delete_backward(),
            KeyAction::DeleteForward => self.buffer.delete_forward(),
            KeyAction::CursorLeft => self.buffer.move_left(),
            KeyAction::CursorRight => self.buffer.move_right(),
            KeyAction::CursorHome => self.buffer.move_home(),
            KeyAction::CursorEnd => self.buffer.move_end(),
            KeyAction::ClearLine => self.buffer.clear(),
            _ => {}
        }
    }
}

impl Prompt for InputPrompt {
    fn mode(&self) -> PromptMode {
        PromptMode::Input
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn handle(&mut self, action: KeyAction) -> Phase {
        if self.phase.is_terminal() {
            return self.phase;
        }
        self.phase = Phase::Navigating;

        match action {
            KeyAction::Submit => self.phase = Phase::Submitted,
            KeyAction::Cancel => {
                self.buffer.clear();
                self.phase = Phase::Cancelled;
            }
            other => self.edit(other),
        }

        self.phase
    }

    fn render(&self) -> Frame {
        let mut frame = Frame::default();
        let header = question_line(&self.message);
        let column = header.width() + self.buffer.width_before_cursor();

        frame.push(header.push(self.buffer.text(), SpanStyle::Plain));
        frame.cursor = u16::try_from(column).ok().map(|column| (column, 0));
        frame
    }

    fn resize(&mut self, _columns: u16, _rows: u16) {}

    fn answer(&self) -> Option<Answer> {
        (self.phase == Phase::Submitted).then(|| Answer::Single(self.buffer.text().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, RawInput};

    fn input_prompt(input: &str, default: Option<&str>) -> InputPrompt {
        let candidates = tokenize(&RawInput::from(input), "\n").unwrap();
        let config = PromptConfig {
            default: default.map(ToString::to_string),
            ..PromptConfig::new(PromptMode::Input)
        };
        InputPrompt::new(&config, &candidates)
    }

    #[test]
    fn test_seed_from_default() {
        let prompt = input_prompt("foo\nbar", Some("explicit"));
        assert_eq!(prompt.buffer().text(), "explicit");
        assert_eq!(prompt.buffer().cursor(), 8);
        assert_eq!(prompt.phase(), Phase::Idle);
    }

    #[test]
    fn test_seed_from_first_item_trimmed() {
        let prompt = input_prompt("  foo  \nbar", None);
        assert_eq!(prompt.buffer().text(), "foo");
    }

    #[test]
    fn test_seed_empty() {
        let prompt = input_prompt("", None);
        assert_eq!(prompt.buffer().text(), "");
        assert_eq!(prompt.buffer().cursor(), 0);
    }

    #[test]
    fn test_editing() {
        let mut prompt = input_prompt("", Some("héllo"));
        prompt.handle(KeyAction::CursorHome);
        prompt.handle(KeyAction::DeleteForward);
        prompt.handle(KeyAction::FilterInput('H'));
        prompt.handle(KeyAction::CursorEnd);
        prompt.handle(KeyAction::DeleteBackward);
        prompt.handle(KeyAction::CursorLeft);
        prompt.handle(KeyAction::FilterInput('!'));
        prompt.handle(KeyAction::CursorRight);
        prompt.handle(KeyAction::CursorRight);
        prompt.handle(KeyAction::FilterInput('?'));
        assert_eq!(prompt.buffer().text(), "Hél!l?");

        prompt.handle(KeyAction::MoveDown);
        assert_eq!(prompt.handle(KeyAction::Submit), Phase::Submitted);
        assert_eq!(prompt.answer(), Some(Answer::Single("Hél!l?".to_string())));
    }

    #[test]
    fn test_clear_line() {
        let mut prompt = input_prompt("foo", None);
        prompt.handle(KeyAction::ClearLine);
        prompt.handle(KeyAction::Submit);
        assert_eq!(prompt.answer(), Some(Answer::Single(String::new())));
    }

    #[test]
    fn test_render_cursor_position() {
        let mut prompt = input_prompt("", Some("日本"));
        prompt.handle(KeyAction::CursorLeft);
        let frame = prompt.render();
        assert_eq!(frame.to_text(), "? Enter a value: 日本");
        assert_eq!(frame.cursor, Some((19, 0)));
    }

    #[test]
    fn test_cancel_has_no_answer() {
        let mut prompt = input_prompt("foo", None);
        prompt.handle(KeyAction::Cancel);
        assert_eq!(prompt.answer(), None);
        assert_eq!(prompt.handle(KeyAction::FilterInput('x')), Phase::Cancelled);
    }
}
