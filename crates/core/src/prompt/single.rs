use super::{question_line, Answer, Choices, Prompt, POINTER};
use crate::config::{PromptConfig, PromptMode};
use crate::prompt::frame::{Frame, Line, SpanStyle};
use crate::state::{KeyAction, Phase};
use crate::tokenizer::Candidate;

/// One of N, moved through with the arrow keys.
pub struct SinglePrompt {
    message: String,
    choices: Choices,
}

impl SinglePrompt {
    pub fn new(config: &PromptConfig, candidates: Vec<Candidate>, columns: u16, rows: u16) -> Self {
        let mut choices = Choices::new(candidates, config.page_size, columns, rows);
        if let Some(default) = config.default_values().first() {
            choices.point_at_default(default);
        }

        Self {
            message: config.message.clone(),
            choices,
        }
    }
}

impl Prompt for SinglePrompt {
    fn mode(&self) -> PromptMode {
        PromptMode::Single
    }

    fn phase(&self) -> Phase {
        self.choices.state.phase()
    }

    fn handle(&mut self, action: KeyAction) -> Phase {
        let state = &mut self.choices.state;
        if state.phase().is_terminal() {
            return state.phase();
        }
        state.begin();

        match action {
            KeyAction::MoveUp => state.move_up(),
            KeyAction::MoveDown => state.move_down(),
            KeyAction::Submit if state.current().is_some() => state.submit(),
            KeyAction::Cancel => state.cancel(),
            _ => {}
        }

        state.phase()
    }

    fn render(&self) -> Frame {
        let mut frame = Frame::default();

        let mut header = question_line(&self.message);
        if self.phase() == Phase::Idle {
            header = header.push("(Use arrow keys)", SpanStyle::Hint);
        }
        frame.push(header);

        for (index, is_cursor) in self.choices.page() {
            let label = self.choices.candidates[index].label();
            let line = if is_cursor {
                Line::new()
                    .push(format!("{POINTER} "), SpanStyle::Pointer)
                    .push(label, SpanStyle::Highlight)
                    .highlighted()
            } else {
                Line::new().push(format!("  {label}"), SpanStyle::Plain)
            };
            frame.push(line);
        }

        self.choices.push_paging_hint(&mut frame);
        frame
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        self.choices.resize(columns, rows);
    }

    fn answer(&self) -> Option<Answer> {
        if self.phase() != Phase::Submitted {
            return None;
        }
        self.choices.current_value().map(Answer::Single)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, RawInput};

    fn prompt(input: &str, config: &PromptConfig) -> SinglePrompt {
        let candidates = tokenize(&RawInput::from(input), "\n").unwrap();
        SinglePrompt::new(config, candidates, 80, 24)
    }

    #[test]
    fn test_select_after_moving() {
        let mut single = prompt("foo\nbar\nlorem\nipsum", &PromptConfig::default());
        for _ in 0..3 {
            single.handle(KeyAction::MoveDown);
        }
        assert_eq!(single.handle(KeyAction::Submit), Phase::Submitted);
        assert_eq!(single.answer(), Some(Answer::Single("ipsum".to_string())));
    }

    #[test]
    fn test_single_item_list() {
        let mut single = prompt("foo", &PromptConfig::default());
        single.handle(KeyAction::MoveDown);
        single.handle(KeyAction::Submit);
        assert_eq!(single.answer(), Some(Answer::Single("foo".to_string())));
    }

    #[test]
    fn test_toggle_is_ignored() {
        let mut single = prompt("foo\nbar", &PromptConfig::default());
        single.handle(KeyAction::ToggleCurrent);
        single.handle(KeyAction::FilterInput('b'));
        assert_eq!(single.phase(), Phase::Navigating);
        single.handle(KeyAction::Submit);
        assert_eq!(single.answer(), Some(Answer::Single("foo".to_string())));
    }

    #[test]
    fn test_default_moves_cursor() {
        let config = PromptConfig {
            default: Some("lorem".to_string()),
            ..PromptConfig::default()
        };
        let mut single = prompt("foo\nbar\n  lorem", &config);
        single.handle(KeyAction::Submit);
        assert_eq!(single.answer(), Some(Answer::Single("  lorem".to_string())));
    }

    #[test]
    fn test_submit_without_candidates_is_ignored() {
        let mut single = prompt("", &PromptConfig::default());
        assert_eq!(single.handle(KeyAction::Submit), Phase::Navigating);
        assert_eq!(single.answer(), None);
    }

    #[test]
    fn test_render() {
        let mut single = prompt("foo\nbar", &PromptConfig::default());
        assert_eq!(
            single.render().to_text(),
            "? Select an item: (Use arrow keys)\n❯ foo\n  bar"
        );

        single.handle(KeyAction::MoveDown);
        let frame = single.render();
        assert_eq!(frame.to_text(), "? Select an item: \n  foo\n❯ bar");
        assert!(frame.lines[2].highlighted);
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn test_render_pages() {
        let config = PromptConfig {
            page_size: Some(2),
            ..PromptConfig::default()
        };
        let mut single = prompt("a\nb\nc\nd", &config);
        single.handle(KeyAction::MoveUp);
        assert_eq!(
            single.render().to_text(),
            "? Select an item: \n  c\n❯ d\n(Move up and down to reveal more choices)"
        );
    }

    #[test]
    fn test_resize_refits_labels() {
        let mut single = prompt("a-long-candidate-value", &PromptConfig::default());
        single.resize(15, 24);
        assert!(single.render().to_text().contains("❯ a-long..."));
        single.handle(KeyAction::Submit);
        assert_eq!(
            single.answer(),
            Some(Answer::Single("a-long-candidate-value".to_string()))
        );
    }
}
