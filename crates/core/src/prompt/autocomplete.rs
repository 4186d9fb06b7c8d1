use super::{question_line, Answer, Choices, Prompt, POINTER};
use crate::config::{PromptConfig, PromptMode};
use crate::prompt::frame::{Frame, Line, SpanStyle};
use crate::state::{KeyAction, Phase};
use crate::tokenizer::Candidate;

/// One of N, narrowed down by a case-insensitive substring filter.
pub struct AutocompletePrompt {
    message: String,
    choices: Choices,
}

impl AutocompletePrompt {
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

    #[must_use]
    pub fn filter_text(&self) -> &str {
        self.choices.state.filter_text()
    }

    /// Values of the candidates passing the current filter.
    #[must_use]
    pub fn filtered_values(&self) -> Vec<&str> {
        self.choices
            .state
            .visible()
            .iter()
            .map(|&index| self.choices.candidates[index].value())
            .collect()
    }
}

impl Prompt for AutocompletePrompt {
    fn mode(&self) -> PromptMode {
        PromptMode::Autocomplete
    }

    fn phase(&self) -> Phase {
        self.choices.state.phase()
    }

    fn handle(&mut self, action: KeyAction) -> Phase {
        let Choices {
            candidates, state, ..
        } = &mut self.choices;
        if state.phase().is_terminal() {
            return state.phase();
        }
        state.begin();

        match action {
            KeyAction::MoveUp => state.move_up(),
            KeyAction::MoveDown => state.move_down(),
            KeyAction::FilterInput(c) => state.push_filter(c, candidates),
            KeyAction::DeleteBackward => state.pop_filter(candidates),
            KeyAction::Submit if state.current().is_some() => state.submit(),
            KeyAction::Cancel => state.cancel(),
            _ => {}
        }

        state.phase()
    }

    fn render(&self) -> Frame {
        let mut frame = Frame::default();

        let mut header = question_line(&self.message);
        if self.phase() == Phase::Idle && self.filter_text().is_empty() {
            header = header.push("(Use arrow keys or type to search)", SpanStyle::Hint);
            frame.push(header);
        } else {
            header = header.push(self.filter_text(), SpanStyle::Plain);
            frame.cursor = u16::try_from(header.width()).ok().map(|column| (column, 0));
            frame.push(header);
        }

        if self.choices.state.visible().is_empty() {
            frame.push(Line::new().push("  No results...", SpanStyle::Error));
            return frame;
        }

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
