use super::{question_line, Answer, Choices, Prompt, POINTER};
use crate::config::{PromptConfig, PromptMode};
use crate::prompt::frame::{Frame, Line, SpanStyle};
use crate::state::{KeyAction, Phase};
use crate::tokenizer::Candidate;

const CHECKED: &str = "◉";
const UNCHECKED: &str = "◯";
const HINT: &str = "(Press <space> to select, <a> to toggle all, <i> to invert selection)";

/// Checkbox list for the multiple and ordered modes.
///
/// In ordered mode the answer lists values in the order they were checked
/// and each checked row shows its position; otherwise values come back in
/// list order.
pub struct CheckboxPrompt {
    message: String,
    ordered: bool,
    choices: Choices,
}

impl CheckboxPrompt {
    pub fn new(
        config: &PromptConfig,
        candidates: Vec<Candidate>,
        ordered: bool,
        columns: u16,
        rows: u16,
    ) -> Self {
        let mut choices = Choices::new(candidates, config.page_size, columns, rows);
        choices.check_defaults(&config.default_values());

        Self {
            message: config.message.clone(),
            ordered,
            choices,
        }
    }

    fn marker(&self, index: usize) -> (String, SpanStyle) {
        let state = &self.choices.state;
        match (self.ordered, state.order_position(index)) {
            (true, Some(position)) => (position.to_string(), SpanStyle::Checked),
            (false, Some(_)) => (CHECKED.to_string(), SpanStyle::Checked),
            (_, None) => (UNCHECKED.to_string(), SpanStyle::Plain),
        }
    }
}

impl Prompt for CheckboxPrompt {
    fn mode(&self) -> PromptMode {
        if self.ordered {
            PromptMode::Ordered
        } else {
            PromptMode::Multiple
        }
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
            KeyAction::ToggleCurrent => state.toggle_current(),
            KeyAction::ToggleAll => state.toggle_all(),
            KeyAction::InvertSelection => state.invert(),
            KeyAction::Submit => state.submit(),
            KeyAction::Cancel => state.cancel(),
            _ => {}
        }

        state.phase()
    }

    fn render(&self) -> Frame {
        let mut frame = Frame::default();

        let mut header = question_line(&self.message);
        if self.phase() == Phase::Idle {
            header = header.push(HINT, SpanStyle::Hint);
        }
        frame.push(header);

        for (index, is_cursor) in self.choices.page() {
            let (marker, marker_style) = self.marker(index);
            let label = self.choices.candidates[index].label();
            let line = if is_cursor {
                Line::new()
                    .push(POINTER, SpanStyle::Pointer)
                    .push(marker, marker_style)
                    .push(format!(" {label}"), SpanStyle::Highlight)
                    .highlighted()
            } else {
                Line::new()
                    .push(" ", SpanStyle::Plain)
                    .push(marker, marker_style)
                    .push(format!(" {label}"), SpanStyle::Plain)
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

        let state = &self.choices.state;
        let indices = if self.ordered {
            state.order()
        } else {
            state.checked()
        };

        Some(Answer::Multiple(
            indices
                .into_iter()
                .map(|index| self.choices.candidates[index].value().to_string())
                .collect(),
        ))
    }
}
