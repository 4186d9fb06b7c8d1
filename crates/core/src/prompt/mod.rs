//! The five prompt modes.
//!
//! Every mode implements [`Prompt`]: it consumes [`KeyAction`]s, renders a
//! [`Frame`] and, once submitted, yields an [`Answer`]. Use [`build_prompt`]
//! to get the right implementation for a [`PromptConfig`].
//!
//! # Examples
//!
//! ```
//! use pipesel_core::config::{PromptConfig, PromptMode};
//! use pipesel_core::prompt::{build_prompt, Answer};
//! use pipesel_core::state::KeyAction;
//! use pipesel_core::tokenizer::{tokenize, RawInput};
//!
//! let candidates = tokenize(&RawInput::from("foo\nbar\nlorem"), "\n")?;
//! let config = PromptConfig::new(PromptMode::Ordered);
//! let mut prompt = build_prompt(&config, candidates, 80, 24);
//!
//! for action in [KeyAction::MoveDown, KeyAction::ToggleCurrent, KeyAction::MoveUp,
//!                KeyAction::ToggleCurrent, KeyAction::Submit] {
//!     prompt.handle(action);
//! }
//!
//! assert_eq!(prompt.answer(), Some(Answer::Multiple(vec!["bar".into(), "foo".into()])));
//! # Ok::<(), pipesel_core::error::Error>(())
//! ```

mod autocomplete;
mod checkbox;
pub mod frame;
mod input;
mod single;

pub use autocomplete::AutocompletePrompt;
pub use checkbox::CheckboxPrompt;
pub use frame::{Frame, Line, Span, SpanStyle};
pub use input::{InputPrompt, TextBuffer};
pub use single::SinglePrompt;

use log::debug;

use crate::config::{PromptConfig, PromptMode};
use crate::display::max_label_width;
use crate::state::{KeyAction, Phase, SelectionState};
use crate::tokenizer::{fit_labels, Candidate};

/// Rows taken by the question line and the paging hint.
pub const CHROME_ROWS: usize = 2;

const QUESTION_MARK: &str = "? ";
const POINTER: &str = "❯";
const PAGING_HINT: &str = "(Move up and down to reveal more choices)";

/// What a submitted prompt resolved to, before post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// The answer as a sequence, a single answer becoming one element.
    #[must_use]
    pub fn into_values(self) -> Vec<String> {
        match self {
            Answer::Single(value) => vec![value],
            Answer::Multiple(values) => values,
        }
    }
}

/// Common interface of the prompt modes.
pub trait Prompt {
    fn mode(&self) -> PromptMode;

    fn phase(&self) -> Phase;

    /// Applies one action and returns the resulting phase.
    ///
    /// Actions that do not apply to the mode are ignored, as is anything
    /// arriving after the prompt was submitted or cancelled.
    fn handle(&mut self, action: KeyAction) -> Phase;

    fn render(&self) -> Frame;

    /// Adapts labels and paging to a new terminal size.
    fn resize(&mut self, columns: u16, rows: u16);

    /// The result, available only once the prompt was submitted.
    fn answer(&self) -> Option<Answer>;

    /// Aborts the prompt from outside the key handling.
    fn cancel(&mut self) {
        self.handle(KeyAction::Cancel);
    }
}

/// Creates the prompt for `config.mode` over `candidates`.
///
/// The default selection of the configuration is applied before returning.
#[must_use]
pub fn build_prompt(
    config: &PromptConfig,
    candidates: Vec<Candidate>,
    columns: u16,
    rows: u16,
) -> Box<dyn Prompt> {
    debug!(
        "Building {:?} prompt over {} candidates",
        config.mode,
        candidates.len()
    );

    match config.mode {
        PromptMode::Single => Box::new(SinglePrompt::new(config, candidates, columns, rows)),
        PromptMode::Multiple => Box::new(CheckboxPrompt::new(
            config, candidates, false, columns, rows,
        )),
        PromptMode::Ordered => {
            Box::new(CheckboxPrompt::new(config, candidates, true, columns, rows))
        }
        PromptMode::Autocomplete => Box::new(AutocompletePrompt::new(
            config, candidates, columns, rows,
        )),
        PromptMode::Input => Box::new(InputPrompt::new(config, &candidates)),
    }
}

/// Rows of candidates that fit on screen.
#[must_use]
pub fn page_size_for(rows: u16, configured: Option<usize>) -> usize {
    let available = usize::from(rows).saturating_sub(CHROME_ROWS).max(1);
    configured.map_or(available, |size| size.min(available)).max(1)
}

fn matches_default(candidate: &Candidate, default: &str) -> bool {
    candidate.value() == default || candidate.value().trim() == default
}

/// Candidates plus the selection state over them, shared by the list modes.
#[derive(Debug, Clone)]
struct Choices {
    candidates: Vec<Candidate>,
    state: SelectionState,
    configured_page_size: Option<usize>,
}

impl Choices {
    fn new(
        mut candidates: Vec<Candidate>,
        configured_page_size: Option<usize>,
        columns: u16,
        rows: u16,
    ) -> Self {
        fit_labels(&mut candidates, max_label_width(columns));
        let state = SelectionState::new(
            candidates.len(),
            page_size_for(rows, configured_page_size),
        );

        Self {
            candidates,
            state,
            configured_page_size,
        }
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        fit_labels(&mut self.candidates, max_label_width(columns));
        self.state
            .set_page_size(page_size_for(rows, self.configured_page_size));
    }

    /// Moves the cursor onto the first candidate matching `default`.
    fn point_at_default(&mut self, default: &str) {
        if let Some(index) = self
            .candidates
            .iter()
            .position(|candidate| matches_default(candidate, default))
        {
            self.state.move_to(index);
        }
    }

    /// Checks every candidate matching one of `defaults`, in the order given.
    fn check_defaults(&mut self, defaults: &[String]) {
        for default in defaults {
            for (index, candidate) in self.candidates.iter().enumerate() {
                if matches_default(candidate, default) {
                    self.state.check(index);
                }
            }
        }
    }

    fn current_value(&self) -> Option<String> {
        self.state
            .current()
            .map(|index| self.candidates[index].value().to_string())
    }

    /// `(candidate index, under cursor)` for every row on the current page.
    fn page(&self) -> Vec<(usize, bool)> {
        let offset = self.state.offset();
        self.state
            .visible()
            .iter()
            .enumerate()
            .skip(offset)
            .take(self.state.page_size())
            .map(|(position, &index)| (index, position == self.state.cursor()))
            .collect()
    }

    fn push_paging_hint(&self, frame: &mut Frame) {
        if self.state.visible().len() > self.state.page_size() {
            frame.push(Line::new().push(PAGING_HINT, SpanStyle::Hint));
        }
    }
}

/// The `? message` line every mode starts with.
fn question_line(message: &str) -> Line {
    Line::new()
        .push(QUESTION_MARK, SpanStyle::Question)
        .push(message, SpanStyle::Message)
        .push(" ", SpanStyle::Plain)
}
