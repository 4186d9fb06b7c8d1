//! Pipesel Core Library
//!
//! This crate provides the selection engine behind pipesel, a tool that turns
//! piped or file based text into an interactive terminal list and prints the
//! chosen item(s). It contains no terminal I/O: prompts are driven with
//! logical key actions and describe their screen as plain data, which keeps
//! the whole engine testable without a terminal.
//!
//! # Key Features
//!
//! - **Tokenizing**: Split input on a literal separator, or accept pre-split items
//! - **Label Fitting**: Shorten labels by display width, wide characters included
//! - **Five Prompt Modes**: Single, multiple, ordered, autocomplete and free-text input
//! - **Post-Processing**: Path extraction, trimming and quoting of the results
//! - **Settings**: Optional YAML settings file and encoded input files
//!
//! # Data Flow
//!
//! raw text → [`tokenizer`] → candidates → [`prompt`] (driven by
//! [`state::KeyAction`]s) → [`prompt::Answer`] → [`post_process`] → output.
//!
//! # Examples
//!
//! ```
//! use pipesel_core::config::{PromptConfig, PromptMode};
//! use pipesel_core::path_extraction::FsPathExtractor;
//! use pipesel_core::post_process::post_process;
//! use pipesel_core::prompt::build_prompt;
//! use pipesel_core::state::KeyAction;
//! use pipesel_core::tokenizer::{tokenize, RawInput};
//!
//! let candidates = tokenize(&RawInput::from("  foo\n  bar"), "\n")?;
//! let config = PromptConfig::new(PromptMode::Single);
//! let mut prompt = build_prompt(&config, candidates, 80, 24);
//! prompt.handle(KeyAction::MoveDown);
//! prompt.handle(KeyAction::Submit);
//!
//! let answer = prompt.answer().expect("submitted");
//! let output = post_process(answer, &config, &FsPathExtractor::new("."));
//! assert_eq!(output, ["bar"]);
//! # Ok::<(), pipesel_core::error::Error>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod file_handling;
pub mod path_extraction;
pub mod post_process;
pub mod prompt;
pub mod state;
pub mod tokenizer;
