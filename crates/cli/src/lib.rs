//! Pipesel CLI Library
//!
//! This crate provides the command-line interface for pipesel: it reads items
//! from stdin or a file, shows them as an interactive prompt on the terminal
//! and prints what the user picked to stdout, ready for the next command in a
//! pipeline.
//!
//! # Key Features
//!
//! - **Pipeline Friendly**: The prompt is drawn on the terminal while stdin
//!   carries the items and stdout carries only the result
//! - **Five Modes**: Single, multiple, ordered, autocomplete and free-text input
//! - **Settings File**: Defaults for every option in `~/.pipesel/config.yml`
//! - **Clipboard**: Optionally copy the result as well as printing it
//!
//! # Architecture
//!
//! The selection logic lives in `pipesel-core`; this crate wires it to the
//! terminal:
//!
//! - [`cli_args`]: Command-line argument parsing and settings resolution
//! - [`keymap`]: Raw key events to prompt actions
//! - [`ui`]: The interactive session loop and frame drawing
//! - [`terminal`]: Raw mode, TTY output and forced exit
//! - [`output`]: Printing the results and copying them
//! - [`clipboard`]: Copying results to the system clipboard
//!
//! # Examples
//!
//! ```bash
//! # Pick a branch to check out
//! git branch | pipesel | xargs git checkout
//!
//! # Pick several changed files, keep the path only
//! git status --short | pipesel -m -p | xargs git add
//!
//! # Pick from a latin1 encoded file, comma separated
//! pipesel -s , -e latin1 names.csv
//! ```

pub mod cli_args;
pub mod clipboard;
pub mod colors;
pub mod keymap;
pub mod output;
pub mod terminal;
pub mod ui;
