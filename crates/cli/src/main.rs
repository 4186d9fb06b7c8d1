use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use crossterm::tty::IsTty;
use log::{debug, info};
use pipesel_cli::cli_args::{Args, RunOptions};
use pipesel_cli::clipboard::SystemClipboard;
use pipesel_cli::output::write_results;
use pipesel_cli::terminal::{self, terminal_size};
use pipesel_cli::ui::{self, Outcome};
use pipesel_core::config::{self, PromptMode};
use pipesel_core::error::{Error, Result};
use pipesel_core::file_handling;
use pipesel_core::path_extraction::FsPathExtractor;
use pipesel_core::post_process::post_process;
use pipesel_core::prompt::build_prompt;
use pipesel_core::tokenizer::{tokenize, Candidate, RawInput};

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Reads the items from the file argument, or from stdin when it is piped.
fn read_raw_input(args: &Args, options: &RunOptions) -> Result<RawInput> {
    match &args.path {
        Some(path) => {
            let path = config::expand_input_path(path);
            debug!("Reading items from `{path}` as {}", options.file_encoding);
            file_handling::read_input_file(&path, &options.file_encoding)
        }
        None if io::stdin().is_tty() => {
            debug!("Stdin is a terminal, no items to read");
            Ok(RawInput::Text(String::new()))
        }
        None => file_handling::read_input(io::stdin().lock()),
    }
}

fn read_candidates(args: &Args, options: &RunOptions) -> Result<Vec<Candidate>> {
    let input = read_raw_input(args, options)?;
    tokenize(&input, &options.separator)
}

fn execute(args: &Args) -> Result<()> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let settings = file_handling::get_settings(&config_path)?;
    let options = args.resolve(&settings);
    debug!("Running with {:?}", options);

    let candidates = read_candidates(args, &options)?;

    if candidates.is_empty() && options.prompt.mode != PromptMode::Input {
        info!("No items to select from");
        Args::command().print_help().map_err(Error::Render)?;
        return Ok(());
    }

    terminal::install_signal_handler()?;

    let (columns, rows) = terminal_size();
    let mut prompt = build_prompt(&options.prompt, candidates, columns, rows);

    match ui::run_prompt(prompt.as_mut())? {
        Outcome::Cancelled => {
            info!("Selection cancelled");
            Ok(())
        }
        Outcome::Submitted(answer) => {
            let extractor = FsPathExtractor::current_dir()
                .map_err(|e| Error::Misc(format!("Unable to read current directory: {e}")))?;
            let results = post_process(answer, &options.prompt, &extractor);
            write_results(&mut io::stdout().lock(), &results, &options, &SystemClipboard)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Render(e)) => {
            debug!("Terminal failure: {e}");
            terminal::forced_exit()
        }
        Err(e) if e.is_input_error() && !args.debug => {
            eprintln!("Error reading incoming data");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
