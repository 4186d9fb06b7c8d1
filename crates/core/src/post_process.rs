//! Turning a submitted answer into the final output strings.

use log::debug;

use crate::config::PromptConfig;
use crate::path_extraction::PathExtractor;
use crate::prompt::Answer;

/// Applies path extraction, trimming and quoting to every answered value.
///
/// The result is always a sequence; a single answer yields one element.
/// A value where no path is found becomes an empty string without affecting
/// the others.
///
/// Quoting is not idempotent: processing an already quoted value that
/// contains a space quotes it again.
pub fn post_process(
    answer: Answer,
    config: &PromptConfig,
    extractor: &dyn PathExtractor,
) -> Vec<String> {
    answer
        .into_values()
        .into_iter()
        .map(|value| {
            if config.extract_path {
                let path = extractor.extract(&value);
                debug!("Extracted path `{path}` from `{value}`");
                path
            } else {
                value
            }
        })
        .map(|value| format_result(value, config))
        .collect()
}

fn format_result(value: String, config: &PromptConfig) -> String {
    let value = if config.trim {
        value.trim().to_string()
    } else {
        value
    };

    if config.quote_if_whitespace && value.contains(' ') {
        format!("\"{value}\"")
    } else {
        value
    }
}
