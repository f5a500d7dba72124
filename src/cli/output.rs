//! Output formatting utilities for the CLI.

use serde::Serialize;

/// A command result with human and JSON renderings.
pub trait CommandOutput: Serialize {
    /// Plain-text rendering for terminals.
    fn to_human(&self) -> String;
    /// JSON rendering for `--json` mode.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result to stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}
