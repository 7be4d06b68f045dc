//! GitHub Actions workflow commands.

/// Message used when a failure carries no text of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Escape a message for use in a workflow command
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format the `::error::` command that marks the step as failed
pub fn failure_command(message: &str) -> String {
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        message
    };
    format!("::error::{}", escape_data(message))
}

/// Report a failure to the runner. The caller is responsible for exiting
/// with a non-zero status.
pub fn set_failed(message: &str) {
    println!("{}", failure_command(message));
}
