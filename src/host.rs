//! Failure signalling towards the CI host.
//!
//! The host reads workflow commands from stdout; a failed run prints one
//! `::error::` command and exits non-zero.

use std::io::Write;

/// Escape `message` for use as workflow command data.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Writes the error command to a writer (for testing).
pub fn write_failure<W: Write>(w: &mut W, message: &str) {
    // Nothing sensible remains to report to if stdout itself is gone.
    let _ = writeln!(w, "::error::{}", escape_data(message));
}

/// Mark the run as failed with `message`.
pub fn set_failed(message: &str) {
    let mut stdout = std::io::stdout().lock();
    write_failure(&mut stdout, message);
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
