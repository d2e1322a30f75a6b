//! Logging utilities with colored task prefixes.
//!
//! Provides the `log!` macro for formatted terminal output. Every message
//! carries a `[task]` prefix so interleaved tool output stays attributable.
//!
//! # Example
//!
//! ```ignore
//! log!("site"; "unpacking {} doc releases", count);
//! log!("error"; "{err:#}");
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around the task name plus the trailing space: "[task] "
const PREFIX_OVERHEAD: usize = 3;

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

/// Log a message with a colored task prefix.
///
/// # Usage
/// ```ignore
/// log!("task"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($task:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($task, &format!($($arg)*))
    }};
}

/// Log a message with a colored task prefix.
///
/// Single-line messages are truncated to the terminal width; multi-line
/// messages (tool output blocks) are passed through untouched.
pub fn log(task: &str, message: &str) {
    let prefix = colorize_prefix(task);
    let width = get_terminal_width() as usize;

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();

    let max_msg_len = width.saturating_sub(task.len() + PREFIX_OVERHEAD);
    let message = if message.len() > max_msg_len && !message.contains('\n') {
        truncate_str(message, max_msg_len)
    } else {
        message
    };

    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a task prefix based on task type.
#[inline]
fn colorize_prefix(task: &str) -> ColoredString {
    let prefix = format!("[{task}]");
    match task.to_ascii_lowercase().as_str() {
        "fetch" | "deploy" => prefix.bright_blue().bold(),
        "serve" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within max_len bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Tests
// ============================================================================
