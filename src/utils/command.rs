//! External command execution utilities.
//!
//! Provides macros and functions for running the external documentation
//! toolchain (javadoc, dokka, pydoc-markdown, hugo, git, tar, ssh/scp) with
//! proper output handling and fail-fast error reporting.

use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    ffi::OsString,
    fs::File,
    path::Path,
    process::{Command, Output, Stdio},
};

// ============================================================================
// Macros
// ============================================================================

/// Run an external command with arguments, capturing its output.
///
/// Empty arguments are filtered out, so optional flags can be passed as `""`.
///
/// # Examples
/// ```ignore
/// // Without working directory
/// exec!(["git"]; "clone", "--depth", "1", url, dir)?;
///
/// // With working directory
/// exec!(src_dir; &config.site.command; "--destination", dst)?;
/// ```
#[macro_export]
macro_rules! exec {
    ($cmd:expr; $($arg:expr),* $(,)?) => {{
        $crate::utils::command::exec(
            None,
            &$crate::utils::command::to_cmd_vec($cmd),
            &$crate::utils::command::filter_args(&[$($crate::utils::command::to_os($arg)),*]),
        )
    }};
    ($root:expr; $cmd:expr; $($arg:expr),* $(,)?) => {{
        $crate::utils::command::exec(
            Some($root),
            &$crate::utils::command::to_cmd_vec($cmd),
            &$crate::utils::command::filter_args(&[$($crate::utils::command::to_os($arg)),*]),
        )
    }};
}

// ============================================================================
// Argument Conversion
// ============================================================================

/// Convert to OsString.
#[inline]
pub fn to_os<S: Into<OsString>>(s: S) -> OsString {
    s.into()
}

/// Trait for converting to command vector.
pub trait ToCmd {
    fn to_cmd(self) -> Vec<OsString>;
}

impl<const N: usize> ToCmd for [&str; N] {
    #[inline]
    fn to_cmd(self) -> Vec<OsString> {
        self.into_iter().map(OsString::from).collect()
    }
}

impl ToCmd for &[String] {
    #[inline]
    fn to_cmd(self) -> Vec<OsString> {
        self.iter().map(OsString::from).collect()
    }
}

impl ToCmd for &Vec<String> {
    #[inline]
    fn to_cmd(self) -> Vec<OsString> {
        self.iter().map(OsString::from).collect()
    }
}

/// Convert command to Vec<OsString>.
#[inline]
pub fn to_cmd_vec<C: ToCmd>(cmd: C) -> Vec<OsString> {
    cmd.to_cmd()
}

/// Filter out empty args.
#[inline]
pub fn filter_args(args: &[OsString]) -> Vec<OsString> {
    args.iter().filter(|a| !a.is_empty()).cloned().collect()
}

// ============================================================================
// Prerequisite Checks
// ============================================================================

/// Ensure an external command is installed, before any work begins.
///
/// # Errors
/// Returns a descriptive error naming the missing tool.
pub fn require(cmd: &str) -> Result<()> {
    which::which(cmd)
        .map(|_| ())
        .with_context(|| format!("`{cmd}` not found. Please install it first."))
}

// ============================================================================
// Command Execution
// ============================================================================

/// Execute a command and capture its output.
///
/// # Errors
/// Returns error if the command fails to execute or exits non-zero.
pub fn exec(root: Option<&Path>, cmd: &[OsString], args: &[OsString]) -> Result<Output> {
    let (name, mut command) = prepare(root, cmd, args)?;

    let output = command
        .output()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    log_output(&name, &output)?;
    Ok(output)
}

/// Execute a command with stdout redirected into an already-open file.
///
/// The caller must have flushed any content it wrote to the file before the
/// child starts appending to the same stream. Stderr is captured and logged.
///
/// # Errors
/// Returns error if the command fails to execute or exits non-zero.
pub fn exec_to_file(
    root: Option<&Path>,
    cmd: &[OsString],
    args: &[OsString],
    envs: &[(&str, OsString)],
    out: File,
) -> Result<()> {
    let (name, mut command) = prepare(root, cmd, args)?;

    for (key, value) in envs {
        command.env(key, value);
    }

    let output = command
        .stdout(Stdio::from(out))
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    log_output(&name, &output)?;
    Ok(())
}

/// Execute a long-running command with inherited stdio, blocking until exit.
///
/// Used for interactive children like `hugo server`.
///
/// # Errors
/// Returns error if the command fails to start or exits non-zero.
pub fn exec_interactive(root: Option<&Path>, cmd: &[OsString], args: &[OsString]) -> Result<()> {
    let (name, mut command) = prepare(root, cmd, args)?;

    let status = command
        .status()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    if !status.success() {
        bail!("Command `{name}` failed with {status}");
    }
    Ok(())
}

/// Prepare a Command from components.
fn prepare(root: Option<&Path>, cmd: &[OsString], args: &[OsString]) -> Result<(String, Command)> {
    let name = cmd
        .first()
        .and_then(|s| s.to_str())
        .context("Empty command")?
        .to_owned();

    let mut command = Command::new(&cmd[0]);
    command.args(&cmd[1..]).args(args);

    if let Some(dir) = root {
        command.current_dir(dir);
    }

    Ok((name, command))
}

// ============================================================================
// Output Filtering
// ============================================================================

/// Filter rule for CLI output noise.
///
/// Matches lines that start with a prefix AND contain all required keywords.
/// This is more precise than keyword-only matching to avoid filtering user errors.
struct FilterRule {
    /// Line must start with one of these (case-insensitive, after trim).
    starts_with: &'static [&'static str],
    /// Line must also contain ALL of these keywords (case-insensitive).
    contains: &'static [&'static str],
}

impl FilterRule {
    const fn new(starts_with: &'static [&'static str], contains: &'static [&'static str]) -> Self {
        Self { starts_with, contains }
    }

    fn matches(&self, line: &str) -> bool {
        let lower = line.trim().to_ascii_lowercase();
        let has_prefix = self.starts_with.is_empty()
            || self.starts_with.iter().any(|p| lower.starts_with(p));
        let has_keywords = self.contains.iter().all(|kw| lower.contains(kw));
        has_prefix && has_keywords
    }
}

/// Output filter configuration.
struct OutputFilter {
    /// Lines matching any rule are filtered out.
    line_rules: &'static [FilterRule],
}

impl OutputFilter {
    // Hugo prints a build summary table and total time on every run;
    // javadoc narrates each phase of its pipeline on stderr.
    //
    //   Loading source files for package com.acme.core...
    //   Constructing Javadoc information...
    //   Building index for all the packages and classes...
    //   Generating build/doc/code-java/com/acme/App.html...
    const STDOUT: Self = Self {
        line_rules: &[
            FilterRule::new(&["pages", "paginator", "non-page", "static", "processed", "aliases", "cleaned", "sitemaps", "total in"], &[]),
            FilterRule::new(&["│", "┌", "└", "─", "|", "+--"], &[]),
        ],
    };

    const STDERR: Self = Self {
        line_rules: &[
            FilterRule::new(&["loading source files"], &[]),
            FilterRule::new(&["constructing javadoc"], &[]),
            FilterRule::new(&["building tree", "building index"], &[]),
            FilterRule::new(&["generating"], &[".html"]),
            FilterRule::new(&["standard doclet version"], &[]),
            // Hugo grumbles about missing taxonomy layouts in the learn theme
            FilterRule::new(&["warn"], &["found no layout file"]),
        ],
    };

    /// Check if a line should be filtered.
    fn should_filter_line(&self, line: &str) -> bool {
        self.line_rules.iter().any(|r| r.matches(line))
    }

    /// Log non-filtered lines.
    fn log(&self, name: &str, output: &str) {
        for line in output.lines() {
            if !line.trim().is_empty() && !self.should_filter_line(line) {
                log!(name; "{line}");
            }
        }
    }

    /// Extract error message, skipping filtered lines at start.
    fn extract_error<'a>(&self, stderr: &'a str) -> &'a str {
        stderr
            .lines()
            .find(|line| !line.trim().is_empty() && !self.should_filter_line(line))
            .map(|first| {
                let offset = first.as_ptr() as usize - stderr.as_ptr() as usize;
                &stderr[offset..]
            })
            .unwrap_or(stderr)
            .trim()
    }
}

/// Log command output, filtering known noise.
fn log_output(name: &str, output: &Output) -> Result<()> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        let error_msg = OutputFilter::STDERR.extract_error(stderr.trim());
        if !error_msg.is_empty() {
            eprintln!("{error_msg}");
        }
        bail!("Command `{name}` failed with {}", output.status);
    }

    OutputFilter::STDOUT.log(name, stdout.trim());
    OutputFilter::STDERR.log(name, stderr.trim());

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
