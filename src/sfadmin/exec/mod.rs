//! # Command Execution
//!
//! Every operation against the org goes through exactly one invocation of the
//! external `sf` tool. This module owns that boundary: it appends the
//! machine-readable output flag, runs the child, and turns what comes back into
//! either the `result` payload or a typed [`SfAdminError`].
//!
//! ## Runner Abstraction
//!
//! Spawning is abstracted behind the [`Runner`] trait so the decoding logic and
//! everything built on top of it can be tested without the real tool:
//!
//! - [`process::SystemRunner`]: Production runner, launches the child with an
//!   explicit argument vector (never through a shell)
//! - [`scripted::ScriptedRunner`]: Replays canned outputs and records every call
//!
//! ## Output Contract
//!
//! ```text
//! exit 0   stdout: {"result": <payload>, "warnings": [...]}   -> Ok(payload)
//! exit !0  stderr: {"message": "...", ...}                    -> CommandFailed(message)
//! exit !0  stderr: <anything else>                            -> CommandFailed(raw stderr)
//! ```
//!
//! There is no retry and no timeout: a call is one synchronous attempt and a
//! hung child blocks the caller.

use crate::error::{Result, SfAdminError};
use serde_json::Value;
use tracing::{debug, warn};

pub mod process;
pub mod scripted;

/// Flag appended to every invocation so the tool answers in JSON.
pub const JSON_FLAG: &str = "--json";
/// Executable used when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "sf";

const GENERIC_FAILURE: &str = "Command failed";

/// Raw outcome of one child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Launches a program and collects its output.
pub trait Runner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        (**self).run(program, args)
    }
}

/// Decoded response of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Success { result: Value, warnings: Vec<String> },
    Failure { message: String, warnings: Vec<String> },
}

/// Decodes a finished child into an [`Invocation`].
///
/// Only a malformed success output is an error here; a failed command is a
/// regular [`Invocation::Failure`].
pub fn decode(output: &ProcessOutput) -> Result<Invocation> {
    if output.is_success() {
        let mut body: Value = serde_json::from_str(&output.stdout)
            .map_err(|e| SfAdminError::ResponseParse(e.to_string()))?;
        let warnings = warnings_of(&body);
        let result = body
            .get_mut("result")
            .map(Value::take)
            .ok_or_else(|| SfAdminError::ResponseParse("missing `result` field".to_string()))?;
        return Ok(Invocation::Success { result, warnings });
    }

    let stderr = output.stderr.trim();
    let (message, warnings) = match serde_json::from_str::<Value>(stderr) {
        Ok(body) => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_FAILURE)
                .to_string();
            (message, warnings_of(&body))
        }
        Err(_) if stderr.is_empty() => (GENERIC_FAILURE.to_string(), Vec::new()),
        Err(_) => (stderr.to_string(), Vec::new()),
    };
    Ok(Invocation::Failure { message, warnings })
}

fn warnings_of(body: &Value) -> Vec<String> {
    body.get("warnings")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|w| match w {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Runs `sf` subcommands and hands back their `result` payload.
#[derive(Debug)]
pub struct CommandExecutor<R: Runner> {
    runner: R,
    program: String,
}

impl<R: Runner> CommandExecutor<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Executes one invocation. `args` must already be complete apart from
    /// the JSON flag, which is always appended here.
    pub fn execute<I, S>(&self, args: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv: Vec<String> = args.into_iter().map(Into::into).collect();
        argv.push(JSON_FLAG.to_string());

        debug!(program = %self.program, args = ?argv, "invoking external tool");
        let output = self.runner.run(&self.program, &argv)?;
        debug!(exit_code = ?output.exit_code, "external tool finished");

        match decode(&output)? {
            Invocation::Success { result, warnings } => {
                log_warnings(&warnings);
                Ok(result)
            }
            Invocation::Failure { message, warnings } => {
                log_warnings(&warnings);
                Err(SfAdminError::CommandFailed(message))
            }
        }
    }
}

fn log_warnings(warnings: &[String]) {
    for warning in warnings {
        warn!(%warning, "external tool warning");
    }
}
