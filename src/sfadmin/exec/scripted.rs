use super::{ProcessOutput, Runner};
use crate::error::{Result, SfAdminError};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One call observed by a [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

impl RecordedCall {
    /// Value following `flag` in the recorded arguments, if any.
    pub fn arg_after(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(ProcessOutput),
    NotFound,
}

/// In-memory runner for tests: answers calls from a queue of canned outputs
/// and remembers what it was asked to run.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    queue: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw process output.
    pub fn respond(self, output: ProcessOutput) -> Self {
        self.queue.borrow_mut().push_back(Scripted::Output(output));
        self
    }

    /// Queues a successful invocation printing `body` to stdout.
    pub fn respond_json(self, body: Value) -> Self {
        self.respond(ProcessOutput::success(body.to_string()))
    }

    /// Queues a successful query returning `records`.
    pub fn respond_records(self, records: Value) -> Self {
        let total = records.as_array().map(Vec::len).unwrap_or(0);
        self.respond_json(serde_json::json!({
            "status": 0,
            "result": { "records": records, "totalSize": total, "done": true }
        }))
    }

    /// Queues a spawn failure, as if the executable were not installed.
    pub fn respond_not_found(self) -> Self {
        self.queue.borrow_mut().push_back(Scripted::NotFound);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
        });

        match self.queue.borrow_mut().pop_front() {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::NotFound) => Err(SfAdminError::ExecutableNotFound(program.to_string())),
            None => Err(SfAdminError::Api(format!(
                "no scripted response left for `{} {}`",
                program,
                args.join(" ")
            ))),
        }
    }
}
