use super::{ProcessOutput, Runner};
use crate::error::{Result, SfAdminError};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Runs the real executable as a child process.
///
/// Arguments are passed as a vector, so values containing quotes or spaces
/// reach the tool verbatim and are never seen by a shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SfAdminError::ExecutableNotFound(program.to_string()),
                _ => SfAdminError::Io(e),
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::exec::CommandExecutor;

    // `sh -c <script>` receives the trailing `--json` as `$0`, so these
    // scripts stand in for the real tool.
    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn captures_stdout_and_stderr_separately() {
        let out = SystemRunner
            .run("sh", &sh("printf out; printf err >&2; exit 3"))
            .unwrap();
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stdout, "out");
        assert_eq!(out.stderr, "err");
    }

    #[test]
    fn zero_exit_returns_result_payload() {
        let executor = CommandExecutor::new(SystemRunner, "sh");
        let result = executor
            .execute(sh(r#"printf '%s' '{"result":{"id":"U1"}}'"#))
            .unwrap();
        assert_eq!(result["id"], "U1");
    }

    #[test]
    fn json_stderr_message_becomes_command_failed() {
        let executor = CommandExecutor::new(SystemRunner, "sh");
        let err = executor
            .execute(sh(r#"printf '%s' '{"message":"dup"}' >&2; exit 1"#))
            .unwrap_err();
        assert!(matches!(err, SfAdminError::CommandFailed(ref m) if m == "dup"));
    }

    #[test]
    fn raw_stderr_becomes_command_failed() {
        let executor = CommandExecutor::new(SystemRunner, "sh");
        let err = executor.execute(sh("printf boom >&2; exit 1")).unwrap_err();
        assert!(matches!(err, SfAdminError::CommandFailed(ref m) if m == "boom"));
    }

    #[test]
    fn non_json_stdout_on_success_is_parse_error() {
        let executor = CommandExecutor::new(SystemRunner, "sh");
        let err = executor.execute(sh("echo hello")).unwrap_err();
        assert!(matches!(err, SfAdminError::ResponseParse(_)));
    }

    #[test]
    fn missing_executable_is_reported() {
        let err = SystemRunner
            .run("sfadmin-no-such-tool-on-path", &[])
            .unwrap_err();
        assert!(matches!(
            err,
            SfAdminError::ExecutableNotFound(ref p) if p == "sfadmin-no-such-tool-on-path"
        ));
    }

    #[test]
    fn arguments_are_not_shell_interpreted() {
        let arg = "Name='O''Brien' $(touch /tmp/never)".to_string();
        let out = SystemRunner
            .run("printf", &["%s".to_string(), arg.clone()])
            .unwrap();
        assert_eq!(out.stdout, arg);
    }
}
