//! Running commands against otrs.Console.pl

use crate::console::command::ConsoleCommand;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Default interpreter for the console script
pub const DEFAULT_INTERPRETER: &str = "/usr/bin/perl";

/// Default location of the OTRS admin console
pub const DEFAULT_CONSOLE: &str = "/opt/otrs/bin/otrs.Console.pl";

/// Fixed program prefix every command runs under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub interpreter: PathBuf,
    pub script: PathBuf,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script: PathBuf::from(DEFAULT_CONSOLE),
        }
    }
}

impl ConsoleConfig {
    /// `interpreter script` as shown in echoed command lines
    pub fn program_line(&self) -> String {
        format!("{} {}", self.interpreter.display(), self.script.display())
    }
}

/// What came back from one console invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub success: bool,
    /// `None` when the process never ran or was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            ..Self::default()
        }
    }
}

/// Seam between the dispatcher and the process that creates entities
pub trait CommandExecutor {
    /// Run one command to completion. Failures are reported, never raised.
    fn execute(&mut self, command: &ConsoleCommand) -> ExecutionOutcome;
}

/// Runs each command as a child process with its arguments passed as a list
pub struct ConsoleExecutor {
    config: ConsoleConfig,
}

impl ConsoleExecutor {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }
}

impl CommandExecutor for ConsoleExecutor {
    fn execute(&mut self, command: &ConsoleCommand) -> ExecutionOutcome {
        let output = Command::new(&self.config.interpreter)
            .arg(&self.config.script)
            .arg(command.subcommand())
            .args(command.args())
            .output();

        match output {
            Ok(output) => {
                debug!(status = ?output.status, "{} finished", command.subcommand());
                ExecutionOutcome {
                    success: output.status.success(),
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
            Err(e) => ExecutionOutcome {
                success: false,
                exit_code: None,
                stdout: String::new(),
                stderr: format!(
                    "failed to run {}: {}\n",
                    self.config.interpreter.display(),
                    e
                ),
            },
        }
    }
}
