//! Command execution engine
//!
//! This module handles:
//! - Delegating a batch of shell commands to the external `parallel` tool
//! - Falling back to in-order sequential execution when the tool is absent
//! - Writing the job file the tool reads and cleaning it up on every path
//! - Emitting progress diagnostics when verbose mode is enabled

use crate::commands::CommandList;
use crate::config::RunConfig;
use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Executes batches of shell commands
///
/// When the configured `parallel` tool exists, the batch is handed to it as
/// a line-delimited job file and the tool owns all concurrency, including
/// the halt-on-failure threshold. Otherwise commands run one at a time, in
/// list order, stopping at the first failure.
///
/// # Examples
///
/// ```rust,no_run
/// # use parallelprocs::{CommandRunner, RunConfig, Result};
/// # fn main() -> Result<()> {
/// let runner = CommandRunner::new(RunConfig::default().discover_parallel());
/// let ok = runner.run(vec!["sort chr1.txt".to_string(), "sort chr2.txt".to_string()])?;
/// assert!(ok);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CommandRunner {
    config: RunConfig,
}

impl CommandRunner {
    /// Create a new runner with the given configuration
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Access the runner's configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run a batch of commands, writing diagnostics to stderr
    ///
    /// Returns `Ok(false)` for an empty batch without touching the
    /// filesystem or spawning anything, `Ok(true)` when every command
    /// succeeded, and `Err` as soon as any command fails.
    pub fn run(&self, commands: impl Into<CommandList>) -> Result<bool> {
        self.run_to(commands, &mut std::io::stderr())
    }

    /// Run a batch of commands, writing diagnostics to an explicit sink
    ///
    /// The sink only receives output when the configuration is verbose: a
    /// single progress header before execution, and the tool's captured
    /// stdout/stderr after a successful parallel run. Errors are never
    /// written to the sink; they propagate as [`Error`] values.
    pub fn run_to<W: Write>(&self, commands: impl Into<CommandList>, sink: &mut W) -> Result<bool> {
        let commands = commands.into();

        if commands.is_empty() {
            return Ok(false);
        }

        if self.config.verbose {
            writeln!(
                sink,
                "{} (# jobs = {}, # parallel = {})",
                self.config.message,
                commands.len(),
                self.config.num_procs
            )?;
        }

        match &self.config.parallel {
            Some(tool) if tool.is_file() => self.run_parallel(&commands, tool, sink)?,
            _ => self.run_sequential(&commands)?,
        }

        Ok(true)
    }

    /// Hand the batch to the external tool via a line-delimited job file
    fn run_parallel<W: Write>(
        &self,
        commands: &CommandList,
        tool: &Path,
        sink: &mut W,
    ) -> Result<()> {
        // NamedTempFile removes the file on drop, so every return below,
        // including the error one, leaves no job file behind.
        let mut job_file = tempfile::NamedTempFile::new()?;
        for command in commands {
            writeln!(job_file, "{}", command)?;
        }
        job_file.flush()?;

        let invocation = parallel_invocation(&self.config, tool, job_file.path());
        debug!(%invocation, jobs = commands.len(), "running batch via parallel");

        let output = shell_output(&invocation)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let mut msg = String::new();
            if !stdout.is_empty() {
                msg.push_str(&stdout);
                msg.push('\n');
            }
            if !stderr.is_empty() {
                msg.push_str(&stderr);
                msg.push('\n');
            }
            return Err(Error::execution(msg));
        }

        if self.config.verbose {
            if !stdout.is_empty() {
                writeln!(sink, "{}", stdout)?;
            }
            if !stderr.is_empty() {
                writeln!(sink, "{}", stderr)?;
            }
        }

        Ok(())
    }

    /// Run the batch one command at a time, in order, stopping at the
    /// first failure
    fn run_sequential(&self, commands: &CommandList) -> Result<()> {
        debug!(jobs = commands.len(), "parallel unavailable, running serially");

        for command in commands {
            let output = shell_output(command)?;
            if !output.status.success() {
                let combined = combined_output(&output);
                return Err(Error::execution(format!(
                    "Failed to run: {}\nError: {}",
                    command, combined
                )));
            }
        }

        Ok(())
    }
}

/// Run a batch of commands with the given configuration
///
/// Convenience wrapper over [`CommandRunner`] for one-shot use.
///
/// # Examples
///
/// ```rust
/// # use parallelprocs::{run, RunConfig, Result};
/// # fn main() -> Result<()> {
/// let ran = run(Vec::<String>::new(), &RunConfig::default())?;
/// assert!(!ran);
/// # Ok(())
/// # }
/// ```
pub fn run(commands: impl Into<CommandList>, config: &RunConfig) -> Result<bool> {
    CommandRunner::new(config.clone()).run(commands)
}

/// Build the shell line that invokes the external tool
///
/// `-j` is omitted when `num_procs` is 0 so the tool picks its own worker
/// count, and `--halt` is omitted when `halt` is 0 so the batch always runs
/// to completion. The job file is redirected as the tool's standard input.
fn parallel_invocation(config: &RunConfig, tool: &Path, job_file: &Path) -> String {
    let mut parts = vec![tool.display().to_string()];
    if config.num_procs > 0 {
        parts.push(format!("-j {}", config.num_procs));
    }
    if config.halt > 0 {
        parts.push(format!("--halt soon,fail={}", config.halt));
    }
    parts.push(format!("< {}", job_file.display()));
    parts.join(" ")
}

/// Execute a command line through the platform shell, capturing output
fn shell_output(command: &str) -> std::io::Result<Output> {
    #[cfg(unix)]
    {
        Command::new("sh").arg("-c").arg(command).output()
    }

    #[cfg(windows)]
    {
        Command::new("cmd").arg("/c").arg(command).output()
    }
}

/// Merge captured stdout and stderr the way a terminal would show them,
/// without a trailing newline
fn combined_output(output: &Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined.trim_end_matches('\n').to_string()
}
