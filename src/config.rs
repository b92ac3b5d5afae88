//! Configuration for command execution
//!
//! `RunConfig` carries everything a [`CommandRunner`](crate::CommandRunner)
//! needs: the optional path to the external `parallel` tool, the requested
//! concurrency, the halt threshold, and verbosity. The tool path is resolved
//! explicitly, at configuration time, never implicitly inside the run call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration settings for running a batch of commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Progress message printed when verbose is enabled
    #[serde(default = "default_message")]
    pub message: String,

    /// Path to the external `parallel` tool; `None` selects the sequential
    /// fallback
    pub parallel: Option<PathBuf>,

    /// Number of concurrent processes to request; 0 lets the tool choose
    #[serde(default)]
    pub num_procs: usize,

    /// Write progress and captured output to the diagnostic stream
    #[serde(default)]
    pub verbose: bool,

    /// Number of failed jobs that halts the batch early; 0 never halts
    #[serde(default)]
    pub halt: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            parallel: None,
            num_procs: 0,
            verbose: false,
            halt: 0,
        }
    }
}

fn default_message() -> String {
    "Running job".to_string()
}

impl RunConfig {
    /// Create a new builder for fluent configuration
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Resolve the `parallel` tool on PATH and record its location
    ///
    /// Discovery happens here, once, rather than inside the run call, so a
    /// PATH change during a long-running process cannot silently swap the
    /// tool. Returns the config unchanged when the tool is not installed,
    /// which routes execution through the sequential fallback.
    pub fn discover_parallel(mut self) -> Self {
        self.parallel = which::which("parallel").ok();
        self
    }
}

/// Builder for [`RunConfig`] instances
///
/// All methods are chainable and return `self` for fluent composition.
///
/// # Examples
///
/// ```rust
/// # use parallelprocs::RunConfig;
/// let config = RunConfig::builder()
///     .message("Aligning reads")
///     .num_procs(4)
///     .halt(1)
///     .verbose(true)
///     .build();
/// ```
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    /// Set the progress message printed when verbose is enabled
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    /// Set the path to the external `parallel` tool
    pub fn parallel(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.parallel = Some(path.into());
        self
    }

    /// Resolve the `parallel` tool on PATH at build time
    pub fn discover_parallel(mut self) -> Self {
        self.config = self.config.discover_parallel();
        self
    }

    /// Set the number of concurrent processes to request (0 lets the tool
    /// choose)
    pub fn num_procs(mut self, num_procs: usize) -> Self {
        self.config.num_procs = num_procs;
        self
    }

    /// Enable or disable diagnostic output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Set the failed-job count that halts the batch early (0 never halts)
    pub fn halt(mut self, halt: usize) -> Self {
        self.config.halt = halt;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> RunConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.message, "Running job");
        assert!(config.parallel.is_none());
        assert_eq!(config.num_procs, 0);
        assert!(!config.verbose);
        assert_eq!(config.halt, 0);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = RunConfig::builder()
            .message("Indexing genomes")
            .parallel("/usr/bin/parallel")
            .num_procs(8)
            .verbose(true)
            .halt(2)
            .build();

        assert_eq!(config.message, "Indexing genomes");
        assert_eq!(
            config.parallel.as_deref(),
            Some(std::path::Path::new("/usr/bin/parallel"))
        );
        assert_eq!(config.num_procs, 8);
        assert!(config.verbose);
        assert_eq!(config.halt, 2);
    }

    #[test]
    fn test_serde_defaults() {
        let config: RunConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config.message, "Running job");
        assert!(config.parallel.is_none());
        assert_eq!(config.num_procs, 0);
        assert!(!config.verbose);
        assert_eq!(config.halt, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RunConfig::builder()
            .message("Sorting alignments")
            .parallel("/opt/bin/parallel")
            .num_procs(4)
            .halt(1)
            .build();
        let json = serde_json::to_string(&config).expect("serialize config");
        let back: RunConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(back.message, "Sorting alignments");
        assert_eq!(back.num_procs, 4);
        assert_eq!(back.halt, 1);
    }
}
