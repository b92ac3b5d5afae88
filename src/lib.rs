//! Run shell command lines via GNU `parallel`, with a sequential fallback.
//!
//! The heavy lifting — process pooling, job queueing, halting after a
//! number of failures — belongs to the external `parallel` tool. This crate
//! writes the job file, builds the invocation, and shells out; when the
//! tool is not installed the commands run one at a time, in order, stopping
//! at the first failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use parallelprocs::{run, RunConfig, Result};
//! # fn main() -> Result<()> {
//! let config = RunConfig::builder()
//!     .message("Compressing samples")
//!     .num_procs(4)
//!     .halt(1)
//!     .verbose(true)
//!     .discover_parallel()
//!     .build();
//!
//! let ok = run(
//!     vec!["gzip s1.fq".to_string(), "gzip s2.fq".to_string()],
//!     &config,
//! )?;
//! assert!(ok);
//! # Ok(())
//! # }
//! ```
//!
//! Commands are passed to a shell verbatim and are not escaped; callers own
//! command safety.

pub mod commands;
pub mod config;
pub mod error;
pub mod runner;


// Re-export commonly used types
pub use commands::CommandList;
pub use config::{RunConfig, RunConfigBuilder};
pub use error::{Error, Result};
pub use runner::{run, CommandRunner};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
