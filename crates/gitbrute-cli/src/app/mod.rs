//! Front end for the `gitbrute` binary.
//!
//! ## Structure
//!
//! - [`config`] - command line flags and their validation.
//! - [`git`] - the `git` child processes that read and amend `HEAD`.
//! - [`telemetry`] - log subscriber setup.

pub mod config;
pub mod git;
pub mod telemetry;
