//! Workflows behind the command line binaries

pub mod orchestration;

pub use orchestration::{build_release, ReleaseOutcome};
