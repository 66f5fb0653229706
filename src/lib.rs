pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod docs;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod writer;

pub use error::{ReleaseError, Result};
