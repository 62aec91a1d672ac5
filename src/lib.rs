//! Rename the entries of a folder to a sequential `{base}{n}.{ext}` scheme.
//!
//! The session in [`cli::execute`] collects its answers from a [`cli::Prompt`]
//! and renames through a [`storage::StorageClient`], so it runs the same
//! against the local filesystem and against [`storage::MemoryFs`].

pub mod cli;
pub mod config;
pub mod error;
pub mod renamer;
pub mod storage;
