//! ftag - Content-addressed file tagging
//!
//! A command-line tool that attaches arbitrary string tags to files,
//! identified by a SHA-256 digest of their content. Tags follow the
//! content, not the path: renaming or copying a file never loses them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FtagError;
