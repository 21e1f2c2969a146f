//! pudding - Reversible line patcher
//!
//! Appends lines to a text file, each tagged with a self-checking trailing
//! comment, so they can later be removed again either selectively (matching a
//! patch file) or all at once.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PuddingError;
