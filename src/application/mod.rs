//! Application layer - Use cases and orchestration

pub mod invocation;
pub mod patch;
pub mod unpatch;

pub use invocation::{Invocation, Operation, Request, RunOptions};
pub use patch::{patch, PatchReport};
pub use unpatch::{unpatch, unpatch_all};
