//! Named resume versions: an in-memory store plus section-level diffing
//! between two versions.

pub mod diff;
pub mod handlers;
pub mod store;
