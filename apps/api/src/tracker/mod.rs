//! Kanban-style job-application tracker (in-memory board).

pub mod board;
pub mod handlers;
