//! AI mock-interview engine.
//!
//! Layered as: `session` (pure phase machine and transcript invariants) →
//! `controller` (async orchestration: thinking delays, termination,
//! feedback dispatch) → `clock` (per-second countdown) → `handlers` (HTTP).
//! `feedback` is the pluggable external collaborator; `questions` is the
//! read-only script; `registry` maps ids to live controllers.

pub mod clock;
pub mod controller;
pub mod feedback;
pub mod handlers;
pub mod questions;
pub mod registry;
pub mod session;
