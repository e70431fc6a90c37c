//! Domain model for the to-do core.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep view projections (list, detail, edit) on one task shape.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion removes the task; there are no tombstones.

pub mod task;
