//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract for the task collection.
//! - Keep storage details away from service/navigation orchestration.
//!
//! # Invariants
//! - Insertion order is the canonical display order.
//! - Repository APIs return semantic errors (`NotFound`) for missing ids.

pub mod task_repo;
