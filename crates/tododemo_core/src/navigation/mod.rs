//! Screen navigation for the task views.
//!
//! # Responsibility
//! - Track the active screen (list, detail, edit) and its subject task.
//! - Be the only writer of navigation state and the edit draft.
//!
//! # Invariants
//! - Intents are applied one at a time, each as a single indivisible step.
//! - No screen ever references a task missing from the store.

pub mod navigator;
pub mod state;
