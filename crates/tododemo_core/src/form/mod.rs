//! Edit form draft and field validation.
//!
//! # Responsibility
//! - Hold the unsaved title/content of the task being edited or created.
//! - Compute per-field error messages that gate the save action.
//!
//! # Invariants
//! - Validation is pure: no caching, no side effects.
//! - A draft never reaches the store unless it validates.

pub mod draft;
pub mod validator;
