//! Diapo Core - Foundation types for slideshow editing
//!
//! This crate provides the fundamental types used throughout the editor:
//! - Time representation (RationalTime, TimeInterval)
//! - Progress mapping within an interval (`step`)
//! - The shared error type

pub mod error;
pub mod time;

pub use error::{DiapoError, Result};
pub use time::{step, RationalTime, TimeInterval};
