//! Error types for the worklog engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only catalog mutations, calendar-date validation and storage writes can
//! fail; earnings computation resolves every odd input to a zero value
//! instead of erroring.

use thiserror::Error;

/// The main error type for the worklog engine.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::DuplicateType {
///     type_key: "night".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift type already exists: night");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A shift-type definition failed validation.
    #[error("Invalid shift type '{type_key}': {message}")]
    InvalidShift {
        /// The key of the offending shift type.
        type_key: String,
        /// A description of what made the definition invalid.
        message: String,
    },

    /// A shift type with the same key already exists in the catalog.
    #[error("Shift type already exists: {type_key}")]
    DuplicateType {
        /// The duplicated key.
        type_key: String,
    },

    /// The referenced shift type is not present in the catalog.
    #[error("Shift type not found: {type_key}")]
    ShiftTypeNotFound {
        /// The key that was not found.
        type_key: String,
    },

    /// The (year, month, day) triple does not name a real calendar date.
    #[error("Invalid calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component (1-12).
        month: u32,
        /// The day component (1-31).
        day: u32,
    },

    /// A durable-storage write was rejected.
    #[error("Storage write failed for key '{key}': {message}")]
    Storage {
        /// The storage key being written.
        key: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
