//! Errors
//!
//! Custom error types used throughout the `cartree` crate.
use thiserror::Error;

/// Errors that can occur while loading data, growing or applying a tree.
#[derive(Debug, Error)]
pub enum CartError {
    /// An operation received input it cannot work with, e.g. an empty set of rows.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A numeric value was compared against a text value, or the reverse.
    #[error("Cannot compare value {value} in column {column} against reference {reference}.")]
    TypeMismatch {
        column: usize,
        reference: String,
        value: String,
    },
    /// Empty or NaN field found while loading data.
    #[error("Missing value in row {row}, column {column}; missing values are not supported.")]
    MissingValue { row: usize, column: usize },
    /// Unable to write to file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
    /// Unable to read from file.
    #[error("Unable to read from file: {0}")]
    UnableToRead(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
}
