//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Table;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// A stored offset points before the start of the file
    #[error("invalid offset {0}")]
    #[diagnostic(help("the index region references a negative position"))]
    InvalidOffset(i32),

    /// A table declares a negative byte length
    #[error("{table} table declares an invalid length of {length} bytes")]
    InvalidTableLength {
        /// Table being parsed
        table: Table,
        /// Declared length
        length: i32,
    },

    /// The records of a table do not end on its declared length
    #[error("{table} table declares {declared} bytes but its records span {consumed} bytes")]
    #[diagnostic(help("the file is truncated or its index region is corrupted"))]
    TableLengthMismatch {
        /// Table being parsed
        table: Table,
        /// Declared length
        declared: u64,
        /// Bytes read once the last record ended
        consumed: u64,
    },

    /// Bytes follow the sort table, which ends the file
    #[error("{0} bytes follow the index region")]
    #[diagnostic(help("a table declares fewer bytes than its records span"))]
    TrailingBytes(u64),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
