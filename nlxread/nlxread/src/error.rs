//! Error types for the file reader and decoders.

use nlxread_core::{CursorError, SchemaError};

use crate::format::FileFormat;

/// Errors produced by [`NlxReader`](crate::NlxReader) and the in-memory decoders.
///
/// Running out of data at a record boundary is not an error: record loops stop
/// there and return what was decoded.
#[derive(Debug, thiserror::Error)]
pub enum NlxReadError {
    /// I/O error while opening or memory-mapping a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The path does not name a readable file of the requested format.
    #[error("invalid {format} file '{path}': {reason}")]
    InvalidInput {
        format: FileFormat,
        path: String,
        reason: String,
    },

    /// The file extension does not name a supported format.
    #[error("unrecognized file format: '{path}'")]
    UnknownFormat { path: String },

    /// A position file has no end-of-header token.
    #[error("end-of-header token not found in {searched_bytes} bytes")]
    MissingHeaderToken { searched_bytes: usize },

    /// Bytes remain after the last complete record and the tail policy is strict.
    #[error("{format} data ends with {trailing_bytes} bytes of an incomplete record")]
    TruncatedRecord {
        format: FileFormat,
        trailing_bytes: usize,
    },

    /// No inter-sample step could be derived for the final continuous block.
    #[error("cannot derive a sample interval for the final continuous block")]
    UndeterminedSampleInterval,

    /// A decoded record did not match the shape its decoder expects.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A cursor failure other than running out of data.
    #[error(transparent)]
    Cursor(#[from] CursorError),
}
