//! Error types for cursor reads and record field access.

/// Error returned by [`BitCursor`](crate::BitCursor) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// A read would consume more bits than remain in the buffer.
    ///
    /// Record loops treat this as the normal end of the record stream.
    #[error("end of stream: requested {requested} bits, {remaining} remaining")]
    EndOfStream { requested: u64, remaining: u64 },

    /// An explicit seek targeted a bit offset past the end of the buffer.
    #[error("bit position {position} is past the end of a {len}-bit buffer")]
    PositionOutOfRange { position: u64, len: u64 },

    /// A field encoding was declared with a width the cursor cannot decode.
    #[error("unsupported width for {encoding} field: {bits} bits")]
    UnsupportedWidth { encoding: &'static str, bits: u32 },
}

impl CursorError {
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, CursorError::EndOfStream { .. })
    }
}

/// Error returned when a decoded [`Record`](crate::Record) is accessed with the
/// wrong field name or type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("record '{record}' has no field '{field}'")]
    MissingField {
        record: &'static str,
        field: String,
    },

    #[error("field '{field}' holds {actual}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}
