//! In-memory decoders, one per file format.
//!
//! Each decoder takes the complete file contents and returns the decoded
//! sequences together with [`Diagnostics`]. Record loops end at the first
//! record that does not fit in the remaining data.

mod continuous;
mod event;
mod position;

pub use continuous::decode_continuous;
pub use event::decode_events;
pub use position::{decode_positions, split_position_header};

use nlxread_core::{BitCursor, Record, RecordSchema};

use crate::{
    diagnostics::{Diagnostics, Notice},
    error::NlxReadError,
    options::TailPolicy,
};

/// Decoded sequences plus what was observed while decoding them.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub data: T,
    pub diagnostics: Diagnostics,
}

impl<T> Decoded<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Skip a fixed-length header. Returns `false` (after recording a notice) if
/// the data ends inside it.
fn skip_header(cursor: &mut BitCursor, len: usize, diagnostics: &mut Diagnostics) -> bool {
    match cursor.skip_bytes(len) {
        Ok(()) => true,
        Err(_) => {
            let bytes = cursor.buffer().len();
            diagnostics.notice(Notice::TruncatedHeader { bytes });
            false
        }
    }
}

/// Read records until the next one would run past the end of the data.
fn for_each_record(
    cursor: &mut BitCursor,
    schema: &RecordSchema,
    mut each: impl FnMut(Record) -> Result<(), NlxReadError>,
) -> Result<usize, NlxReadError> {
    let mut count = 0;
    loop {
        match schema.read_record(cursor) {
            Ok(record) => {
                each(record)?;
                count += 1;
            }
            Err(e) if e.is_end_of_stream() => return Ok(count),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Record the loop outcome and apply the tail policy to leftover bytes.
fn finish_records(
    cursor: &BitCursor,
    records: usize,
    tail_policy: TailPolicy,
    diagnostics: &mut Diagnostics,
) -> Result<(), NlxReadError> {
    diagnostics.records = records;
    let trailing_bytes = cursor.remaining_bits().div_ceil(8) as usize;
    if trailing_bytes == 0 {
        return Ok(());
    }
    diagnostics.trailing_bytes = trailing_bytes;
    match tail_policy {
        TailPolicy::Lenient => {
            diagnostics.notice(Notice::TrailingBytes {
                bytes: trailing_bytes,
            });
            Ok(())
        }
        TailPolicy::Strict => Err(NlxReadError::TruncatedRecord {
            format: diagnostics.format,
            trailing_bytes,
        }),
    }
}
