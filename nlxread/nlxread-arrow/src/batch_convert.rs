//! Conversion of decoded sequences into Arrow `RecordBatch`es.
//!
//! The parallel sequences of each source become the columns of one batch.
//! Sequences of unequal length are rejected rather than padded.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, Float32Array, Float64Array, Int16Array, Int64Array, StringArray, UInt64Array,
};
use arrow::record_batch::RecordBatch;
use nlxread_core::{ContinuousSignal, EventLog, PositionTrack};

use crate::{
    error::ArrowConvertError,
    schema_convert::{continuous_signal_schema, event_log_schema, position_track_schema},
};

pub fn event_log_to_record_batch(log: &EventLog) -> Result<RecordBatch, ArrowConvertError> {
    let rows = log.timestamps.len();
    check_len("event", rows, log.strings.len())?;

    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from(log.timestamps.clone())),
        Arc::new(StringArray::from_iter_values(&log.strings)),
    ];
    Ok(RecordBatch::try_new(Arc::new(event_log_schema()), columns)?)
}

pub fn position_track_to_record_batch(
    track: &PositionTrack,
) -> Result<RecordBatch, ArrowConvertError> {
    let rows = track.timestamps.len();
    check_len("x", rows, track.x.len())?;
    check_len("y", rows, track.y.len())?;
    check_len("direction", rows, track.direction.len())?;

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Float64Array::from(track.timestamps.clone())),
        Arc::new(Float32Array::from(track.x.clone())),
        Arc::new(Float32Array::from(track.y.clone())),
        Arc::new(Float32Array::from(track.direction.clone())),
    ];
    Ok(RecordBatch::try_new(Arc::new(position_track_schema()), columns)?)
}

pub fn continuous_signal_to_record_batch(
    signal: &ContinuousSignal,
) -> Result<RecordBatch, ArrowConvertError> {
    let rows = signal.timestamps.len();
    check_len("sample", rows, signal.samples.len())?;

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(signal.timestamps.clone())),
        Arc::new(Int16Array::from(signal.samples.clone())),
    ];
    Ok(RecordBatch::try_new(Arc::new(continuous_signal_schema()), columns)?)
}

fn check_len(column: &'static str, expected: usize, actual: usize) -> Result<(), ArrowConvertError> {
    if expected != actual {
        return Err(ArrowConvertError::LengthMismatch {
            column,
            expected,
            actual,
        });
    }
    Ok(())
}
