//! Arrow integration layer for `nlxread`.
//!
//! Each decoded sequence type from `nlxread-core` maps to a flat Arrow schema
//! with one column per parallel sequence:
//!
//! | Source | Columns |
//! |--------|---------|
//! | [`EventLog`](nlxread_core::EventLog) | `timestamp: UInt64`, `event: Utf8` |
//! | [`PositionTrack`](nlxread_core::PositionTrack) | `timestamp: Float64`, `x`, `y`, `direction: Float32` |
//! | [`ContinuousSignal`](nlxread_core::ContinuousSignal) | `timestamp: Int64`, `sample: Int16` |
//!
//! Timestamps stay in device clock ticks; no unit conversion is applied.
//!
//! # Typical Flow
//! ```rust
//! use nlxread_arrow::continuous_signal_to_record_batch;
//! use nlxread_core::ContinuousSignal;
//!
//! let signal = ContinuousSignal {
//!     timestamps: vec![0, 10],
//!     samples: vec![-3, 4],
//! };
//! let batch = continuous_signal_to_record_batch(&signal).unwrap();
//! assert_eq!(batch.num_rows(), 2);
//! ```
pub mod batch_convert;
pub mod error;
pub mod schema_convert;

/// Re-exports from [`batch_convert`].
pub use batch_convert::{
    continuous_signal_to_record_batch, event_log_to_record_batch, position_track_to_record_batch,
};
/// Re-export of [`error::ArrowConvertError`].
pub use error::ArrowConvertError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{continuous_signal_schema, event_log_schema, position_track_schema};
