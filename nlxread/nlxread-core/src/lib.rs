//! Format-agnostic building blocks for `nlxread`.
//!
//! This crate provides the bit-granular [`BitCursor`], the static
//! [`RecordSchema`] layouts of the supported Neuralynx formats, and the typed
//! sequences ([`EventLog`], [`PositionTrack`], [`ContinuousSignal`]) that
//! decoders return.

mod cursor;
mod encoding;
mod error;
pub mod schema;
mod types;

pub use cursor::BitCursor;
pub use encoding::{FieldEncoding, FieldValue};
pub use error::{CursorError, SchemaError};
pub use schema::{FieldDecl, FieldSlot, Record, RecordSchema};
pub use types::{
    ContinuousBlock, ContinuousSignal, EventLog, EventRecord, PositionSample, PositionTrack,
    null_terminated,
};
