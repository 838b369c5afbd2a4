//! Decoders for Neuralynx event (`.Nev`), video position (`.p`) and
//! continuous signal (`.Ncs`) files.
//!
//! Every format is a header followed by fixed-layout little-endian records.
//! Files are decoded eagerly into parallel sequences; reading stops at the
//! first record that does not fit in the remaining data. Continuous files
//! only carry one timestamp per 512-sample block, so per-sample timestamps
//! are reconstructed (see [`TimestampInterpolator`]).
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nlxread::NlxReader;
//!
//! let reader = NlxReader::new();
//! let csc = reader.read_continuous(Path::new("CSC1.Ncs"))?;
//! for notice in &csc.diagnostics.notices {
//!     eprintln!("{notice}");
//! }
//! println!("{} samples", csc.data.len());
//! # Ok::<(), nlxread::NlxReadError>(())
//! ```

mod decode;
mod diagnostics;
mod error;
mod export;
mod format;
mod interpolate;
mod options;
mod reader;

pub use decode::{
    Decoded, decode_continuous, decode_events, decode_positions, split_position_header,
};
pub use diagnostics::{Diagnostics, Notice};
pub use error::NlxReadError;
pub use export::write_position_ascii;
pub use format::FileFormat;
pub use interpolate::{FinalStep, Interpolated, TimestampInterpolator};
#[cfg(feature = "arrow")]
pub use nlxread_arrow as arrow;
pub use nlxread_core as core;
pub use options::{
    DecodeOptions, EventLayout, NOMINAL_SAMPLE_RATE, SampleCountPolicy, SingleBlockPolicy,
    TICKS_PER_SECOND, TailPolicy,
};
pub use reader::{DecodedFile, NlxReader, NlxReaderBuilder};
