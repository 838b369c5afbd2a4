//! File-level entry points: path validation, loading and format dispatch.

use std::{fs, path::Path};

#[cfg(feature = "arrow")]
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use memmap2::Mmap;
#[cfg(feature = "arrow")]
use nlxread_arrow::{
    ArrowConvertError, continuous_signal_to_record_batch, event_log_to_record_batch,
    position_track_to_record_batch,
};
use nlxread_core::{ContinuousSignal, EventLog, PositionTrack};

use crate::{
    decode::{Decoded, decode_continuous, decode_events, decode_positions, split_position_header},
    diagnostics::Diagnostics,
    error::NlxReadError,
    format::FileFormat,
    options::{DecodeOptions, EventLayout, SampleCountPolicy, SingleBlockPolicy, TailPolicy},
};

/// Reads Neuralynx files from disk and decodes them with a fixed set of
/// [`DecodeOptions`].
#[derive(Debug, Clone, Default)]
pub struct NlxReader {
    options: DecodeOptions,
}

/// Builder for configuring [`NlxReader`].
#[derive(Debug, Clone, Default)]
pub struct NlxReaderBuilder {
    options: DecodeOptions,
}

/// Result of [`NlxReader::read`], tagged by detected format.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedFile {
    Events(Decoded<EventLog>),
    Positions(Decoded<PositionTrack>),
    Continuous(Decoded<ContinuousSignal>),
}

impl DecodedFile {
    pub fn format(&self) -> FileFormat {
        self.diagnostics().format
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            DecodedFile::Events(d) => &d.diagnostics,
            DecodedFile::Positions(d) => &d.diagnostics,
            DecodedFile::Continuous(d) => &d.diagnostics,
        }
    }

    /// Number of output rows (events, position samples, or signal samples).
    pub fn len(&self) -> usize {
        match self {
            DecodedFile::Events(d) => d.data.len(),
            DecodedFile::Positions(d) => d.data.len(),
            DecodedFile::Continuous(d) => d.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert the decoded sequences into a single Arrow batch.
    #[cfg(feature = "arrow")]
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowConvertError> {
        match self {
            DecodedFile::Events(d) => event_log_to_record_batch(&d.data),
            DecodedFile::Positions(d) => position_track_to_record_batch(&d.data),
            DecodedFile::Continuous(d) => continuous_signal_to_record_batch(&d.data),
        }
    }
}

impl NlxReader {
    /// Create a builder for [`NlxReader`].
    pub fn builder() -> NlxReaderBuilder {
        NlxReaderBuilder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Read an event file (`.Nev`).
    pub fn read_events(&self, path: &Path) -> Result<Decoded<EventLog>, NlxReadError> {
        let data = open_checked(path, FileFormat::Event)?;
        decode_events(data, &self.options)
    }

    /// Read a position file (`.p`).
    pub fn read_positions(&self, path: &Path) -> Result<Decoded<PositionTrack>, NlxReadError> {
        let data = open_checked(path, FileFormat::Position)?;
        decode_positions(data, &self.options)
    }

    /// Read a continuous file (`.Ncs`).
    pub fn read_continuous(
        &self,
        path: &Path,
    ) -> Result<Decoded<ContinuousSignal>, NlxReadError> {
        let data = open_checked(path, FileFormat::Continuous)?;
        decode_continuous(data, &self.options)
    }

    /// Read any supported file, choosing the decoder from its extension.
    pub fn read(&self, path: &Path) -> Result<DecodedFile, NlxReadError> {
        let format = FileFormat::from_path(path).ok_or_else(|| NlxReadError::UnknownFormat {
            path: path.display().to_string(),
        })?;
        Ok(match format {
            FileFormat::Event => DecodedFile::Events(self.read_events(path)?),
            FileFormat::Position => DecodedFile::Positions(self.read_positions(path)?),
            FileFormat::Continuous => DecodedFile::Continuous(self.read_continuous(path)?),
        })
    }

    /// Raw header of a position file, end-of-header token included.
    pub fn position_header(&self, path: &Path) -> Result<Bytes, NlxReadError> {
        let data = open_checked(path, FileFormat::Position)?;
        let (header, _) = split_position_header(&data)?;
        Ok(header)
    }
}

impl NlxReaderBuilder {
    pub fn with_event_layout(mut self, layout: EventLayout) -> Self {
        self.options.event_layout = layout;
        self
    }

    pub fn with_sample_count_policy(mut self, policy: SampleCountPolicy) -> Self {
        self.options.sample_count_policy = policy;
        self
    }

    pub fn with_single_block_policy(mut self, policy: SingleBlockPolicy) -> Self {
        self.options.single_block_policy = policy;
        self
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.options.tail_policy = policy;
        self
    }

    /// Sampling rate (Hz) that continuous blocks are expected to declare
    /// (default: 1001).
    pub fn with_nominal_sample_rate(mut self, rate: f64) -> Self {
        self.options.nominal_sample_rate = rate;
        self
    }

    /// Device clock ticks per second (default: 1 000 000).
    pub fn with_ticks_per_second(mut self, ticks: u64) -> Self {
        self.options.ticks_per_second = ticks;
        self
    }

    /// Build the reader.
    pub fn build(self) -> NlxReader {
        NlxReader::with_options(self.options)
    }
}

pub(crate) fn open_checked(path: &Path, format: FileFormat) -> Result<Bytes, NlxReadError> {
    let invalid = |reason: &str| NlxReadError::InvalidInput {
        format,
        path: path.display().to_string(),
        reason: reason.to_string(),
    };
    if FileFormat::from_path(path) != Some(format) {
        return Err(invalid(&format!(
            "expected a .{} extension",
            format.extension()
        )));
    }
    if !path.is_file() {
        return Err(invalid("no such file"));
    }
    mmap_file(path)
}

fn mmap_file(path: &Path) -> Result<Bytes, NlxReadError> {
    let file = fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Bytes::new());
    }
    let mmap = unsafe { Mmap::map(&file) }?;
    Ok(Bytes::from_owner(mmap))
}
