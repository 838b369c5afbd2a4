//! Typed records and the parallel sequences returned to callers.

use crate::{
    error::SchemaError,
    schema::{BLOCK_CAPACITY, Record},
};

/// One event marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Device clock ticks.
    pub timestamp: u64,
    pub event: String,
}

impl EventRecord {
    pub fn from_record(record: &Record) -> Result<Self, SchemaError> {
        Ok(Self {
            timestamp: record.uint("timestamp")?,
            event: null_terminated(record.bytes("event_string")?),
        })
    }
}

/// Decode a fixed-length ASCII field, dropping everything from the first NUL.
///
/// A field without any NUL is kept whole. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn null_terminated(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Event timestamps and strings as parallel sequences of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub timestamps: Vec<u64>,
    pub strings: Vec<String>,
}

impl EventLog {
    pub fn push(&mut self, record: EventRecord) {
        self.timestamps.push(record.timestamp);
        self.strings.push(record.event);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.strings.iter().map(String::as_str))
    }
}

/// One video-tracker sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    pub timestamp: f64,
    pub x: f32,
    pub y: f32,
    pub direction: f32,
}

impl PositionSample {
    pub fn from_record(record: &Record) -> Result<Self, SchemaError> {
        // f32 fields are widened on read; narrowing back is exact.
        Ok(Self {
            timestamp: record.float("timestamp")?,
            x: record.float("x")? as f32,
            y: record.float("y")? as f32,
            direction: record.float("direction")? as f32,
        })
    }
}

/// Position samples as four parallel sequences of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionTrack {
    pub timestamps: Vec<f64>,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub direction: Vec<f32>,
}

impl PositionTrack {
    pub fn push(&mut self, sample: PositionSample) {
        self.timestamps.push(sample.timestamp);
        self.x.push(sample.x);
        self.y.push(sample.y);
        self.direction.push(sample.direction);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PositionSample> {
        Some(PositionSample {
            timestamp: *self.timestamps.get(index)?,
            x: *self.x.get(index)?,
            y: *self.y.get(index)?,
            direction: *self.direction.get(index)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = PositionSample> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

/// One block of the continuous format. Only lives for the duration of a read
/// loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuousBlock {
    pub timestamp: u64,
    pub channel: u32,
    /// Declared sampling rate in Hz; informational.
    pub sample_rate: u32,
    /// Declared number of meaningful slots in `samples`; informational.
    pub valid_count: u32,
    pub samples: [i16; BLOCK_CAPACITY],
}

impl ContinuousBlock {
    pub fn from_record(record: &Record) -> Result<Self, SchemaError> {
        let mut samples = [0i16; BLOCK_CAPACITY];
        for (slot, value) in samples.iter_mut().zip(record.ints("samples")?) {
            *slot = value as i16;
        }
        Ok(Self {
            timestamp: record.uint("timestamp")?,
            channel: record.uint("channel")? as u32,
            sample_rate: record.uint("sample_rate")? as u32,
            valid_count: record.uint("valid_count")? as u32,
            samples,
        })
    }
}

/// Reconstructed continuous signal: one synthesized timestamp per sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuousSignal {
    pub timestamps: Vec<i64>,
    pub samples: Vec<i16>,
}

impl ContinuousSignal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i16)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.samples.iter().copied())
    }
}
