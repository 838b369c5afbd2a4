//! Decode-time configuration.

use nlxread_core::{
    ContinuousBlock, RecordSchema,
    schema::{BLOCK_CAPACITY, EVENT_RECORD, EVENT_RECORD_NATIVE},
};

/// Sampling rate the acquisition system is normally configured for, in Hz.
pub const NOMINAL_SAMPLE_RATE: f64 = 1001.0;

/// Device clock ticks per second (timestamps are in microseconds).
pub const TICKS_PER_SECOND: u64 = 1_000_000;

/// Which event record layout to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventLayout {
    /// Single-byte filler fields and a 1024-byte event string.
    #[default]
    Compact,
    /// 16-bit filler fields and a 128-byte event string.
    Native,
}

impl EventLayout {
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            EventLayout::Compact => &EVENT_RECORD,
            EventLayout::Native => &EVENT_RECORD_NATIVE,
        }
    }
}

/// How many samples of each continuous block are kept and timestamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleCountPolicy {
    /// Every block contributes all of its slots, whatever it declares.
    #[default]
    FixedCapacity,
    /// A block contributes only its leading `valid_count` slots.
    DeclaredValidCount,
}

impl SampleCountPolicy {
    pub fn sample_count(&self, block: &ContinuousBlock) -> usize {
        match self {
            SampleCountPolicy::FixedCapacity => BLOCK_CAPACITY,
            SampleCountPolicy::DeclaredValidCount => {
                (block.valid_count as usize).min(BLOCK_CAPACITY)
            }
        }
    }
}

/// What to do when no inter-sample step can be observed, i.e. when only one
/// block contributes samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleBlockPolicy {
    /// Derive the step from the block's declared sampling rate, or from the
    /// nominal rate if the block declares zero.
    #[default]
    DeclaredRate,
    /// Fail with [`NlxReadError::UndeterminedSampleInterval`](crate::NlxReadError::UndeterminedSampleInterval).
    Reject,
}

/// Handling of bytes left over after the last complete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Drop them and report a notice.
    #[default]
    Lenient,
    /// Fail with [`NlxReadError::TruncatedRecord`](crate::NlxReadError::TruncatedRecord).
    Strict,
}

/// Options shared by all decoders.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
    pub event_layout: EventLayout,
    pub sample_count_policy: SampleCountPolicy,
    pub single_block_policy: SingleBlockPolicy,
    pub tail_policy: TailPolicy,
    pub nominal_sample_rate: f64,
    pub ticks_per_second: u64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            event_layout: EventLayout::default(),
            sample_count_policy: SampleCountPolicy::default(),
            single_block_policy: SingleBlockPolicy::default(),
            tail_policy: TailPolicy::default(),
            nominal_sample_rate: NOMINAL_SAMPLE_RATE,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}
