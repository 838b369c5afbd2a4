//! Per-sample timestamp reconstruction for the continuous format.
//!
//! Continuous files store one timestamp per block. Sample timestamps are
//! spread evenly between consecutive block anchors:
//!
//! ```text
//! step_i = round((ts_{i+1} - ts_i) / count_i)
//! block i -> ts_i, ts_i + step_i, ..., ts_i + (count_i - 1) * step_i
//! ```
//!
//! A block can only be emitted once the next anchor is known, so output lags
//! one block behind input. The last block has no following anchor and is
//! extrapolated with the step of the block before it.

use crate::{
    error::NlxReadError,
    options::{DecodeOptions, SingleBlockPolicy},
};

#[derive(Debug, Clone, Copy)]
struct Anchor {
    timestamp: u64,
    count: usize,
    sample_rate: u32,
}

/// Where the step used for the final block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalStep {
    /// The step of the most recently emitted block.
    Observed(i64),
    /// Derived from a declared (or nominal) sampling rate.
    FromDeclaredRate(i64),
}

impl FinalStep {
    pub fn step(&self) -> i64 {
        match *self {
            FinalStep::Observed(s) | FinalStep::FromDeclaredRate(s) => s,
        }
    }
}

/// Result of [`TimestampInterpolator::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolated {
    pub timestamps: Vec<i64>,
    /// `None` when no block contributed samples.
    pub final_step: Option<FinalStep>,
}

/// Streaming timestamp interpolator fed one block anchor at a time.
#[derive(Debug, Default)]
pub struct TimestampInterpolator {
    prev: Option<Anchor>,
    step: Option<i64>,
    timestamps: Vec<i64>,
}

impl TimestampInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timestamps emitted so far.
    pub fn emitted(&self) -> usize {
        self.timestamps.len()
    }

    /// Register the next block: its anchor timestamp, how many samples it
    /// contributes, and its declared sampling rate.
    ///
    /// Emits the timestamps of the previously registered block.
    pub fn push(&mut self, timestamp: u64, count: usize, sample_rate: u32) {
        if let Some(prev) = self.prev
            && prev.count > 0
        {
            let step = rounded_step(prev.timestamp, timestamp, prev.count);
            self.emit(prev.timestamp, prev.count, step);
            self.step = Some(step);
        }
        self.prev = Some(Anchor {
            timestamp,
            count,
            sample_rate,
        });
    }

    /// Extrapolate the last registered block and return every timestamp.
    pub fn finish(mut self, options: &DecodeOptions) -> Result<Interpolated, NlxReadError> {
        let Some(last) = self.prev.filter(|a| a.count > 0) else {
            let final_step = self.step.map(FinalStep::Observed);
            return Ok(Interpolated {
                timestamps: self.timestamps,
                final_step,
            });
        };

        let final_step = match self.step {
            Some(step) => FinalStep::Observed(step),
            None => match options.single_block_policy {
                SingleBlockPolicy::DeclaredRate => {
                    FinalStep::FromDeclaredRate(step_from_rate(last.sample_rate, options)?)
                }
                SingleBlockPolicy::Reject => return Err(NlxReadError::UndeterminedSampleInterval),
            },
        };
        self.emit(last.timestamp, last.count, final_step.step());

        Ok(Interpolated {
            timestamps: self.timestamps,
            final_step: Some(final_step),
        })
    }

    fn emit(&mut self, start: u64, count: usize, step: i64) {
        let start = start as i64;
        self.timestamps.reserve(count);
        self.timestamps.extend(
            (0..count as i64).map(|k| start.wrapping_add(step.wrapping_mul(k))),
        );
    }
}

/// `(to - from) / count`, rounded half away from zero.
fn rounded_step(from: u64, to: u64, count: usize) -> i64 {
    let diff = i128::from(to) - i128::from(from);
    let c = count as i128;
    let q = if diff >= 0 {
        (diff + c / 2) / c
    } else {
        (diff - c / 2) / c
    };
    i64::try_from(q).unwrap_or(if q < 0 { i64::MIN } else { i64::MAX })
}

fn step_from_rate(declared: u32, options: &DecodeOptions) -> Result<i64, NlxReadError> {
    let rate = if declared > 0 {
        f64::from(declared)
    } else {
        options.nominal_sample_rate
    };
    if !(rate.is_finite() && rate > 0.0) {
        return Err(NlxReadError::UndeterminedSampleInterval);
    }
    Ok((options.ticks_per_second as f64 / rate).round() as i64)
}
