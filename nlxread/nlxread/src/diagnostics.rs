//! Informational findings collected while decoding.
//!
//! Nothing here ever fails a decode. Every [`Notice`] is also emitted as a
//! `tracing` warning when it is recorded.

use std::fmt;

use nlxread_core::{ContinuousBlock, schema::BLOCK_CAPACITY};

use crate::format::FileFormat;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Blocks declared more than one sampling rate (in order of first appearance).
    MultipleSampleRates(Vec<u32>),
    /// Every block declared the same rate, and it is not the nominal one.
    NonStandardSampleRate { rate: u32, nominal: f64 },
    /// Blocks whose declared valid-count is not the full block capacity.
    ShortBlocks { count: usize },
    /// The final block was timestamped from a declared rate because no
    /// inter-sample step could be observed.
    ExtrapolatedFromDeclaredRate { step: i64 },
    /// Bytes of an incomplete record were dropped at the end of the data.
    TrailingBytes { bytes: usize },
    /// The data ended inside the fixed header.
    TruncatedHeader { bytes: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MultipleSampleRates(rates) => {
                let rates: Vec<String> = rates.iter().map(u32::to_string).collect();
                write!(f, "found multiple sample rates: {} Hz", rates.join(", "))
            }
            Notice::NonStandardSampleRate { rate, nominal } => {
                write!(f, "found non-standard sample rate: {rate} Hz (expected {nominal:.1} Hz)")
            }
            Notice::ShortBlocks { count } => write!(
                f,
                "{count} blocks declare fewer than {BLOCK_CAPACITY} valid samples"
            ),
            Notice::ExtrapolatedFromDeclaredRate { step } => {
                write!(f, "final block timestamped from declared rate (step {step})")
            }
            Notice::TrailingBytes { bytes } => {
                write!(f, "dropped {bytes} bytes of an incomplete final record")
            }
            Notice::TruncatedHeader { bytes } => {
                write!(f, "data ends inside the header after {bytes} bytes")
            }
        }
    }
}

/// Summary of one decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub format: FileFormat,
    /// Complete records (continuous: blocks) read.
    pub records: usize,
    /// Bytes after the last complete record that were not decoded.
    pub trailing_bytes: usize,
    /// Distinct declared sampling rates, in order of first appearance.
    pub sample_rates: Vec<u32>,
    /// Distinct channel ids, in order of first appearance.
    pub channels: Vec<u32>,
    /// Blocks whose declared valid-count differs from the block capacity.
    pub short_blocks: usize,
    pub notices: Vec<Notice>,
}

impl Diagnostics {
    pub fn new(format: FileFormat) -> Self {
        Self {
            format,
            records: 0,
            trailing_bytes: 0,
            sample_rates: Vec::new(),
            channels: Vec::new(),
            short_blocks: 0,
            notices: Vec::new(),
        }
    }

    pub(crate) fn notice(&mut self, notice: Notice) {
        tracing::warn!(format = %self.format, "{notice}");
        self.notices.push(notice);
    }

    pub(crate) fn observe_block(&mut self, block: &ContinuousBlock) {
        if !self.sample_rates.contains(&block.sample_rate) {
            self.sample_rates.push(block.sample_rate);
        }
        if !self.channels.contains(&block.channel) {
            self.channels.push(block.channel);
        }
        if block.valid_count as usize != BLOCK_CAPACITY {
            tracing::debug!(
                timestamp = block.timestamp,
                valid_count = block.valid_count,
                "block declares a partial sample count"
            );
            self.short_blocks += 1;
        }
    }

    /// Turn the collected block statistics into notices.
    pub(crate) fn summarize_blocks(&mut self, nominal_rate: f64) {
        if self.short_blocks > 0 {
            self.notice(Notice::ShortBlocks {
                count: self.short_blocks,
            });
        }
        match self.sample_rates.as_slice() {
            [] => {}
            [rate] => {
                if f64::from(*rate) != nominal_rate {
                    self.notice(Notice::NonStandardSampleRate {
                        rate: *rate,
                        nominal: nominal_rate,
                    });
                }
            }
            rates => {
                let rates = rates.to_vec();
                self.notice(Notice::MultipleSampleRates(rates));
            }
        }
    }
}
