pub mod ascii;
pub mod convert;
pub mod info;

use clap::Args;
use nlxread::{EventLayout, NlxReader, SampleCountPolicy, SingleBlockPolicy, TailPolicy};

/// Decoder switches shared by the commands that decode a file.
#[derive(Args)]
pub struct DecodeArgs {
    /// Decode events with 16-bit filler fields and a 128-byte string
    #[arg(long)]
    native_events: bool,

    /// Take at most the declared valid-count samples from each continuous block
    #[arg(long)]
    declared_valid_count: bool,

    /// Fail on single-block continuous files instead of using the declared rate
    #[arg(long)]
    reject_single_block: bool,

    /// Fail when the data ends inside a record
    #[arg(long)]
    strict: bool,

    /// Nominal sampling rate in Hz for continuous files
    #[arg(long)]
    nominal_rate: Option<f64>,
}

impl DecodeArgs {
    pub fn reader(&self) -> NlxReader {
        let mut builder = NlxReader::builder();
        if self.native_events {
            builder = builder.with_event_layout(EventLayout::Native);
        }
        if self.declared_valid_count {
            builder = builder.with_sample_count_policy(SampleCountPolicy::DeclaredValidCount);
        }
        if self.reject_single_block {
            builder = builder.with_single_block_policy(SingleBlockPolicy::Reject);
        }
        if self.strict {
            builder = builder.with_tail_policy(TailPolicy::Strict);
        }
        if let Some(rate) = self.nominal_rate {
            builder = builder.with_nominal_sample_rate(rate);
        }
        builder.build()
    }
}
