use bytes::Bytes;
use nlxread_core::{
    BitCursor, ContinuousBlock, ContinuousSignal,
    schema::{CONTINUOUS_RECORD, HEADER_LEN},
};

use super::{Decoded, finish_records, for_each_record, skip_header};
use crate::{
    diagnostics::{Diagnostics, Notice},
    error::NlxReadError,
    format::FileFormat,
    interpolate::{FinalStep, TimestampInterpolator},
    options::DecodeOptions,
};

/// Decode the contents of a continuous file and reconstruct one timestamp
/// per sample.
pub fn decode_continuous(
    data: Bytes,
    options: &DecodeOptions,
) -> Result<Decoded<ContinuousSignal>, NlxReadError> {
    tracing::debug!(
        bytes = data.len(),
        policy = ?options.sample_count_policy,
        "decoding continuous"
    );
    let mut cursor = BitCursor::new(data);
    let mut diagnostics = Diagnostics::new(FileFormat::Continuous);
    if !skip_header(&mut cursor, HEADER_LEN, &mut diagnostics) {
        return Ok(Decoded {
            data: ContinuousSignal::default(),
            diagnostics,
        });
    }

    let mut samples = Vec::new();
    let mut interpolator = TimestampInterpolator::new();
    let records = for_each_record(&mut cursor, &CONTINUOUS_RECORD, |record| {
        let block = ContinuousBlock::from_record(&record)?;
        let count = options.sample_count_policy.sample_count(&block);
        tracing::trace!(
            timestamp = block.timestamp,
            channel = block.channel,
            sample_rate = block.sample_rate,
            valid_count = block.valid_count,
            "block"
        );
        diagnostics.observe_block(&block);
        samples.extend_from_slice(&block.samples[..count]);
        interpolator.push(block.timestamp, count, block.sample_rate);
        Ok(())
    })?;
    finish_records(&cursor, records, options.tail_policy, &mut diagnostics)?;

    let interpolated = interpolator.finish(options)?;
    if let Some(FinalStep::FromDeclaredRate(step)) = interpolated.final_step {
        diagnostics.notice(Notice::ExtrapolatedFromDeclaredRate { step });
    }
    diagnostics.summarize_blocks(options.nominal_sample_rate);

    tracing::debug!(blocks = records, samples = samples.len(), "decoded continuous");
    Ok(Decoded {
        data: ContinuousSignal {
            timestamps: interpolated.timestamps,
            samples,
        },
        diagnostics,
    })
}
