use bytes::Bytes;
use nlxread_core::{
    BitCursor, PositionSample, PositionTrack,
    schema::{POSITION_HEADER_END, POSITION_RECORD},
};

use super::{Decoded, finish_records, for_each_record};
use crate::{
    diagnostics::Diagnostics, error::NlxReadError, format::FileFormat, options::DecodeOptions,
};

/// Progress is logged every this many samples.
const PROGRESS_EVERY: usize = 1000;

/// Split position-file contents at the end-of-header token.
///
/// Returns the header (token included) and the byte offset of the first
/// data record.
pub fn split_position_header(data: &Bytes) -> Result<(Bytes, usize), NlxReadError> {
    let cursor = BitCursor::new(data.clone());
    let token_at = cursor
        .find(POSITION_HEADER_END)
        .ok_or(NlxReadError::MissingHeaderToken {
            searched_bytes: data.len(),
        })?;
    let data_start = token_at + POSITION_HEADER_END.len();
    Ok((data.slice(..data_start), data_start))
}

/// Decode the contents of a position file.
pub fn decode_positions(
    data: Bytes,
    options: &DecodeOptions,
) -> Result<Decoded<PositionTrack>, NlxReadError> {
    tracing::debug!(bytes = data.len(), "decoding positions");
    let (_, data_start) = split_position_header(&data)?;
    let mut cursor = BitCursor::new(data);
    cursor.skip_bytes(data_start)?;

    let mut diagnostics = Diagnostics::new(FileFormat::Position);
    let mut track = PositionTrack::default();
    let records = for_each_record(&mut cursor, &POSITION_RECORD, |record| {
        let sample = PositionSample::from_record(&record)?;
        track.push(sample);
        if track.len() % PROGRESS_EVERY == 0 {
            tracing::trace!(
                samples = track.len(),
                timestamp = sample.timestamp,
                x = sample.x,
                y = sample.y,
                "position progress"
            );
        }
        Ok(())
    })?;
    finish_records(&cursor, records, options.tail_policy, &mut diagnostics)?;

    tracing::debug!(samples = track.len(), header_bytes = data_start, "decoded positions");
    Ok(Decoded {
        data: track,
        diagnostics,
    })
}
