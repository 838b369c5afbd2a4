use bytes::Bytes;
use nlxread_core::{BitCursor, EventLog, EventRecord, schema::HEADER_LEN};

use super::{Decoded, finish_records, for_each_record, skip_header};
use crate::{
    diagnostics::Diagnostics, error::NlxReadError, format::FileFormat, options::DecodeOptions,
};

/// Decode the contents of an event file.
pub fn decode_events(
    data: Bytes,
    options: &DecodeOptions,
) -> Result<Decoded<EventLog>, NlxReadError> {
    tracing::debug!(bytes = data.len(), layout = ?options.event_layout, "decoding events");
    let mut cursor = BitCursor::new(data);
    let mut diagnostics = Diagnostics::new(FileFormat::Event);
    let mut log = EventLog::default();

    if skip_header(&mut cursor, HEADER_LEN, &mut diagnostics) {
        let schema = options.event_layout.schema();
        let records = for_each_record(&mut cursor, schema, |record| {
            let event = EventRecord::from_record(&record)?;
            tracing::trace!(timestamp = event.timestamp, event = %event.event, "event");
            log.push(event);
            Ok(())
        })?;
        finish_records(&cursor, records, options.tail_policy, &mut diagnostics)?;
    }

    tracing::debug!(records = log.len(), "decoded events");
    Ok(Decoded {
        data: log,
        diagnostics,
    })
}
