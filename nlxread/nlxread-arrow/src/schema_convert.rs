//! Arrow schemas for the decoded sequence types.

use arrow::datatypes::{DataType, Field, Schema};

pub fn event_log_schema() -> Schema {
    Schema::new(vec![
        Field::new("timestamp", DataType::UInt64, false),
        Field::new("event", DataType::Utf8, false),
    ])
}

pub fn position_track_schema() -> Schema {
    Schema::new(vec![
        Field::new("timestamp", DataType::Float64, false),
        Field::new("x", DataType::Float32, false),
        Field::new("y", DataType::Float32, false),
        Field::new("direction", DataType::Float32, false),
    ])
}

pub fn continuous_signal_schema() -> Schema {
    Schema::new(vec![
        Field::new("timestamp", DataType::Int64, false),
        Field::new("sample", DataType::Int16, false),
    ])
}
