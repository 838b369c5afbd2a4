//! Static record layouts and schema-driven record reads.
//!
//! Each supported file format is a fixed-size (or token-terminated) header
//! followed by a stream of identical records. A [`RecordSchema`] lists the
//! fields of one record in file order; [`RecordSchema::read_record`] walks a
//! [`BitCursor`] through them.

use bytes::Bytes;

use crate::{
    cursor::BitCursor,
    encoding::{FieldEncoding, FieldValue},
    error::{CursorError, SchemaError},
};

/// Length of the fixed text header of event and continuous files.
pub const HEADER_LEN: usize = 16_384;

/// Literal that terminates the variable-length header of position files.
pub const POSITION_HEADER_END: &[u8] = b"%ENDHEADER\r\n";

/// Sample slots per continuous block.
pub const BLOCK_CAPACITY: usize = 512;

/// Event string field length in [`EVENT_RECORD`].
pub const EVENT_STRING_LEN: usize = 1024;

/// Event string field length in [`EVENT_RECORD_NATIVE`].
pub const EVENT_STRING_LEN_NATIVE: usize = 128;

/// One declared field. `repeat > 1` declares a homogeneous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub encoding: FieldEncoding,
    pub repeat: usize,
}

impl FieldDecl {
    pub const fn new(name: &'static str, encoding: FieldEncoding) -> Self {
        Self {
            name,
            encoding,
            repeat: 1,
        }
    }

    pub const fn run(name: &'static str, encoding: FieldEncoding, repeat: usize) -> Self {
        Self {
            name,
            encoding,
            repeat,
        }
    }

    pub fn bits(&self) -> u64 {
        u64::from(self.encoding.bits()) * self.repeat as u64
    }
}

/// Ordered field layout of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldDecl],
}

impl RecordSchema {
    pub fn record_bits(&self) -> u64 {
        self.fields.iter().map(FieldDecl::bits).sum()
    }

    pub fn record_len(&self) -> usize {
        (self.record_bits() / 8) as usize
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Read one complete record.
    ///
    /// A record that does not fit in the remaining buffer fails with
    /// [`CursorError::EndOfStream`] before anything is consumed.
    pub fn read_record(&self, cursor: &mut BitCursor) -> Result<Record, CursorError> {
        let requested = self.record_bits();
        let remaining = cursor.remaining_bits();
        if requested > remaining {
            return Err(CursorError::EndOfStream {
                requested,
                remaining,
            });
        }

        let start = cursor.position();
        let mut fields = Vec::with_capacity(self.fields.len());
        for decl in self.fields {
            let slot = if decl.repeat == 1 {
                cursor.read(decl.encoding).map(FieldSlot::Single)
            } else {
                cursor
                    .read_many(decl.encoding, decl.repeat)
                    .map(FieldSlot::Run)
            };
            match slot {
                Ok(slot) => fields.push((decl.name, slot)),
                Err(e) => {
                    cursor.set_position(start)?;
                    return Err(e);
                }
            }
        }
        Ok(Record {
            record: self.name,
            fields,
        })
    }
}

/// Decoded content of one declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSlot {
    Single(FieldValue),
    Run(Vec<FieldValue>),
}

/// One decoded record, addressable by field name.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record: &'static str,
    fields: Vec<(&'static str, FieldSlot)>,
}

impl Record {
    pub fn slot(&self, name: &str) -> Result<&FieldSlot, SchemaError> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, slot)| slot)
            .ok_or_else(|| SchemaError::MissingField {
                record: self.record,
                field: name.to_string(),
            })
    }

    pub fn uint(&self, name: &str) -> Result<u64, SchemaError> {
        let value = self.single(name, "uint")?;
        value
            .as_u64()
            .ok_or_else(|| mismatch(name, "uint", value.type_name()))
    }

    pub fn int(&self, name: &str) -> Result<i64, SchemaError> {
        let value = self.single(name, "int")?;
        value
            .as_i64()
            .ok_or_else(|| mismatch(name, "int", value.type_name()))
    }

    pub fn float(&self, name: &str) -> Result<f64, SchemaError> {
        let value = self.single(name, "float")?;
        value
            .as_f64()
            .ok_or_else(|| mismatch(name, "float", value.type_name()))
    }

    pub fn bytes(&self, name: &str) -> Result<&Bytes, SchemaError> {
        let value = self.single(name, "bytes")?;
        value
            .as_bytes()
            .ok_or_else(|| mismatch(name, "bytes", value.type_name()))
    }

    /// Signed integers of a declared run.
    pub fn ints(&self, name: &str) -> Result<Vec<i64>, SchemaError> {
        match self.slot(name)? {
            FieldSlot::Run(values) => values
                .iter()
                .map(|v| v.as_i64().ok_or_else(|| mismatch(name, "int", v.type_name())))
                .collect(),
            FieldSlot::Single(_) => Err(mismatch(name, "run", "single value")),
        }
    }

    fn single(&self, name: &str, expected: &'static str) -> Result<&FieldValue, SchemaError> {
        match self.slot(name)? {
            FieldSlot::Single(value) => Ok(value),
            FieldSlot::Run(_) => Err(mismatch(name, expected, "run")),
        }
    }
}

fn mismatch(field: &str, expected: &'static str, actual: &'static str) -> SchemaError {
    SchemaError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual,
    }
}

/// Event record with single-byte filler fields and a 1024-byte string.
pub static EVENT_RECORD: RecordSchema = RecordSchema {
    name: "event",
    fields: &[
        FieldDecl::new("stx", FieldEncoding::U8),
        FieldDecl::new("packet_id", FieldEncoding::U8),
        FieldDecl::new("packet_data_size", FieldEncoding::U8),
        FieldDecl::new("timestamp", FieldEncoding::U64),
        FieldDecl::new("event_id", FieldEncoding::U8),
        FieldDecl::new("ttl", FieldEncoding::U8),
        FieldDecl::new("crc", FieldEncoding::U8),
        FieldDecl::new("dummy1", FieldEncoding::U8),
        FieldDecl::new("dummy2", FieldEncoding::U8),
        FieldDecl::run("extra", FieldEncoding::I32, 8),
        FieldDecl::new("event_string", FieldEncoding::bytes(EVENT_STRING_LEN as u32)),
    ],
};

/// Event record as written by the acquisition software: 16-bit filler fields
/// and a 128-byte string.
pub static EVENT_RECORD_NATIVE: RecordSchema = RecordSchema {
    name: "event_native",
    fields: &[
        FieldDecl::new("stx", FieldEncoding::I16),
        FieldDecl::new("packet_id", FieldEncoding::I16),
        FieldDecl::new("packet_data_size", FieldEncoding::I16),
        FieldDecl::new("timestamp", FieldEncoding::U64),
        FieldDecl::new("event_id", FieldEncoding::I16),
        FieldDecl::new("ttl", FieldEncoding::I16),
        FieldDecl::new("crc", FieldEncoding::I16),
        FieldDecl::new("dummy1", FieldEncoding::I16),
        FieldDecl::new("dummy2", FieldEncoding::I16),
        FieldDecl::run("extra", FieldEncoding::I32, 8),
        FieldDecl::new(
            "event_string",
            FieldEncoding::bytes(EVENT_STRING_LEN_NATIVE as u32),
        ),
    ],
};

pub static POSITION_RECORD: RecordSchema = RecordSchema {
    name: "position",
    fields: &[
        FieldDecl::new("timestamp", FieldEncoding::F64),
        FieldDecl::new("x", FieldEncoding::F32),
        FieldDecl::new("y", FieldEncoding::F32),
        FieldDecl::new("direction", FieldEncoding::F32),
    ],
};

pub static CONTINUOUS_RECORD: RecordSchema = RecordSchema {
    name: "continuous",
    fields: &[
        FieldDecl::new("timestamp", FieldEncoding::U64),
        FieldDecl::new("channel", FieldEncoding::U32),
        FieldDecl::new("sample_rate", FieldEncoding::U32),
        FieldDecl::new("valid_count", FieldEncoding::U32),
        FieldDecl::run("samples", FieldEncoding::I16, BLOCK_CAPACITY),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_record_lengths() {
        assert_eq!(EVENT_RECORD.record_len(), 3 + 8 + 5 + 32 + 1024);
        assert_eq!(EVENT_RECORD_NATIVE.record_len(), 184);
        assert_eq!(POSITION_RECORD.record_len(), 20);
        assert_eq!(CONTINUOUS_RECORD.record_len(), 20 + 1024);
    }

    #[test]
    fn built_in_encodings_are_valid() {
        for schema in [
            &EVENT_RECORD,
            &EVENT_RECORD_NATIVE,
            &POSITION_RECORD,
            &CONTINUOUS_RECORD,
        ] {
            for decl in schema.fields {
                assert!(decl.encoding.validate().is_ok(), "{}.{}", schema.name, decl.name);
            }
        }
    }
}
