use nlxread_core::{BitCursor, CursorError, FieldEncoding, FieldValue};

#[test]
fn reads_little_endian_fields_in_order() {
    let mut buf = Vec::new();
    buf.push(0xAB);
    buf.extend_from_slice(&1000u64.to_le_bytes());
    buf.extend_from_slice(&(-2i32).to_le_bytes());
    buf.extend_from_slice(&1.5f32.to_le_bytes());
    buf.extend_from_slice(&(-0.25f64).to_le_bytes());

    let mut cursor = BitCursor::new(buf);
    assert_eq!(cursor.read(FieldEncoding::U8).unwrap(), FieldValue::UInt(0xAB));
    assert_eq!(cursor.read(FieldEncoding::U64).unwrap(), FieldValue::UInt(1000));
    assert_eq!(cursor.read(FieldEncoding::I32).unwrap(), FieldValue::Int(-2));
    assert_eq!(cursor.read(FieldEncoding::F32).unwrap(), FieldValue::Float(1.5));
    assert_eq!(cursor.read(FieldEncoding::F64).unwrap(), FieldValue::Float(-0.25));
    assert_eq!(cursor.remaining_bits(), 0);
}

#[test]
fn short_read_reports_end_of_stream_and_keeps_position() {
    let mut cursor = BitCursor::new(vec![1, 2, 3]);
    cursor.skip(8).unwrap();

    let err = cursor.read(FieldEncoding::U32).unwrap_err();
    assert_eq!(
        err,
        CursorError::EndOfStream {
            requested: 32,
            remaining: 16
        }
    );
    assert!(err.is_end_of_stream());
    assert_eq!(cursor.position(), 8);
    assert_eq!(cursor.read(FieldEncoding::U16).unwrap(), FieldValue::UInt(0x0302));
}

#[test]
fn read_many_is_all_or_nothing() {
    let mut buf = Vec::new();
    for v in [1i16, -1, 300] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    let mut cursor = BitCursor::new(buf);

    assert!(cursor.read_many(FieldEncoding::I16, 4).unwrap_err().is_end_of_stream());
    assert_eq!(cursor.position(), 0);

    let values = cursor.read_many(FieldEncoding::I16, 3).unwrap();
    assert_eq!(
        values,
        vec![FieldValue::Int(1), FieldValue::Int(-1), FieldValue::Int(300)]
    );
}

#[test]
fn unaligned_reads_regroup_bits_before_byte_order() {
    // Skipping 4 bits leaves 0x1_2 | 0x3_4 -> bytes 0x12, 0x34 (MSB first),
    // which read little-endian give 0x3412.
    let mut cursor = BitCursor::new(vec![0x01, 0x23, 0x45]);
    cursor.skip(4).unwrap();
    assert!(!cursor.is_aligned());
    assert_eq!(cursor.read(FieldEncoding::U16).unwrap(), FieldValue::UInt(0x3412));
    assert_eq!(cursor.position(), 20);
    assert_eq!(cursor.remaining_bits(), 4);
}

#[test]
fn unsupported_widths_are_rejected() {
    let mut cursor = BitCursor::new(vec![0; 16]);
    assert_eq!(
        cursor.read(FieldEncoding::FloatLe(16)).unwrap_err(),
        CursorError::UnsupportedWidth {
            encoding: "floatle",
            bits: 16
        }
    );
    assert!(cursor.read(FieldEncoding::UIntLe(12)).is_err());
    assert!(cursor.read(FieldEncoding::IntLe(72)).is_err());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn set_position_accepts_end_and_rejects_past_end() {
    let mut cursor = BitCursor::new(vec![0; 2]);
    cursor.set_position(16).unwrap();
    assert_eq!(cursor.remaining_bits(), 0);
    assert!(matches!(
        cursor.set_position(17),
        Err(CursorError::PositionOutOfRange { position: 17, len: 16 })
    ));
}

#[test]
fn find_searches_from_current_position_without_moving() {
    let buf = b"ab%END\r\nxy%END\r\n".to_vec();
    let mut cursor = BitCursor::new(buf);
    assert_eq!(cursor.find(b"%END\r\n"), Some(2));
    assert_eq!(cursor.position(), 0);

    cursor.skip_bytes(3).unwrap();
    assert_eq!(cursor.find(b"%END\r\n"), Some(10));
    assert_eq!(cursor.find(b"missing"), None);
}

#[test]
fn find_on_empty_buffer_is_none() {
    let cursor = BitCursor::new(Vec::new());
    assert_eq!(cursor.find(b"x"), None);
}

#[test]
fn read_bytes_returns_raw_slice() {
    let mut cursor = BitCursor::new(b"hello world".to_vec());
    cursor.skip_bytes(6).unwrap();
    assert_eq!(&cursor.read_bytes(5).unwrap()[..], b"world");
}
