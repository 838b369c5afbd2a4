
use nlxread::{
    DecodedFile, FileFormat, NlxReadError, NlxReader, Notice, SampleCountPolicy, TailPolicy,
};
use tempfile::tempdir;
use test_helpers::*;

#[test]
fn read_events_from_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "Events.Nev", &event_file(&[(1000, "start")]));

    let decoded = NlxReader::new().read_events(&path).unwrap();
    assert_eq!(decoded.data.timestamps, vec![1000]);
    assert_eq!(decoded.data.strings, vec!["start"]);
}

#[test]
fn extension_match_ignores_case() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "CSC1.NCS", &continuous_file(&[0, 5120], 1001));

    let decoded = NlxReader::new().read_continuous(&path).unwrap();
    assert_eq!(decoded.data.len(), 1024);
}

#[test]
fn wrong_extension_is_invalid_input() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "Events.txt", &event_file(&[]));

    let err = NlxReader::new().read_events(&path).unwrap_err();
    assert!(matches!(
        err,
        NlxReadError::InvalidInput {
            format: FileFormat::Event,
            ..
        }
    ));
    assert!(err.to_string().contains("expected a .nev extension"));
}

#[test]
fn missing_file_is_invalid_input() {
    let dir = tempdir().unwrap();
    let err = NlxReader::new()
        .read_positions(&dir.path().join("Pos.p"))
        .unwrap_err();
    assert!(matches!(err, NlxReadError::InvalidInput { .. }));
    assert!(err.to_string().contains("no such file"));
}

#[test]
fn directory_is_invalid_input() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("Session.Ncs");
    std::fs::create_dir(&sub).unwrap();

    let err = NlxReader::new().read_continuous(&sub).unwrap_err();
    assert!(matches!(err, NlxReadError::InvalidInput { .. }));
}

#[test]
fn empty_file_decodes_to_empty_output() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "CSC2.Ncs", &[]);

    let decoded = NlxReader::new().read_continuous(&path).unwrap();
    assert!(decoded.data.is_empty());
    assert_eq!(
        decoded.diagnostics.notices,
        vec![Notice::TruncatedHeader { bytes: 0 }]
    );
}

#[test]
fn read_dispatches_on_extension() {
    let dir = tempdir().unwrap();
    let nev = write_fixture(dir.path(), "Events.Nev", &event_file(&[(1, "a"), (2, "b")]));
    let pos = write_fixture(
        dir.path(),
        "Pos.p",
        &position_file("hdr\r\n", &[(1.0, 2.0, 3.0, 4.0)]),
    );
    let ncs = write_fixture(dir.path(), "CSC3.Ncs", &continuous_file(&[0, 5120], 1001));
    let reader = NlxReader::new();

    let events = reader.read(&nev).unwrap();
    assert!(matches!(events, DecodedFile::Events(_)));
    assert_eq!(events.format(), FileFormat::Event);
    assert_eq!(events.len(), 2);

    let positions = reader.read(&pos).unwrap();
    assert!(matches!(positions, DecodedFile::Positions(_)));
    assert_eq!(positions.len(), 1);

    let continuous = reader.read(&ncs).unwrap();
    assert_eq!(continuous.format(), FileFormat::Continuous);
    assert_eq!(continuous.diagnostics().records, 2);
    assert_eq!(continuous.len(), 1024);
}

#[cfg(feature = "arrow")]
#[test]
fn decoded_file_converts_to_record_batch() {
    use arrow::array::{Array, Int16Array};

    let dir = tempdir().unwrap();
    let ncs = write_fixture(dir.path(), "CSC1.Ncs", &continuous_file(&[0, 5120], 1001));
    let decoded = NlxReader::new().read(&ncs).unwrap();

    let batch = decoded.to_record_batch().unwrap();
    assert_eq!(batch.num_rows(), decoded.len());
    assert_eq!(batch.schema().field(0).name(), "timestamp");

    let samples = batch
        .column_by_name("sample")
        .unwrap()
        .as_any()
        .downcast_ref::<Int16Array>()
        .unwrap();
    assert_eq!(samples.value(513), 1001);
}

#[test]
fn read_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "notes.md", b"# notes");
    assert!(matches!(
        NlxReader::new().read(&path),
        Err(NlxReadError::UnknownFormat { .. })
    ));
}

#[test]
fn position_header_is_returned_verbatim() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "Pos.p",
        &position_file("-Resolution 720 480\r\n", &[(1.0, 2.0, 3.0, 4.0)]),
    );

    let header = NlxReader::new().position_header(&path).unwrap();
    assert_eq!(&header[..], b"-Resolution 720 480\r\n%ENDHEADER\r\n");
}

#[test]
fn builder_options_reach_decoders() {
    let dir = tempdir().unwrap();
    let mut data = fixed_header();
    data.extend(continuous_block(0, 0, 1001, 10, |i| i as i16));
    data.extend(continuous_block(100, 0, 1001, 10, |i| i as i16));
    data.push(0);
    let path = write_fixture(dir.path(), "CSC4.Ncs", &data);

    let lenient = NlxReader::builder()
        .with_sample_count_policy(SampleCountPolicy::DeclaredValidCount)
        .build();
    let decoded = lenient.read_continuous(&path).unwrap();
    assert_eq!(decoded.data.len(), 20);
    assert_eq!(decoded.data.timestamps[..3], [0, 10, 20]);

    let strict = NlxReader::builder()
        .with_tail_policy(TailPolicy::Strict)
        .build();
    assert_eq!(strict.options().tail_policy, TailPolicy::Strict);
    assert!(matches!(
        strict.read_continuous(&path),
        Err(NlxReadError::TruncatedRecord {
            trailing_bytes: 1,
            ..
        })
    ));
}
