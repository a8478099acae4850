use srttrack::telemetry::extract_file_telemetry as telext;
use srttrack::BoundsPolicy;

#[test]
fn test_read_local_telemetry() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/DJI_0001.SRT");
    let records = telext(path, BoundsPolicy::Truncate);

    assert!(
        records.is_ok(),
        "failed to read telemetry: {:?}",
        records.err()
    );
    let records = records.unwrap();

    assert_eq!(records.len(), 3, "expected one record per subtitle block");
    let first = &records[0];
    assert_eq!(first.timestamp, "2024-03-17 14:22:05.120");
    assert_eq!(first.latitude, 48.153901);
    assert_eq!(first.longitude, 11.569834);
    let last = &records[2];
    assert_eq!(last.timestamp, "2024-03-17 14:22:05.187");
}
