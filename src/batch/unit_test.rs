use crate::batch::{aggregate_files, collect_track_from_dir};
use crate::errors::SrtTrackError;
use crate::telemetry::BoundsPolicy;
use std::fs;
use std::path::PathBuf;

#[cfg(test)]
mod test_helpers {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Write a subtitle file with one valid block per (timestamp, lat, lon).
    pub fn write_subtitle_file(
        dir: &Path,
        name: &str,
        fixes: &[(&str, f64, f64)],
    ) -> PathBuf {
        let mut content = String::new();
        for (i, (timestamp, latitude, longitude)) in fixes.iter().enumerate() {
            content.push_str(&format!(
                "{}\n00:00:0{},000 --> 00:00:0{},100\n<font size=\"28\">SrtCnt : {}</font>\n{}\n[latitude: {:.6}] [longitude: {:.6}]\n\n",
                i + 1,
                i,
                i,
                i + 1,
                timestamp,
                latitude,
                longitude
            ));
        }
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_aggregate_files_preserves_given_order() {
    use test_helpers::write_subtitle_file;
    let dir = tempfile::tempdir().unwrap();
    let first = write_subtitle_file(
        dir.path(),
        "a.SRT",
        &[
            ("2024-01-01 10:00:00.000", 1.0, 2.0),
            ("2024-01-01 10:00:01.000", 3.0, 4.0),
        ],
    );
    let second = write_subtitle_file(
        dir.path(),
        "b.SRT",
        &[("2024-01-01 09:00:00.000", 5.0, 6.0)],
    );

    // caller order wins, even against timestamp order
    let track = aggregate_files(vec![second, first], BoundsPolicy::Truncate).unwrap();
    assert_eq!(track.len(), 3);
    assert_eq!(track[0].latitude, 5.0);
    assert_eq!(track[1].latitude, 1.0);
    assert_eq!(track[2].latitude, 3.0);
}

#[test]
fn test_directory_filter_is_case_exact() {
    use test_helpers::write_subtitle_file;
    let dir = tempfile::tempdir().unwrap();
    write_subtitle_file(
        dir.path(),
        "flight.SRT",
        &[("2024-01-01 10:00:00.000", 1.0, 2.0)],
    );
    write_subtitle_file(
        dir.path(),
        "ignored.srt",
        &[("2024-01-01 11:00:00.000", 3.0, 4.0)],
    );
    fs::write(dir.path().join("notes.txt"), "not a subtitle").unwrap();

    let track = collect_track_from_dir(dir.path(), BoundsPolicy::Truncate).unwrap();
    assert_eq!(track.len(), 1);
    assert_eq!(track[0].latitude, 1.0);
}

#[test]
fn test_empty_directory_yields_empty_track() {
    let dir = tempfile::tempdir().unwrap();
    let track = collect_track_from_dir(dir.path(), BoundsPolicy::Truncate).unwrap();
    assert!(track.is_empty());
}

#[test]
fn test_unreadable_file_is_fatal() {
    let missing = PathBuf::from("/nonexistent/flight.SRT");
    let result = aggregate_files(vec![missing], BoundsPolicy::Truncate);
    assert!(matches!(result, Err(SrtTrackError::Other(_))));
}
