use crate::errors::SrtTrackResult;
use crate::telemetry::{extract_file_telemetry, BoundsPolicy, TelemetryRecord};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension recognized for telemetry subtitle files, matched case-exactly
const SUBTITLE_EXTENSION: &str = ".SRT";

/// Run the extractor over each file in the given order and concatenate the
/// records, preserving intra-file and inter-file order. Any file that cannot
/// be read fails the whole aggregation.
pub fn aggregate_files(
    paths: impl IntoIterator<Item = PathBuf>,
    policy: BoundsPolicy,
) -> SrtTrackResult<Vec<TelemetryRecord>> {
    let mut track = Vec::new();
    for path in paths {
        let records = extract_file_telemetry(&path, policy)?;
        track.extend(records);
    }
    Ok(track)
}

/// Aggregate the telemetry track over every subtitle file in `dir`, in the
/// order the directory listing provides them.
pub fn collect_track_from_dir(
    dir: impl AsRef<Path>,
    policy: BoundsPolicy,
) -> SrtTrackResult<Vec<TelemetryRecord>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_subtitle_extension(&path) {
            paths.push(path);
        }
    }
    info!("Found {} subtitle files in {}", paths.len(), dir.display());
    aggregate_files(paths, policy)
}

fn has_subtitle_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SUBTITLE_EXTENSION))
}
