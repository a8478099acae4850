pub mod telemetry;
pub use telemetry::{BoundsPolicy, TelemetryRecord, TelemetryScanner};

pub mod kml;
pub use kml::{render_kml, write_kml_file};

pub mod batch;
pub use batch::{aggregate_files, collect_track_from_dir};

pub mod errors;
pub use errors::{KmlError, SrtTrackError, SrtTrackResult, TelemetryError};

use std::path::Path;

/// Extract the telemetry track from a single subtitle file.
pub fn extract_telemetry(
    path: impl AsRef<Path>,
    policy: BoundsPolicy,
) -> SrtTrackResult<Vec<TelemetryRecord>> {
    telemetry::extract_file_telemetry(path, policy)
}

/// Convert every `.SRT` file in `input_dir` into one KML flight track at
/// `output_path`, returning the aggregated track for reporting. The document
/// is written even when no records were found.
pub fn convert_directory(
    input_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    policy: BoundsPolicy,
) -> SrtTrackResult<Vec<TelemetryRecord>> {
    let track = batch::collect_track_from_dir(input_dir, policy)?;
    kml::write_kml_file(&track, output_path)?;
    Ok(track)
}
