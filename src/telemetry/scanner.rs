use super::parser::{is_block_marker, match_coordinates, match_timestamp};
use super::types::{BoundsPolicy, TelemetryRecord};
use crate::errors::{SrtTrackResult, TelemetryError};
use log::info;
use std::fs;
use std::path::Path;

/// Lines between a block marker and the timestamp line
const TIMESTAMP_OFFSET: usize = 3;
/// Lines between a block marker and the coordinate metadata line
const METADATA_OFFSET: usize = 4;

/// Where the scan currently is within a candidate block.
#[derive(Debug)]
enum ScanState {
    /// Walking forward looking for the next block marker line.
    SeekMarker,
    /// Marker accepted at line `marker`; inspect the timestamp line below it.
    ExpectTimestamp { marker: usize },
    /// Timestamp captured; inspect the metadata line below the marker.
    ExpectMetadata { marker: usize, timestamp: String },
}

/// Lazy scanner over subtitle text that yields one [`TelemetryRecord`] per
/// block whose timestamp and coordinate lines both match.
///
/// The scan is single-pass and line-based: after a marker is examined it
/// resumes at the very next line, so a digit line inside another block's
/// window is itself considered a marker. Blocks that fail to match are
/// skipped silently. A marker whose timestamp or metadata line would fall
/// past end-of-input is handled per [`BoundsPolicy`]: `Truncate` ends the
/// scan, `Fail` yields one error and then ends it.
#[derive(Debug)]
pub struct TelemetryScanner<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    state: ScanState,
    policy: BoundsPolicy,
    done: bool,
}

impl<'a> TelemetryScanner<'a> {
    pub fn new(content: &'a str, policy: BoundsPolicy) -> Self {
        Self {
            lines: content.lines().collect(),
            cursor: 0,
            state: ScanState::SeekMarker,
            policy,
            done: false,
        }
    }

    fn out_of_bounds(&mut self, marker: usize) -> Option<SrtTrackResult<TelemetryRecord>> {
        self.done = true;
        match self.policy {
            BoundsPolicy::Truncate => None,
            BoundsPolicy::Fail => Some(Err(TelemetryError::new(format!(
                "block marker at line {} runs past end of input",
                marker + 1
            ))
            .into())),
        }
    }
}

impl Iterator for TelemetryScanner<'_> {
    type Item = SrtTrackResult<TelemetryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match std::mem::replace(&mut self.state, ScanState::SeekMarker) {
                ScanState::SeekMarker => {
                    let marker = self.cursor;
                    if marker >= self.lines.len() {
                        self.done = true;
                        return None;
                    }
                    // the scan resumes right after the marker, not after the block
                    self.cursor = marker + 1;
                    if is_block_marker(self.lines[marker]) {
                        if marker + METADATA_OFFSET >= self.lines.len() {
                            return self.out_of_bounds(marker);
                        }
                        self.state = ScanState::ExpectTimestamp { marker };
                    }
                }
                ScanState::ExpectTimestamp { marker } => {
                    // in bounds, established when the marker was accepted
                    let line = self.lines[marker + TIMESTAMP_OFFSET];
                    if let Some(timestamp) = match_timestamp(line) {
                        self.state = ScanState::ExpectMetadata {
                            marker,
                            timestamp: timestamp.to_string(),
                        };
                    }
                }
                ScanState::ExpectMetadata { marker, timestamp } => {
                    let line = self.lines[marker + METADATA_OFFSET];
                    if let Some((latitude, longitude)) = match_coordinates(line) {
                        return Some(Ok(TelemetryRecord {
                            timestamp,
                            latitude,
                            longitude,
                        }));
                    }
                }
            }
        }
    }
}

/// Extract every telemetry record from subtitle text already in memory.
pub fn extract_telemetry_records(
    content: &str,
    policy: BoundsPolicy,
) -> SrtTrackResult<Vec<TelemetryRecord>> {
    TelemetryScanner::new(content, policy).collect()
}

/// Extract the telemetry track from a single subtitle file on disk.
pub fn extract_file_telemetry(
    path: impl AsRef<Path>,
    policy: BoundsPolicy,
) -> SrtTrackResult<Vec<TelemetryRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records = extract_telemetry_records(&content, policy)?;
    info!(
        "Extracted {} telemetry records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
