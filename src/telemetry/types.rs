use serde::Serialize;

/// Telemetry fix recovered from a single subtitle block
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    /// Capture time as it appeared in the subtitle, `YYYY-MM-DD HH:MM:SS.mmm`
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Policy for a block marker that sits too close to end-of-input for its
/// timestamp and metadata lines to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Treat the truncated block as end-of-input and stop scanning the file.
    #[default]
    Truncate,
    /// Fail extraction of the whole file.
    Fail,
}
