mod parser;
mod scanner;
mod types;

pub use scanner::{extract_file_telemetry, extract_telemetry_records, TelemetryScanner};
pub use types::{BoundsPolicy, TelemetryRecord};
