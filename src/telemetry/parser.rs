use regex::Regex;
use std::sync::LazyLock;

/// A block marker line: one or more digits and nothing else
static BLOCK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Failed to compile block marker regex"));

/// Capture-time prefix with millisecond precision, trailing text allowed
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3})")
        .expect("Failed to compile timestamp regex")
});

static LATITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[latitude: (-?\d+\.\d+)\]").expect("Failed to compile latitude regex")
});

static LONGITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[longitude: (-?\d+\.\d+)\]").expect("Failed to compile longitude regex")
});

/// Whether the line is a subtitle counter line that opens a block.
pub(crate) fn is_block_marker(line: &str) -> bool {
    BLOCK_MARKER.is_match(line)
}

/// Match the capture timestamp at the start of the line, ignoring anything
/// after it. Returns the timestamp exactly as written.
pub(crate) fn match_timestamp(line: &str) -> Option<&str> {
    let captures = TIMESTAMP.captures(line.trim())?;
    Some(captures.get(1)?.as_str())
}

/// Search the metadata line for the two bracketed coordinate tags. Both must
/// be present for the block to yield a record.
pub(crate) fn match_coordinates(line: &str) -> Option<(f64, f64)> {
    let latitude = LATITUDE.captures(line)?.get(1)?.as_str().parse().ok()?;
    let longitude = LONGITUDE.captures(line)?.get(1)?.as_str().parse().ok()?;
    Some((latitude, longitude))
}
