use crate::errors::{KmlError, SrtTrackResult};
use crate::telemetry::TelemetryRecord;
use log::info;
use std::fs;
use std::path::Path;

/// Title carried by the document container
const DOCUMENT_NAME: &str = "Drone Flight Path";

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Render the track as an indented KML document, one placemark per record in
/// track order. Each placemark carries the verbatim timestamp (as both
/// `TimeStamp/when` and `name`) and a point whose coordinate text is
/// `longitude,latitude,0` using the default floating point formatting.
pub fn render_kml(track: &[TelemetryRecord]) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!("<kml xmlns=\"{}\">\n", KML_NAMESPACE));
    doc.push_str("  <Document>\n");
    doc.push_str(&format!(
        "    <name>{}</name>\n",
        escape_text(DOCUMENT_NAME)
    ));

    for record in track {
        let timestamp = escape_text(&record.timestamp);
        doc.push_str("    <Placemark>\n");
        doc.push_str("      <TimeStamp>\n");
        doc.push_str(&format!("        <when>{}</when>\n", timestamp));
        doc.push_str("      </TimeStamp>\n");
        doc.push_str("      <Point>\n");
        doc.push_str(&format!(
            "        <coordinates>{},{},0</coordinates>\n",
            record.longitude, record.latitude
        ));
        doc.push_str("      </Point>\n");
        doc.push_str(&format!("      <name>{}</name>\n", timestamp));
        doc.push_str("    </Placemark>\n");
    }

    doc.push_str("  </Document>\n");
    doc.push_str("</kml>\n");
    doc
}

/// Render the track and write it to `path`, creating or overwriting the
/// file. A write failure is fatal and carries the destination path.
pub fn write_kml_file(track: &[TelemetryRecord], path: impl AsRef<Path>) -> SrtTrackResult<()> {
    let path = path.as_ref();
    let doc = render_kml(track);
    fs::write(path, &doc)
        .map_err(|err| KmlError::new(format!("cannot write {}: {}", path.display(), err)))?;
    info!("Wrote {} placemarks to {}", track.len(), path.display());
    Ok(())
}

/// Escape the XML-reserved characters so arbitrary record content cannot
/// break the document.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
