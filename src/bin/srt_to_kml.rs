use clap::Parser;
use srttrack::{convert_directory, BoundsPolicy, TelemetryRecord};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "srt_to_kml")]
#[command(about = "Convert drone .SRT subtitle telemetry into a KML flight track")]
struct Cli {
    /// Directory containing .SRT subtitle files
    input_dir: PathBuf,
    /// Destination path for the generated KML document
    output: PathBuf,
    /// Fail on a subtitle block truncated by end-of-file instead of ignoring it
    #[arg(long)]
    fail_on_truncated: bool,
    /// Print the extracted track as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let policy = if cli.fail_on_truncated {
        BoundsPolicy::Fail
    } else {
        BoundsPolicy::Truncate
    };

    let track = match convert_directory(&cli.input_dir, &cli.output, policy) {
        Ok(track) => track,
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&track) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON encoding failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_track_table(&track);
    }

    println!("{} records extracted", track.len());
    println!("KML file saved to {}", cli.output.display());
    ExitCode::SUCCESS
}

fn print_track_table(track: &[TelemetryRecord]) {
    if track.is_empty() {
        println!("No telemetry records found");
        return;
    }
    println!("{:<24} {:>12} {:>13}", "Timestamp", "Latitude", "Longitude");
    for record in track {
        println!(
            "{:<24} {:>12.6} {:>13.6}",
            record.timestamp, record.latitude, record.longitude
        );
    }
}
