use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur in the track converter
#[derive(Debug)]
pub enum SrtTrackError {
    Telemetry(TelemetryError),
    Kml(KmlError),
    Other(io::Error),
}

/// Telemetry extraction specific errors
#[derive(Debug)]
pub struct TelemetryError {
    pub message: String,
}

impl TelemetryError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// KML document output specific errors
#[derive(Debug)]
pub struct KmlError {
    pub message: String,
}

impl KmlError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SrtTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrtTrackError::Other(err) => write!(f, "I/O error: {}", err),
            SrtTrackError::Telemetry(err) => write!(f, "Telemetry error: {}", err),
            SrtTrackError::Kml(err) => write!(f, "KML error: {}", err),
        }
    }
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for KmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SrtTrackError {}
impl Error for TelemetryError {}
impl Error for KmlError {}

// Conversion implementations
impl From<io::Error> for SrtTrackError {
    fn from(err: io::Error) -> Self {
        SrtTrackError::Other(err)
    }
}

impl From<TelemetryError> for SrtTrackError {
    fn from(err: TelemetryError) -> Self {
        SrtTrackError::Telemetry(err)
    }
}

impl From<KmlError> for SrtTrackError {
    fn from(err: KmlError) -> Self {
        SrtTrackError::Kml(err)
    }
}

// Conversion to io::Error for callers that work in io::Result terms
impl From<SrtTrackError> for io::Error {
    fn from(err: SrtTrackError) -> Self {
        io::Error::other(err)
    }
}

impl From<TelemetryError> for io::Error {
    fn from(err: TelemetryError) -> Self {
        io::Error::other(err)
    }
}

impl From<KmlError> for io::Error {
    fn from(err: KmlError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with SrtTrackError
pub type SrtTrackResult<T> = Result<T, SrtTrackError>;
