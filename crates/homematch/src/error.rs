use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::intake::IntakeError;
use crate::workflows::placement::AllocationError;
use std::fmt;
use std::path::PathBuf;

/// Problems locating or opening the input file before any parsing happens.
#[derive(Debug, thiserror::Error)]
pub enum InputFileError {
    #[error("file {} not found, please check the path", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read input path from prompt: {0}")]
    Prompt(#[source] std::io::Error),
}

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    InputFile(InputFileError),
    Intake(IntakeError),
    Allocation(AllocationError),
    Io(std::io::Error),
    Export(csv::Error),
    Render(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::InputFile(err) => write!(f, "input file error: {}", err),
            AppError::Intake(err) => write!(f, "intake error: {}", err),
            AppError::Allocation(err) => write!(f, "allocation error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Export(err) => write!(f, "csv export error: {}", err),
            AppError::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::InputFile(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Allocation(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Render(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<InputFileError> for AppError {
    fn from(value: InputFileError) -> Self {
        Self::InputFile(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

impl From<AllocationError> for AppError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}
