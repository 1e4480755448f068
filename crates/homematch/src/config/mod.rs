use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level configuration for a placement run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub files: FileConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_dir =
            PathBuf::from(env::var("APP_BASE_DIR").unwrap_or_else(|_| ".".to_string()));

        let input_file = env::var("APP_INPUT_FILE").unwrap_or_else(|_| "input.txt".to_string());
        if input_file.trim().is_empty() {
            return Err(ConfigError::EmptyFileName("APP_INPUT_FILE"));
        }

        let output_file = env::var("APP_OUTPUT_FILE").unwrap_or_else(|_| "output.txt".to_string());
        if output_file.trim().is_empty() {
            return Err(ConfigError::EmptyFileName("APP_OUTPUT_FILE"));
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            files: FileConfig {
                base_dir,
                input_file: input_file.trim().to_string(),
                output_file: output_file.trim().to_string(),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where input records are read from and rendered results are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub base_dir: PathBuf,
    pub input_file: String,
    pub output_file: String,
}

impl FileConfig {
    /// Resolves `name` against the base directory; absolute paths pass through.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(name)
    }

    pub fn default_input_path(&self) -> PathBuf {
        self.resolve(&self.input_file)
    }

    pub fn default_output_path(&self) -> PathBuf {
        self.resolve(&self.output_file)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyFileName(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFileName(var) => write!(f, "{var} must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
