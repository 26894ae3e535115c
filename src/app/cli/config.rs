//! TOML configuration loading and settings resolution
//!
//! Settings are layered: built-in defaults, then the configuration file
//! (`--config-file`, else `<config_dir>/Nutriscan/nutriscan.toml` when it
//! exists), then command line flags.

use crate::app::cli::args::{Args, Backend, OutputFormat};
use crate::lookup::api::DEFAULT_OFF_BASE_URL;
use crate::presentation::api::PLACEHOLDER_IMAGE;
use crate::scanner::api::{DetectionRegion, DeviceId, ScanOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ADDITIVES_FILE: &str = "additives.csv";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: &[&str] = &["text", "ext", "json"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Error parsing configuration file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { .. } => Some("The specified configuration file does not exist"),
            ConfigError::Parse { reason, .. } => Some(reason),
            ConfigError::Invalid { message } => Some(message),
            ConfigError::Read { .. } => None,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Contents of `nutriscan.toml`
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub lookup: LookupSection,
    pub scanner: ScannerSection,
    pub output: OutputSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LookupSection {
    pub backend: Option<Backend>,
    pub base_url: Option<String>,
    pub off_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub additives_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerSection {
    pub devices: Option<Vec<PathBuf>>,
    pub fps: Option<u32>,
    pub region_width: Option<u32>,
    pub region_height: Option<u32>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub placeholder_image: Option<String>,
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: Option<String>,
    pub format: Option<String>,
    pub file: Option<String>,
}

impl FileConfig {
    pub fn parse(path: &Path, contents: &str) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Load the explicit file, or the default one when it exists
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means there is nothing to load.
    pub async fn load(explicit: Option<&Path>) -> ConfigResult<Option<Self>> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        log::debug!("Loading configuration from {}", path.display());
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ConfigError::Read {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        Self::parse(&path, &contents).map(Some)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Nutriscan").join("nutriscan.toml"))
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub backend: Backend,
    pub base_url: String,
    pub off_base_url: String,
    pub timeout: Option<Duration>,
    pub additives_file: PathBuf,
    pub devices: Vec<PathBuf>,
    pub scan_options: ScanOptions,
    pub output: OutputFormat,
    pub placeholder_image: String,
    pub color: Option<bool>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            off_base_url: DEFAULT_OFF_BASE_URL.to_string(),
            timeout: None,
            additives_file: PathBuf::from(DEFAULT_ADDITIVES_FILE),
            devices: vec![PathBuf::from(DeviceId::STDIN)],
            scan_options: ScanOptions::default(),
            output: OutputFormat::default(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            color: None,
            log_level: None,
            log_format: None,
            log_file: None,
        }
    }
}

impl Settings {
    /// Resolve settings from an optional file and the command line
    pub fn resolve(file: Option<FileConfig>, args: &Args) -> ConfigResult<Self> {
        let mut settings = Self::default();
        if let Some(file) = file {
            settings.apply_file(file);
        }
        settings.apply_args(args);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_file(&mut self, file: FileConfig) {
        let FileConfig {
            lookup,
            scanner,
            output,
            log,
        } = file;

        if let Some(backend) = lookup.backend {
            self.backend = backend;
        }
        if let Some(url) = lookup.base_url {
            self.base_url = url;
        }
        if let Some(url) = lookup.off_base_url {
            self.off_base_url = url;
        }
        if let Some(secs) = lookup.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(path) = lookup.additives_file {
            self.additives_file = path;
        }

        if let Some(devices) = scanner.devices {
            self.devices = devices;
        }
        if let Some(fps) = scanner.fps {
            self.scan_options.fps = fps;
        }
        if let Some(width) = scanner.region_width {
            self.scan_options.detection_region.width = width;
        }
        if let Some(height) = scanner.region_height {
            self.scan_options.detection_region.height = height;
        }

        if let Some(format) = output.format {
            self.output = format;
        }
        if let Some(image) = output.placeholder_image {
            self.placeholder_image = image;
        }
        if output.color.is_some() {
            self.color = output.color;
        }

        self.log_level = log.level.or(self.log_level.take());
        self.log_format = log.format.or(self.log_format.take());
        self.log_file = log.file.or(self.log_file.take());
    }

    /// Command line flags take precedence over everything else
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(backend) = args.backend {
            self.backend = backend;
        }
        if let Some(url) = &args.base_url {
            self.base_url = url.clone();
        }
        if let Some(format) = args.output {
            self.output = format;
        }
        if let Some(color) = args.color_override() {
            self.color = Some(color);
        }
        if args.log_level.is_some() {
            self.log_level = args.log_level.clone();
        }
        if args.log_format.is_some() {
            self.log_format = args.log_format.clone();
        }
        if args.log_file.is_some() {
            self.log_file = args.log_file.clone();
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |message: String| Err(ConfigError::Invalid { message });

        if self.timeout == Some(Duration::ZERO) {
            return invalid("timeout_secs must be greater than 0".to_string());
        }
        let DetectionRegion { width, height } = self.scan_options.detection_region;
        if width == 0 || height == 0 {
            return invalid(format!("Detection region {}x{} is empty", width, height));
        }
        if self.devices.is_empty() {
            return invalid("At least one scan device must be configured".to_string());
        }
        if let Some(level) = self.log_level.as_deref() {
            if !LOG_LEVELS.contains(&level) {
                return invalid(format!("Unknown log level '{}'", level));
            }
        }
        if let Some(format) = self.log_format.as_deref() {
            if !LOG_FORMATS.contains(&format) {
                return invalid(format!("Unknown log format '{}'", format));
            }
        }
        Ok(())
    }

    /// Colour for rendered output and logs: explicit setting, else stdout TTY detection
    pub fn use_color(&self) -> bool {
        self.color
            .unwrap_or_else(|| colored::control::SHOULD_COLORIZE.should_colorize())
    }
}
