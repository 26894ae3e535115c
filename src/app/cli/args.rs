//! Command line arguments
//!
//! Global flags override the configuration file; the subcommand selects
//! what the run does.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "nutriscan")]
#[command(about = "Scan or type a product barcode and show its nutritional summary")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// Force coloured output
    #[arg(long = "color", overrides_with = "no_color")]
    pub color: bool,

    /// Disable coloured output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// How products are rendered
    #[arg(short = 'o', long = "output", value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Where products are looked up
    #[arg(short = 'b', long = "backend", value_enum, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Base URL of the product service
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a single code and exit
    Lookup {
        /// Barcode to look up
        code: String,
    },
    /// Scan codes from a device and accept typed codes on stdin
    Scan {
        /// Scan from this device instead of the configured ones ('-' for stdin)
        #[arg(short = 'd', long = "device", value_name = "PATH")]
        device: Option<PathBuf>,
    },
    /// List the scan devices that can be opened
    Devices,
}

impl Args {
    /// Colour override from the flags; `None` leaves the decision to config or TTY
    pub fn color_override(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Rendering of lookup results
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable card
    #[default]
    Text,
    /// One JSON event per line
    Json,
}

/// Product lookup backend
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The product service (`/api/scan/{code}`)
    #[default]
    Service,
    /// The public Open Food Facts API
    #[value(name = "openfoodfacts", alias = "off")]
    #[serde(alias = "off")]
    OpenFoodFacts,
}
