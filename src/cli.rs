//! Command-line interface implementation for web2apk.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for web2apk.
#[derive(Parser, Debug)]
#[command(author, version, about = "web2apk: Android WebView wrapper project generator", long_about = None)]
pub struct Args {
    /// Target URL to load in the WebView
    #[arg(short, long)]
    pub url: Option<String>,

    /// Android package identifier (e.g. com.example.myapp)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Application name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory where the generated project will be created
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Template directory to generate from
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_DIR)]
    pub template_dir: PathBuf,

    /// Path to an app icon (PNG/JPEG/WebP, resized for all densities)
    #[arg(short, long)]
    pub icon: Option<PathBuf>,

    /// Custom user agent string
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Disable offline caching support in the generated app
    #[arg(long)]
    pub no_offline: bool,

    /// Enable file access in the generated WebView
    #[arg(long)]
    pub file_access: bool,

    /// Additional Android permission (can be given multiple times)
    #[arg(long = "permission", value_name = "PERMISSION")]
    pub permission: Vec<String>,

    /// YAML/JSON configuration file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing output directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// Every flag is optional at parse time because url, package and name may
/// come from a configuration file instead; settings resolution reports what
/// is still missing.
///
/// # Exits
/// * With clap's default error handling on malformed arguments
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
