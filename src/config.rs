//! Generation settings and configuration file handling.
//! Settings can come from command-line flags, from a YAML/JSON configuration
//! file, or both; flags take precedence over file values.

use crate::cli::Args;
use crate::constants::CONFIG_EXTENSIONS;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User agent sent by the generated WebView when none is supplied.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36";

/// Optional configuration file contents.
///
/// Every field the CLI accepts can also be given here; command-line flags
/// override file values.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub app_name: Option<String>,
    pub package_id: Option<String>,
    pub version_name: Option<String>,
    pub version_code: Option<u32>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub user_agent: Option<String>,
    pub icon: Option<PathBuf>,
    pub offline: Option<bool>,
    pub file_access: Option<bool>,
}

/// Loads a configuration file, accepting JSON or YAML content.
///
/// # Arguments
/// * `config_path` - Path to a .json, .yml or .yaml file
///
/// # Errors
/// * `Error::ConfigError` if the file is missing, has an unsupported
///   extension, or fails to parse in both formats
pub fn load_config_file<P: AsRef<Path>>(config_path: P) -> Result<FileConfig> {
    let config_path = config_path.as_ref();

    let extension = config_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !CONFIG_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::ConfigError(format!(
            "configuration file '{}' must be one of: {}",
            config_path.display(),
            CONFIG_EXTENSIONS.join(", ")
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| Error::PathIoError {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    // Try parsing as JSON first, fall back to YAML.
    match serde_json::from_str(&content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("invalid configuration format: {}", e))),
    }
}

/// Fully resolved generation settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub app_name: String,
    pub package_id: String,
    pub version_name: String,
    pub version_code: u32,
    pub permissions: Vec<String>,
    pub user_agent: String,
    pub icon: Option<PathBuf>,
    pub offline: bool,
    pub file_access: bool,
}

impl Settings {
    /// Merges command-line arguments with an optional configuration file.
    ///
    /// # Errors
    /// * `Error::ConfigError` if url, package identifier or application name
    ///   is missing from both sources
    pub fn resolve(args: &Args, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let url = args
            .url
            .clone()
            .or(file.url)
            .ok_or_else(|| Error::ConfigError("no target URL given (use --url or a config file)".to_string()))?;
        let app_name = args
            .name
            .clone()
            .or(file.app_name)
            .ok_or_else(|| Error::ConfigError("no application name given (use --name or a config file)".to_string()))?;
        let package_id = args
            .package
            .clone()
            .or(file.package_id)
            .ok_or_else(|| Error::ConfigError("no package identifier given (use --package or a config file)".to_string()))?;

        let mut permissions = file.permissions;
        permissions.extend(args.permission.iter().cloned());

        Ok(Settings {
            url,
            app_name,
            package_id,
            version_name: file.version_name.unwrap_or_else(|| "1.0.0".to_string()),
            version_code: file.version_code.unwrap_or(1),
            permissions,
            user_agent: args
                .user_agent
                .clone()
                .or(file.user_agent)
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            icon: args.icon.clone().or(file.icon),
            offline: if args.no_offline { false } else { file.offline.unwrap_or(true) },
            file_access: args.file_access || file.file_access.unwrap_or(false),
        })
    }

    /// Builds the placeholder token mapping for template substitution.
    ///
    /// Boolean settings are serialized as `"true"`/`"false"`; extra
    /// permissions become `<uses-permission/>` manifest lines.
    pub fn context(&self) -> IndexMap<String, String> {
        let permissions_xml = self
            .permissions
            .iter()
            .map(|perm| format!("<uses-permission android:name=\"{}\" />", perm))
            .collect::<Vec<_>>()
            .join("\n    ");

        let mut context = IndexMap::new();
        context.insert("PACKAGE_NAME".to_string(), self.package_id.clone());
        context.insert("APP_NAME".to_string(), self.app_name.clone());
        context.insert("TARGET_URL".to_string(), self.url.clone());
        context.insert("USER_AGENT".to_string(), self.user_agent.clone());
        context.insert("VERSION_NAME".to_string(), self.version_name.clone());
        context.insert("VERSION_CODE".to_string(), self.version_code.to_string());
        context.insert("ENABLE_OFFLINE_MODE".to_string(), self.offline.to_string());
        context.insert("ENABLE_FILE_ACCESS".to_string(), self.file_access.to_string());
        context.insert("EXTRA_PERMISSIONS".to_string(), permissions_xml);
        context
    }
}
