//! web2apk generates an Android WebView wrapper project from a template
//! tree: it copies the template, substitutes `{{TOKEN}}` placeholders,
//! renames the placeholder package path to the requested package identifier,
//! and optionally stamps resized launcher icons.

/// Command-line interface module for the web2apk application
pub mod cli;

/// Generation settings and YAML/JSON configuration file handling
pub mod config;

/// Common constants: text extensions, placeholder package path, defaults
pub mod constants;

/// Error types and handling for the web2apk application
pub mod error;

/// Launcher icon resizing into the five density buckets
pub mod icons;

/// File and directory exclusion patterns
/// Processes built-in patterns and .wrapignore files
pub mod ignore;

/// Core generation pipeline
/// Copy, substitute, rename and icon stages for one run
pub mod processor;

/// Placeholder token substitution engine
pub mod renderer;

/// Pre-mutation validation of package identifiers, URLs and icon paths
pub mod validation;
