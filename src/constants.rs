//! Common constants used throughout the web2apk application.

/// Supported configuration file extensions
pub const CONFIG_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// web2apk's per-template ignore file name
pub const IGNORE_FILE: &str = ".wrapignore";

/// Template paths that are never copied into the output. Directory names
/// and their contents are listed separately because a `dir/**` glob does
/// not match the directory entry itself.
pub const BUILTIN_IGNORES: [&str; 11] = [
    ".wrapignore",
    ".git",
    ".git/**",
    "build",
    "build/**",
    ".gradle",
    ".gradle/**",
    ".idea",
    ".idea/**",
    "*.iml",
    "local.properties",
];

/// Default template location relative to the working directory
pub const DEFAULT_TEMPLATE_DIR: &str = "templates/android_wrapper";

/// Default output location relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "android_wrapper";

/// Java source root inside the generated project, relative to the output root
pub const JAVA_SRC_ROOT: &str = "app/src/main/java";

/// Placeholder package namespace the template ships with, relative to
/// [`JAVA_SRC_ROOT`]. The rename step moves this to the requested package
/// path instead of discovering it by scanning.
pub const PLACEHOLDER_PACKAGE: &str = "com.template.webview";

/// Resource root for generated launcher icons, relative to the output root
pub const RES_ROOT: &str = "app/src/main/res";

/// File extensions treated as text-bearing and scanned for tokens.
/// Everything else is copied verbatim.
pub const TEXT_EXTENSIONS: [&str; 10] =
    ["kt", "java", "xml", "gradle", "kts", "pro", "properties", "md", "txt", "json"];
