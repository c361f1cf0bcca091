use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use web2apk::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("web2apk")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&[
        "--url",
        "https://example.com",
        "--package",
        "com.example.app",
        "--name",
        "My App",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.url.as_deref(), Some("https://example.com"));
    assert_eq!(parsed.package.as_deref(), Some("com.example.app"));
    assert_eq!(parsed.name.as_deref(), Some("My App"));
    assert_eq!(parsed.output_dir, PathBuf::from("android_wrapper"));
    assert_eq!(parsed.template_dir, PathBuf::from("templates/android_wrapper"));
    assert!(!parsed.force);
    assert!(!parsed.verbose);
    assert!(!parsed.no_offline);
    assert!(!parsed.file_access);
    assert!(parsed.permission.is_empty());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--url",
        "https://example.com",
        "--package",
        "com.example.app",
        "--name",
        "My App",
        "--output-dir",
        "./out",
        "--icon",
        "./icon.png",
        "--user-agent",
        "custom-agent",
        "--no-offline",
        "--file-access",
        "--force",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert_eq!(parsed.icon, Some(PathBuf::from("./icon.png")));
    assert_eq!(parsed.user_agent.as_deref(), Some("custom-agent"));
    assert!(parsed.no_offline);
    assert!(parsed.file_access);
    assert!(parsed.force);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&[
        "-u",
        "https://example.com",
        "-p",
        "com.example.app",
        "-n",
        "My App",
        "-o",
        "./out",
        "-f",
        "-v",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
}

#[test]
fn test_repeated_permissions() {
    let args = make_args(&[
        "--url",
        "https://example.com",
        "--package",
        "com.example.app",
        "--name",
        "My App",
        "--permission",
        "android.permission.CAMERA",
        "--permission",
        "android.permission.RECORD_AUDIO",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(
        parsed.permission,
        vec!["android.permission.CAMERA", "android.permission.RECORD_AUDIO"]
    );
}

#[test]
fn test_config_only_invocation() {
    // url/package/name may come from the config file instead of flags.
    let args = make_args(&["--config", "app.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config, Some(PathBuf::from("app.yaml")));
    assert!(parsed.url.is_none());
}

#[test]
fn test_unknown_flag_is_rejected() {
    let args = make_args(&["--does-not-exist"]);
    assert!(Args::try_parse_from(args).is_err());
}
