use std::fs;
use std::path::PathBuf;

use image::{GenericImageView, Rgba, RgbaImage};
use tempfile::TempDir;
use web2apk::config::Settings;
use web2apk::error::Error;
use web2apk::icons::MIPMAP_SIZES;
use web2apk::processor::generate;
use web2apk::renderer::TokenRenderer;

fn settings(icon: Option<PathBuf>) -> Settings {
    Settings {
        url: "https://example.com".to_string(),
        app_name: "Demo".to_string(),
        package_id: "com.acme.demo".to_string(),
        version_name: "1.0.0".to_string(),
        version_code: 1,
        permissions: vec![],
        user_agent: "test-agent".to_string(),
        icon,
        offline: true,
        file_access: false,
    }
}

fn make_template(root: &std::path::Path) {
    fs::create_dir_all(root.join("app")).unwrap();
    fs::write(root.join("app/build.gradle"), "applicationId \"{{PACKAGE_NAME}}\"\n").unwrap();
}

#[test]
fn generates_all_density_buckets() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let output = temp_dir.path().join("output");
    fs::create_dir(&template).unwrap();
    make_template(&template);

    let icon_path = temp_dir.path().join("icon.png");
    RgbaImage::from_pixel(256, 256, Rgba([200, 30, 30, 255])).save(&icon_path).unwrap();

    let engine = TokenRenderer::new();
    generate(&engine, &settings(Some(icon_path)), &template, &output, false).unwrap();

    for (density, size) in MIPMAP_SIZES {
        let dir = output.join(format!("app/src/main/res/mipmap-{}", density));

        let launcher = image::open(dir.join("ic_launcher.png")).unwrap();
        assert_eq!(launcher.width(), size);
        assert_eq!(launcher.height(), size);

        let round = image::open(dir.join("ic_launcher_round.png")).unwrap().to_rgba8();
        assert_eq!(round.width(), size);
        // The corner falls outside the circular mask.
        assert_eq!(round.get_pixel(0, 0)[3], 0);
    }
}

#[test]
fn undecodable_icon_fails_before_any_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let output = temp_dir.path().join("output");
    fs::create_dir(&template).unwrap();
    make_template(&template);

    let icon_path = temp_dir.path().join("broken.png");
    fs::write(&icon_path, b"this is not a png").unwrap();

    let engine = TokenRenderer::new();
    let err =
        generate(&engine, &settings(Some(icon_path)), &template, &output, false).unwrap_err();
    assert!(matches!(err, Error::IconError(_)));
    assert!(!output.exists());
}

#[test]
fn unsupported_icon_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let output = temp_dir.path().join("output");
    fs::create_dir(&template).unwrap();
    make_template(&template);

    let icon_path = temp_dir.path().join("icon.svg");
    fs::write(&icon_path, "<svg/>").unwrap();

    let engine = TokenRenderer::new();
    let err =
        generate(&engine, &settings(Some(icon_path)), &template, &output, false).unwrap_err();
    assert!(matches!(err, Error::ValidationError(_)));
    assert!(!output.exists());
}
