//! Launcher icon generation.
//! Resizes a single source image into the five Android density buckets and
//! writes square and circular-masked variants into the mipmap resource
//! directories of the generated project.

use crate::constants::RES_ROOT;
use crate::error::{Error, Result};
use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use log::debug;
use std::fs;
use std::path::Path;

/// Launcher icon pixel sizes per density bucket, smallest first.
pub const MIPMAP_SIZES: [(&str, u32); 5] =
    [("mdpi", 48), ("hdpi", 72), ("xhdpi", 96), ("xxhdpi", 144), ("xxxhdpi", 192)];

/// Decodes the source icon image.
///
/// # Errors
/// * `Error::IconError` if the file cannot be decoded as a supported raster
pub fn load_icon(path: &Path) -> Result<DynamicImage> {
    image::open(path)
        .map_err(|e| Error::IconError(format!("cannot decode '{}': {}", path.display(), e)))
}

/// Applies a hard circular alpha mask to a square image.
fn round_variant(square: &RgbaImage) -> RgbaImage {
    let size = square.width();
    let center = size as f32 / 2.0;
    let radius_sq = center * center;

    let mut round = square.clone();
    for (x, y, pixel) in round.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy > radius_sq {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
    round
}

/// Writes `ic_launcher.png` and `ic_launcher_round.png` for every density
/// bucket under the project's resource root, overwriting any placeholder
/// icons the template shipped with.
///
/// # Arguments
/// * `image` - Decoded source icon
/// * `output_root` - Root of the generated project
pub fn write_launcher_icons(image: &DynamicImage, output_root: &Path) -> Result<()> {
    for (density, size) in MIPMAP_SIZES {
        let mipmap_dir = output_root.join(RES_ROOT).join(format!("mipmap-{}", density));
        fs::create_dir_all(&mipmap_dir).map_err(|e| Error::PathIoError {
            path: mipmap_dir.clone(),
            source: e,
        })?;

        let resized = image.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();

        let launcher = mipmap_dir.join("ic_launcher.png");
        resized
            .save(&launcher)
            .map_err(|e| Error::IconError(format!("cannot write '{}': {}", launcher.display(), e)))?;

        let round = mipmap_dir.join("ic_launcher_round.png");
        round_variant(&resized)
            .save(&round)
            .map_err(|e| Error::IconError(format!("cannot write '{}': {}", round.display(), e)))?;

        debug!("Created icons for {}", density);
    }

    Ok(())
}
