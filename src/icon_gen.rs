use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::ImageFormat;
use std::path::Path;

/// Master art every icon is derived from, looked up in the working directory.
pub const SOURCE_IMAGE: &str = "Icon-iOS-Marketing.png";

/// One required icon variant: a device/scale label and the square pixel size
/// of the output.
#[derive(Clone, Copy)]
pub struct SizeSpec {
    pub label: &'static str,
    pub pixels: u32,
}

/// Every icon resolution an iOS app bundle expects, in the order the files
/// are generated and reported.
pub const ICON_SIZES: [SizeSpec; 17] = [
    SizeSpec { label: "iPhone-20@2x", pixels: 40 },
    SizeSpec { label: "iPhone-20@3x", pixels: 60 },
    SizeSpec { label: "iPhone-29@2x", pixels: 58 },
    SizeSpec { label: "iPhone-29@3x", pixels: 87 },
    SizeSpec { label: "iPhone-40@2x", pixels: 80 },
    SizeSpec { label: "iPhone-40@3x", pixels: 120 },
    SizeSpec { label: "iPhone-60@2x", pixels: 120 },
    SizeSpec { label: "iPhone-60@3x", pixels: 180 },
    SizeSpec { label: "iPad-20@1x", pixels: 20 },
    SizeSpec { label: "iPad-20@2x", pixels: 40 },
    SizeSpec { label: "iPad-29@1x", pixels: 29 },
    SizeSpec { label: "iPad-29@2x", pixels: 58 },
    SizeSpec { label: "iPad-40@1x", pixels: 40 },
    SizeSpec { label: "iPad-40@2x", pixels: 80 },
    SizeSpec { label: "iPad-76@1x", pixels: 76 },
    SizeSpec { label: "iPad-76@2x", pixels: 152 },
    SizeSpec { label: "iPad-83.5@2x", pixels: 167 },
];

/// Generates every icon variant from `Icon-iOS-Marketing.png` in the working
/// directory, writing the outputs next to it.
pub fn generate() -> Result<()> {
    generate_into(Path::new(SOURCE_IMAGE), Path::new("."))
}

/// Resizes `source` to each entry of [`ICON_SIZES`] and writes the results
/// into `out_dir` as `Icon-<label>.png`.
///
/// The source is decoded once and never mutated, so every resize starts from
/// the same pixel data. Resizing is exact: a non-square source is stretched to
/// the square target. The first failure aborts the pass and leaves any files
/// already written in place; existing files with the same names are
/// overwritten.
pub fn generate_into(source: &Path, out_dir: &Path) -> Result<()> {
    let image = image::open(source)
        .with_context(|| format!("failed to open source image {}", source.display()))?;

    for size in ICON_SIZES.iter() {
        let resized = image.resize_exact(size.pixels, size.pixels, FilterType::Lanczos3);
        let file_name = format!("Icon-{}.png", size.label);
        resized
            .save_with_format(out_dir.join(&file_name), ImageFormat::Png)
            .with_context(|| format!("failed to save {}", file_name))?;
        println!("Generated: {}", file_name);
    }

    Ok(())
}
