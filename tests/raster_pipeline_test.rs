use anyhow::Result;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use sidecar_transform::config::RasterArgs;
use sidecar_transform::{LocalStorage, RasterPipeline, TransformEngine, TransformError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn descriptor_json(m11: f64, m12: f64, m21: f64, m22: f64, m31: f64, m32: f64) -> String {
    serde_json::json!({
        "transform": {
            "m11": m11, "m12": m12, "m13": 0,
            "m21": m21, "m22": m22, "m23": 0,
            "m31": m31, "m32": m32, "m33": 1
        }
    })
    .to_string()
}

fn checkerboard(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([10, 20, 30])
        } else {
            Rgb([200, 100, (x * 16 + y) as u8])
        }
    })
}

fn run(dir: &Path, image: &str, descriptor: &str, output: &str) -> sidecar_transform::Result<PathBuf> {
    let args = RasterArgs {
        image: dir.join(image),
        descriptor: dir.join(descriptor),
        output: dir.join(output),
        verbose: false,
    };
    let pipeline = RasterPipeline::new(LocalStorage::default(), args)?;
    TransformEngine::new(pipeline).run()
}

#[test]
fn test_identity_round_trip_is_pixel_exact() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = checkerboard(16, 9);
    source.save(temp_dir.path().join("in.png"))?;
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    )?;

    let output = run(temp_dir.path(), "in.png", "content.json", "out.png")?;

    let result = image::open(&output)?.to_rgb8();
    assert_eq!(result, source);
    Ok(())
}

#[test]
fn test_fractional_translation_uses_image_size() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = checkerboard(8, 4);
    source.save(temp_dir.path().join("in.png"))?;
    // 寬度的一半 = 4 像素，高度的四分之一 = 1 像素
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(1.0, 0.0, 0.0, 1.0, 0.5, 0.25),
    )?;

    let output = run(temp_dir.path(), "in.png", "content.json", "out.png")?;
    let result = image::open(&output)?.to_rgb8();

    assert_eq!(result.dimensions(), (8, 4));
    for y in 0..4 {
        for x in 0..8 {
            if x < 4 || y < 1 {
                assert_eq!(*result.get_pixel(x, y), WHITE, "({}, {})", x, y);
            } else {
                assert_eq!(result.get_pixel(x, y), source.get_pixel(x - 4, y - 1));
            }
        }
    }
    Ok(())
}

#[test]
fn test_translation_beyond_canvas_is_all_white() -> Result<()> {
    let temp_dir = TempDir::new()?;
    checkerboard(12, 12).save(temp_dir.path().join("in.png"))?;
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(1.0, 0.0, 0.0, 1.0, 1.5, -2.0),
    )?;

    let output = run(temp_dir.path(), "in.png", "content.json", "out.png")?;
    let result = image::open(&output)?.to_rgb8();

    assert!(result.pixels().all(|p| *p == WHITE));
    Ok(())
}

#[test]
fn test_rotation_keeps_canvas_size_and_alpha_is_dropped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = RgbaImage::from_pixel(10, 6, Rgba([0, 128, 0, 40]));
    source.save(temp_dir.path().join("in.png"))?;
    // 90 度旋轉
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(0.0, 1.0, -1.0, 0.0, 0.5, 0.0),
    )?;

    let output = run(temp_dir.path(), "in.png", "content.json", "out.png")?;
    let result = image::open(&output)?;

    assert_eq!(result.width(), 10);
    assert_eq!(result.height(), 6);
    assert_eq!(result.color(), image::ColorType::Rgb8);
    Ok(())
}

#[test]
fn test_output_format_follows_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    checkerboard(5, 5).save(temp_dir.path().join("in.png"))?;
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    )?;

    let output = run(temp_dir.path(), "in.png", "content.json", "out.bmp")?;

    let bytes = std::fs::read(&output)?;
    assert_eq!(image::guess_format(&bytes)?, image::ImageFormat::Bmp);
    Ok(())
}

#[test]
fn test_output_format_resolved_once_at_construction() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let jpeg = RasterArgs {
        image: temp_dir.path().join("in.png"),
        descriptor: temp_dir.path().join("content.json"),
        output: temp_dir.path().join("out.jpeg"),
        verbose: false,
    };
    let pipeline = RasterPipeline::new(LocalStorage::default(), jpeg)?;
    assert_eq!(pipeline.output_format(), image::ImageFormat::Jpeg);

    // 無法編碼的副檔名在讀取任何檔案之前就失敗
    let svg = RasterArgs {
        image: temp_dir.path().join("in.png"),
        descriptor: temp_dir.path().join("content.json"),
        output: temp_dir.path().join("out.svg"),
        verbose: false,
    };
    assert!(matches!(
        RasterPipeline::new(LocalStorage::default(), svg),
        Err(TransformError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_image_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    )?;

    let result = run(temp_dir.path(), "absent.png", "content.json", "out.png");

    assert!(matches!(result, Err(TransformError::MissingFileError { .. })));
    assert!(!temp_dir.path().join("out.png").exists());
    Ok(())
}

#[test]
fn test_malformed_descriptor_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    checkerboard(4, 4).save(temp_dir.path().join("in.png"))?;
    std::fs::write(
        temp_dir.path().join("content.json"),
        r#"{"transform": {"m11": 1, "m12": 0}}"#,
    )?;

    let result = run(temp_dir.path(), "in.png", "content.json", "out.png");

    assert!(matches!(
        result,
        Err(TransformError::MalformedDescriptorError { .. })
    ));
    assert!(!temp_dir.path().join("out.png").exists());
    Ok(())
}

#[test]
fn test_undecodable_image_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("in.png"), b"definitely not a png")?;
    std::fs::write(
        temp_dir.path().join("content.json"),
        descriptor_json(1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    )?;

    let result = run(temp_dir.path(), "in.png", "content.json", "out.png");

    assert!(matches!(result, Err(TransformError::ImageError(_))));
    assert!(!temp_dir.path().join("out.png").exists());
    Ok(())
}
