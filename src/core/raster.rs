use crate::core::affine::invert;
use crate::core::descriptor::load_descriptor;
use crate::core::{AffineMatrix, ConfigProvider, Extent, Pipeline, Storage, TransformRecord};
use crate::utils::error::{Result, TransformError};
use crate::utils::validation::validate_image_output;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::PathBuf;

/// 超出來源範圍的像素一律填白
pub const BORDER_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Warps `src` into a canvas of the same size. `matrix` maps source
/// coordinates to output coordinates; every output pixel is sampled from
/// the nearest source pixel under the inverse mapping.
pub fn warp_affine(src: &RgbImage, matrix: &AffineMatrix) -> RgbImage {
    let (width, height) = src.dimensions();

    let Some(inverse) = invert(matrix) else {
        // 奇異矩陣把內容壓成零面積，畫布上只剩背景
        tracing::warn!("Transform matrix is singular, output is border fill only");
        return RgbImage::from_pixel(width, height, BORDER_FILL);
    };

    let (w, h) = (f64::from(width), f64::from(height));

    RgbImage::from_fn(width, height, |x, y| {
        let (sx, sy) = inverse.apply(f64::from(x), f64::from(y));
        let (sx, sy) = (sx.round(), sy.round());

        if sx >= 0.0 && sx < w && sy >= 0.0 && sy < h {
            *src.get_pixel(sx as u32, sy as u32)
        } else {
            BORDER_FILL
        }
    })
}

pub struct RasterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    format: ImageFormat,
}

impl<S: Storage, C: ConfigProvider> RasterPipeline<S, C> {
    /// 輸出格式在建立時由副檔名決定一次
    pub fn new(storage: S, config: C) -> Result<Self> {
        let format = validate_image_output("output", config.output_path())?;
        Ok(Self {
            storage,
            config,
            format,
        })
    }

    pub fn output_format(&self) -> ImageFormat {
        self.format
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RasterPipeline<S, C> {
    type Subject = RgbImage;

    fn load_descriptor(&self) -> Result<TransformRecord> {
        load_descriptor(&self.storage, self.config.descriptor_path())
    }

    fn load_subject(&self) -> Result<RgbImage> {
        let path = self.config.subject_path();
        let data = self.storage.read_file(path)?;

        let image = image::load_from_memory(&data)?;
        let (width, height) = image.dimensions();
        tracing::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            width,
            height,
            image.color()
        );

        if width == 0 || height == 0 {
            return Err(TransformError::InvalidSubjectError {
                path: path.to_path_buf(),
                reason: "image has no pixels".to_string(),
            });
        }

        // 只保留三個色彩通道，alpha 捨棄
        Ok(image.to_rgb8())
    }

    fn extent(&self, subject: &RgbImage) -> Extent {
        let (width, height) = subject.dimensions();
        Extent::new(width, height)
    }

    fn apply(&self, subject: RgbImage, matrix: &AffineMatrix) -> Result<RgbImage> {
        Ok(warp_affine(&subject, matrix))
    }

    fn save(&self, subject: RgbImage) -> Result<PathBuf> {
        let path = self.config.output_path();

        let mut encoded = Vec::new();
        DynamicImage::ImageRgb8(subject).write_to(&mut Cursor::new(&mut encoded), self.format)?;

        tracing::debug!("Encoded {:?} image ({} bytes)", self.format, encoded.len());
        self.storage.write_file(path, &encoded)
    }
}
