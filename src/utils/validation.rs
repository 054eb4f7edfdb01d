use crate::utils::error::{Result, TransformError};
use image::ImageFormat;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();

    if raw.is_empty() {
        return Err(TransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.to_string_lossy().contains('\0') {
        return Err(TransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出副檔名必須對應到一個可以編碼的影像格式
pub fn validate_image_output(field_name: &str, path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|_| TransformError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.display().to_string(),
        reason: "Cannot infer an image format from the file extension".to_string(),
    })?;

    if !format.writing_enabled() {
        return Err(TransformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!("Writing {:?} images is not supported", format),
        });
    }

    Ok(format)
}

/// 輸入必須是既存的一般檔案
pub fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(TransformError::MissingFileError {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
