use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("File \"{}\" does not exist", path.display())]
    MissingFileError { path: PathBuf },

    #[error("Malformed transform descriptor \"{}\": {reason}", path.display())]
    MalformedDescriptorError { path: PathBuf, reason: String },

    #[error("{0}")]
    UsageError(#[from] clap::Error),

    #[error("Invalid subject \"{}\": {reason}", path.display())]
    InvalidSubjectError { path: PathBuf, reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    MissingFile,
    Descriptor,
    Subject,
    Io,
}

impl TransformError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransformError::UsageError(_) | TransformError::InvalidConfigValueError { .. } => {
                ErrorCategory::Usage
            }
            TransformError::MissingFileError { .. } => ErrorCategory::MissingFile,
            TransformError::MalformedDescriptorError { .. } => ErrorCategory::Descriptor,
            TransformError::InvalidSubjectError { .. }
            | TransformError::ImageError(_)
            | TransformError::XmlError(_)
            | TransformError::XmlAttributeError(_) => ErrorCategory::Subject,
            TransformError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// 所有錯誤都以 1 結束，只有 --help / --version 例外
    pub fn exit_code(&self) -> i32 {
        match self {
            TransformError::UsageError(e) => match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            },
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TransformError::MissingFileError { path } => {
                format!("Input file \"{}\" does not exist", path.display())
            }
            TransformError::MalformedDescriptorError { path, reason } => format!(
                "Transform descriptor \"{}\" is malformed: {}",
                path.display(),
                reason
            ),
            TransformError::ImageError(e) => format!("Could not process the image: {}", e),
            TransformError::XmlError(_) | TransformError::XmlAttributeError(_) => {
                format!("Could not process the SVG document: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Check the command line arguments (see --help)",
            ErrorCategory::MissingFile => "Check that the input path is correct and points to a regular file",
            ErrorCategory::Descriptor => {
                "The descriptor must be a JSON object with a 'transform' object holding numeric m11..m33"
            }
            ErrorCategory::Subject => "Make sure the input is a valid image or SVG document",
            ErrorCategory::Io => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
