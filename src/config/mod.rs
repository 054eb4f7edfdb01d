pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, TransformError};
use crate::utils::validation::{validate_image_output, validate_path, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "apply-raster", version)]
#[command(about = "Apply the affine transform from a descriptor file to a raster image")]
pub struct RasterArgs {
    /// Input image
    pub image: PathBuf,

    /// Transform descriptor (JSON)
    pub descriptor: PathBuf,

    /// Output image; the format follows the file extension
    pub output: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "apply-vector", version)]
#[command(about = "Wrap the content of an SVG document in a transform group from a descriptor file")]
pub struct VectorArgs {
    /// Input SVG document
    pub svg: PathBuf,

    /// Transform descriptor (JSON)
    pub descriptor: PathBuf,

    /// Output SVG document
    pub output: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "check-identity", version)]
#[command(about = "Print Yes if the descriptor holds a non-identity transform, No otherwise")]
pub struct IdentityArgs {
    /// Transform descriptor (JSON)
    pub descriptor: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for RasterArgs {
    fn subject_path(&self) -> &Path {
        &self.image
    }

    fn descriptor_path(&self) -> &Path {
        &self.descriptor
    }

    fn output_path(&self) -> &Path {
        &self.output
    }
}

impl ConfigProvider for VectorArgs {
    fn subject_path(&self) -> &Path {
        &self.svg
    }

    fn descriptor_path(&self) -> &Path {
        &self.descriptor
    }

    fn output_path(&self) -> &Path {
        &self.output
    }
}

impl Validate for RasterArgs {
    fn validate(&self) -> Result<()> {
        validate_path("image", &self.image)?;
        validate_path("descriptor", &self.descriptor)?;
        validate_path("output", &self.output)?;
        validate_image_output("output", &self.output)?;
        Ok(())
    }
}

impl Validate for VectorArgs {
    fn validate(&self) -> Result<()> {
        validate_path("svg", &self.svg)?;
        validate_path("descriptor", &self.descriptor)?;
        validate_path("output", &self.output)
    }
}

impl Validate for IdentityArgs {
    fn validate(&self) -> Result<()> {
        validate_path("descriptor", &self.descriptor)
    }
}

/// 解析命令列；參數錯誤時印出用法並以 1 結束 (不是 clap 預設的 2)
pub fn parse_args<T: Parser>() -> T {
    match parse_args_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => exit_with(&e),
    }
}

pub fn parse_args_from<T, I, S>(args: I) -> Result<T>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    T::try_parse_from(args).map_err(TransformError::from)
}

/// 記錄錯誤、印出使用者訊息，然後結束程序
pub fn exit_with(err: &TransformError) -> ! {
    match err {
        TransformError::UsageError(e) => {
            // clap 自己決定 help 走 stdout、錯誤走 stderr
            let _ = e.print();
        }
        _ => {
            tracing::error!("❌ {} (Category: {:?})", err, err.category());
            eprintln!("❌ {}", err.user_friendly_message());
            eprintln!("💡 {}", err.recovery_suggestion());
        }
    }
    std::process::exit(err.exit_code())
}
