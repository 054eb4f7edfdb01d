pub mod affine;
pub mod descriptor;
pub mod engine;
pub mod identity;
pub mod raster;
pub mod vector;

pub use crate::domain::model::{AffineMatrix, Classification, Extent, TransformRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
