pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
pub use crate::core::affine::build_affine;
pub use crate::core::descriptor::{load_descriptor, parse_descriptor};
pub use crate::core::engine::TransformEngine;
pub use crate::core::identity::classify;
pub use crate::core::raster::{warp_affine, RasterPipeline};
pub use crate::core::vector::{wrap_in_transform_group, SvgDocument, VectorPipeline};
pub use crate::domain::model::{
    AffineMatrix, Classification, Extent, TransformRecord, IDENTITY_TRANSFORM,
};
pub use crate::utils::error::{Result, TransformError};
