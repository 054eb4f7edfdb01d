// Domain layer: models and ports. No knowledge of codecs or the filesystem.

pub mod model;
pub mod ports;
