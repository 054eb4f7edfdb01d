use crate::domain::model::{AffineMatrix, Extent, TransformRecord};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn subject_path(&self) -> &Path;
    fn descriptor_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

/// One medium's load → apply → save stages.
pub trait Pipeline {
    type Subject;

    fn load_descriptor(&self) -> Result<TransformRecord>;
    fn load_subject(&self) -> Result<Self::Subject>;
    fn extent(&self, subject: &Self::Subject) -> Extent;
    fn apply(&self, subject: Self::Subject, matrix: &AffineMatrix) -> Result<Self::Subject>;
    fn save(&self, subject: Self::Subject) -> Result<PathBuf>;
}
