use crate::core::affine::build_affine;
use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct TransformEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TransformEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// load descriptor → load subject → apply → save，任一步失敗就中止，不寫出任何檔案
    pub fn run(&self) -> Result<PathBuf> {
        tracing::info!("Loading transform descriptor...");
        let record = self.pipeline.load_descriptor()?;

        tracing::info!("Loading subject...");
        let subject = self.pipeline.load_subject()?;
        let extent = self.pipeline.extent(&subject);
        tracing::info!("Subject size: {}x{}", extent.width, extent.height);

        let matrix = build_affine(&record, extent);
        tracing::debug!("Affine matrix: {:?}", matrix.components());

        tracing::info!("Applying transform...");
        let transformed = self.pipeline.apply(subject, &matrix)?;

        tracing::info!("Saving result...");
        let output_path = self.pipeline.save(transformed)?;
        tracing::info!("📁 Output saved to: {}", output_path.display());

        Ok(output_path)
    }
}
