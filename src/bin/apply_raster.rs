use sidecar_transform::config::{self, RasterArgs};
use sidecar_transform::utils::{logger, validation::Validate};
use sidecar_transform::{LocalStorage, RasterPipeline, TransformEngine};

fn main() {
    let args: RasterArgs = config::parse_args();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting apply-raster");
    tracing::debug!("CLI args: {:?}", args);

    // 驗證參數，在讀取任何檔案之前
    if let Err(e) = args.validate() {
        config::exit_with(&e);
    }

    let pipeline = match RasterPipeline::new(LocalStorage::default(), args) {
        Ok(pipeline) => pipeline,
        Err(e) => config::exit_with(&e),
    };
    let engine = TransformEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Transformed image written to {}", output_path.display());
        }
        Err(e) => config::exit_with(&e),
    }
}
