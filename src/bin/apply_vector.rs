use sidecar_transform::config::{self, VectorArgs};
use sidecar_transform::utils::{logger, validation::Validate};
use sidecar_transform::{LocalStorage, TransformEngine, VectorPipeline};

fn main() {
    let args: VectorArgs = config::parse_args();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting apply-vector");
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = args.validate() {
        config::exit_with(&e);
    }

    let pipeline = VectorPipeline::new(LocalStorage::default(), args);
    let engine = TransformEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Transformed SVG written to {}", output_path.display());
        }
        Err(e) => config::exit_with(&e),
    }
}
