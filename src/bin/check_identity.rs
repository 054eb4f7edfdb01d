use sidecar_transform::config::{self, IdentityArgs};
use sidecar_transform::utils::{logger, validation::Validate};
use sidecar_transform::{classify, load_descriptor, LocalStorage};

fn main() {
    let args: IdentityArgs = config::parse_args();

    logger::init_cli_logger(args.verbose);

    if let Err(e) = args.validate() {
        config::exit_with(&e);
    }

    let record = match load_descriptor(&LocalStorage::default(), &args.descriptor) {
        Ok(record) => record,
        Err(e) => config::exit_with(&e),
    };

    let classification = classify(&record);
    tracing::debug!("{} is {:?}", args.descriptor.display(), classification);

    // stdout 只輸出 Yes / No
    println!("{}", classification.answer());
}
