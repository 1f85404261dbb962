use clap::{error::ErrorKind, CommandFactory, Parser};
use mulsave::utils::logger;
use mulsave::{CliConfig, Engine, LocalStorage, MulError, MultiplyPipeline};

fn main() {
    let config = CliConfig::parse();

    let file_config = match config.load_config_file() {
        Ok(file_config) => file_config,
        Err(e) => fail(e),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose(file_config.as_ref()));
    tracing::debug!("CLI config: {:?}", config);

    let params = match config.resolve(file_config.as_ref()) {
        Ok(params) => params,
        Err(MulError::MissingConfigError { field }) => CliConfig::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!(
                    "the following required arguments were not provided:\n  --{} <{}>",
                    field,
                    field.to_uppercase()
                ),
            )
            .exit(),
        Err(e) => fail(e),
    };
    tracing::debug!("Resolved parameters: {:?}", params);

    let storage = LocalStorage::new(".");
    let pipeline = MultiplyPipeline::new(storage, params);
    let engine = Engine::new(pipeline);

    let stdout = std::io::stdout();
    if let Err(e) = engine.run(&mut stdout.lock()) {
        fail(e);
    }
}

fn fail(e: MulError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
