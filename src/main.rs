use clap::Parser;
use prefix_overlap::config::Config;
use prefix_overlap::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();

    // Bad arguments exit with status 2 from clap
    let config = Config::parse();
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }
    log::info!("#Start main() input={} format={}", config.input.display(), config.format);

    match prefix_overlap::run(&config) {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(2)
        }
    }
}
