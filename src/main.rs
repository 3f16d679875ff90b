use clap::Parser;
use csv_profile::adapters::report::{render_failure, render_report};
use csv_profile::utils::{logger, validation::Validate};
use csv_profile::{CliConfig, ConfigProvider, ProfileEngine, ProfileError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-profile");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let pretty = config.pretty_output();
    let engine = ProfileEngine::new(config);

    match engine.run().and_then(|details| render_report(&details, pretty)) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!(
                "❌ Profiling failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(e: &ProfileError) -> ! {
    eprintln!("{}", render_failure(e));
    std::process::exit(e.severity().exit_code());
}
