use anyhow::Context;
use clap::Parser;
use csv_profile::adapters::report::{render_failure, render_report};
use csv_profile::config::toml_config::OutputConfig;
use csv_profile::utils::{logger, validation::Validate};
use csv_profile::{ConfigProvider, ProfileEngine, ProfileError, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-profile")]
#[command(about = "Profile a delimited text file described by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "profile.toml")]
    config: String,

    /// Override the input path from config
    #[arg(long)]
    path: Option<String>,

    /// Print the report as single-line JSON
    #[arg(long)]
    compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the resolved configuration without reading the file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.severity().exit_code());
        }
    };

    let verbose = args.verbose || config.verbose_logging();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting toml-profile");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(path) = &args.path {
        config.input.path = path.clone();
        tracing::info!("🔧 Input path overridden to: {}", path);
    }
    if args.compact {
        config
            .output
            .get_or_insert(OutputConfig { pretty: None })
            .pretty = Some(false);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the input will not be read");
        return perform_dry_run(&config);
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

    Ok(())
}

fn exit_with(e: &ProfileError) -> ! {
    eprintln!("{}", render_failure(e));
    std::process::exit(e.severity().exit_code());
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("📋 Configuration Summary:");
    println!("  Input: {}", config.input_path());
    println!("  Delimiter: {:?}", config.delimiter()? as char);
    println!("  Header Window: {}", config.header_window());
    println!("  Sample Row: {}", config.sample_row_index());
    println!("  Pretty Output: {}", config.pretty_output());
    println!("  JSON Logging: {}", config.json_logging());

    let metadata = std::fs::metadata(config.input_path())
        .with_context(|| format!("Input file '{}' is not accessible", config.input_path()))?;
    println!("  Input Size: {} bytes", metadata.len());

    println!();
    println!("✅ Dry run complete. Run without --dry-run to profile the file.");

    Ok(())
}
