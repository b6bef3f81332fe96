mod cli;
mod commands;
mod scene;
mod script;

use std::process::ExitCode;

use cli::Command;
use marble_config::MarbleConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    let parsed = directive
        .parse::<Directive>()
        .or_else(|_| "marble=info".parse::<Directive>());
    let filter = match parsed {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config picks the log level, so load it before logging is up and
    // report the outcome afterwards.
    let loaded = match &args.config {
        Some(path) => marble_config::load_config_from(path),
        None => marble_config::load_config(),
    };

    let level = match &loaded {
        Ok(config) => config.logging.level.as_directive(),
        Err(_) => MarbleConfig::default().logging.level.as_directive(),
    };
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("marble={level}"));
    init_logging(&directive);

    tracing::info!("Marble v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            MarbleConfig::default()
        }
    };

    let result = match args.command.unwrap_or_default() {
        Command::Run { frames, dt, script } => {
            commands::run(&config, frames, dt, script.as_deref())
        }
        Command::Mesh { resolution, output } => {
            commands::mesh(&config, resolution, output.as_deref())
        }
        Command::Transforms => {
            commands::transforms();
            Ok(())
        }
        Command::Config => {
            commands::print_config(&config);
            Ok(())
        }
    };

    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
