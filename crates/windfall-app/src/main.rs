mod cli;
mod reconcile;
mod runtime;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "windfall=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(directive: &str) -> EnvFilter {
    match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("windfall: ignoring log level {directive:?}: {e}");
            EnvFilter::from_default_env()
        }
    }
}

/// Stderr logging at the command line level, or the default until the
/// config file has been read.
fn subscriber(
    cli_directive: Option<&str>,
) -> (impl tracing::Subscriber + Send + Sync + 'static, FilterHandle) {
    let (filter, handle) =
        reload::Layer::new(env_filter(cli_directive.unwrap_or(DEFAULT_DIRECTIVE)));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    (subscriber, handle)
}

/// Switch to the config file's level unless the command line set one.
fn apply_config_level(handle: &FilterHandle, cli_directive: Option<&str>, directive: &str) {
    if cli_directive.is_some() {
        return;
    }
    if let Err(e) = handle.reload(env_filter(directive)) {
        tracing::warn!("failed to apply log level {directive:?}: {e}");
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let cli_directive = args.log_level.as_deref().map(cli::log_directive);
    let (logger, filter_handle) = subscriber(cli_directive.as_deref());
    logger.init();

    let config = match windfall_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.print_config {
        println!("{}", windfall_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    apply_config_level(
        &filter_handle,
        cli_directive.as_deref(),
        config.logging.level.directive(),
    );

    tracing::info!("windfall v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("using config {}", path.display());
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let audio = config.audio.enabled && !args.no_audio;
    match runtime.block_on(runtime::run(config, args.seed, audio)) {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("windfall stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
