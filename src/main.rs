//! llmcat - model catalog and code rendering CLI
//!
//! Thin binary entry point that delegates to the CLI handlers in the library.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use colorchoice::ColorChoice;
use llmcat::StartupContext;
use llmcat::cli::{self, Cli};
use llmcat_config::LlmCatConfig;

fn main() -> Result<()> {
    // Load .env (non-fatal if missing)
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let rust_log_tracing = initialize_tracing();

    if args.no_color || std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal() {
        ColorChoice::Never.write_global();
    }

    let startup = StartupContext::from_cli_args(&args)?;

    if !rust_log_tracing && startup.config.debug.enable_tracing {
        initialize_tracing_from_config(&startup.config);
    }

    cli::run(&startup, &args.command)
}

/// Honour `RUST_LOG` when set. Returns whether a subscriber was installed.
fn initialize_tracing() -> bool {
    use tracing_subscriber::fmt::format::FmtSpan;

    if std::env::var("RUST_LOG").is_err() {
        return false;
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_span_events(FmtSpan::FULL)
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

fn initialize_tracing_from_config(config: &LlmCatConfig) {
    use tracing_subscriber::fmt::format::FmtSpan;

    let debug_cfg = &config.debug;
    let filter_str = debug_cfg.filter_directive();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&filter_str))
        .with_span_events(FmtSpan::FULL)
        .with_writer(io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            "Debug tracing enabled: targets={}, level={}",
            filter_str,
            debug_cfg.trace_level
        );
    }
}
