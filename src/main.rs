//! multidomain CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use multidomain::cli::{Cli, CommandDispatcher};
use multidomain::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Variable set by web servers for CGI-style requests.
const GATEWAY_INTERFACE: &str = "GATEWAY_INTERFACE";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("multidomain=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multidomain=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Raw arguments are kept: `--domain` is read from them, not from clap.
    let argv: Vec<String> = std::env::args().collect();
    let cli = Cli::parse_from(argv.clone());
    init_tracing(cli.debug);

    tracing::debug!("multidomain starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode);

    let base = match cli.base.clone() {
        Some(base) => base,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                ui.error(&format!("Error: cannot read current directory: {}", e));
                return ExitCode::from(1);
            }
        },
    };

    let web_request = std::env::var_os(GATEWAY_INTERFACE).is_some();
    let dispatcher = CommandDispatcher::new(base)
        .with_args(argv)
        .with_web_request(web_request);

    ExitCode::from(dispatcher.run(&cli, &mut ui))
}
