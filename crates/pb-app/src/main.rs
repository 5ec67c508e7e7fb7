// ABOUTME: Main application entry point.
// ABOUTME: Balances the tmux panes joined with the active pane, then exits.

mod plan;

use std::process::ExitCode;

use anyhow::Result;
use pb_tmux::{MuxError, Tmux};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // RUST_LOG is only read here; quiet by default since key-binding output lands on screen
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn balance() -> Result<()> {
    plan::run(&Tmux::default())
}

/// Exit status of the tmux call that failed, or 1
fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MuxError>())
        .and_then(MuxError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

fn main() -> ExitCode {
    init_logging();

    match balance() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
