use std::path::PathBuf;

use anyhow::Result;

use crate::config::ClientConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: ClientConfig,
    /// Where to write logs while the console owns the terminal.
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

/// Runs the interactive console. Network work is spawned onto `runtime`; the caller
/// must keep it alive until this returns.
pub fn run_with_options(runtime: tokio::runtime::Handle, opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(runtime, opts)
}
