use std::net::SocketAddr;

use super::*;

#[derive(Parser)]
#[command(name = "resync-server")]
#[command(about = "Admin API for resync (development)", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// JSON file with `members` and `boards` to serve instead of the built-in data
    #[arg(long)]
    pub(super) seed: Option<PathBuf>,

    /// Require `Authorization: Bearer <token>` on /admin routes
    #[arg(long)]
    pub(super) token: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(super) verbose: u8,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    resync::telemetry::init_stderr(args.verbose);

    let seed = load_seed(args.seed.as_deref())?;
    let state = Arc::new(AppState {
        token: args.token.clone(),
        data: RwLock::new(seed),
    });

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("resync-server listening on {}", local_addr);
    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
