use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hangar", about = "hangar — terminal starship roster browser")]
struct Cli {
    /// Write debug logs to /tmp/hangar-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Override the roster storage directory.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/hangar-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("hangar debug log started — tail -f /tmp/hangar-debug.log");
    }

    hangar_tui::run(cli.data_dir)
}
