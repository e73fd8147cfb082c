//! RSM CLI - Command line tool for the monitoring station map.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rsm-cli",
    version,
    about = "Monitoring station map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rsm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("rsm-cli starting");
    rsm_cmd::run(cli.command).await
}
