//! WQC CLI - Command line tool for water quality cluster data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wqc-cli",
    version,
    about = "Water quality clusters map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wqc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("wqc-cli {}", env!("CARGO_PKG_VERSION"));
    wqc_cmd::run(cli.command)
}
