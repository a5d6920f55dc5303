// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments and hand them to the dispatcher.
// - Returns `anyhow::Result` so any aborted action exits non-zero.

use clap::Parser;
use grafana_backup_cli::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
