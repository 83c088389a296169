use clap::{Parser, Subcommand};
use emogo::{cli as prog_cli, config::Settings, logger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emogo", version, about = "Geotagged record service", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). Falls back to EMOGO_CONFIG, then ./emogo.toml if present.")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Serve /items, /export, /export.csv and /static")]
    Serve {
        #[arg(long, help = "Listen host; overrides HOST")]
        host: Option<String>,
        #[arg(long, help = "Listen port; overrides PORT")]
        port: Option<u16>,
    },
    #[command(about = "Insert or replace the sample records, then print the collection count")]
    Seed,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::configure_from_env();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let cmd = match cli.command {
        Commands::Serve { host, port } => prog_cli::Command::Serve { host, port },
        Commands::Seed => prog_cli::Command::Seed,
    };

    if let Err(e) = prog_cli::run(cmd, settings).await {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
