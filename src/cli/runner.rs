use crate::config::Settings;
use crate::errors::AppError;
use crate::seed::{self, SeedReport};
use crate::server;
use crate::store::MongoStore;

use super::command::Command;

/// # Errors
/// Whatever the selected command fails with; `seed` never fails for a
/// missing connection string.
pub async fn run(cmd: Command, mut settings: Settings) -> Result<(), AppError> {
    match cmd {
        Command::Serve { host, port } => {
            if let Some(h) = host {
                settings.host = h;
            }
            if let Some(p) = port {
                settings.port = p;
            }
            server::run(&settings).await
        }
        Command::Seed => run_seed(&settings).await.map(|_| ()),
    }
}

/// Seed against the configured MongoDB. Without a connection string this
/// prints a diagnostic and returns `None` having written nothing.
///
/// # Errors
/// Store failures while connecting or writing.
pub async fn run_seed(settings: &Settings) -> Result<Option<SeedReport>, AppError> {
    let uri = match settings.connection_string() {
        Ok(uri) => uri,
        Err(e) => {
            log::warn!("seed skipped: {e}");
            eprintln!("{e}");
            return Ok(None);
        }
    };
    let store = MongoStore::connect(uri, &settings.db_name).await?;
    let report = seed::seed(&store).await;
    store.shutdown().await;
    report.map(Some)
}
