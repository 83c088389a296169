//! Process lifecycle: connect once, serve until a signal, close the client.

use crate::config::Settings;
use crate::errors::AppError;
use crate::store::{MongoStore, RecordStore};
use crate::web::{AppContext, build_router};
use log::{error, info};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Serve `ctx` on an already bound listener until `shutdown` resolves.
///
/// # Errors
/// Returns `Io` if the accept loop fails.
pub async fn serve_on<S, F>(listener: TcpListener, ctx: Arc<AppContext<S>>, shutdown: F) -> Result<(), AppError>
where
    S: RecordStore,
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(ctx);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// # Errors
/// Returns `Io` if the address cannot be bound or serving fails.
pub async fn serve<S: RecordStore>(ctx: Arc<AppContext<S>>, addr: SocketAddr) -> Result<(), AppError> {
    info!("Binding to {addr}");
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {addr}");
    serve_on(listener, ctx, shutdown_signal()).await?;
    info!("Server shutting down...");
    Ok(())
}

/// Full `serve` command: refuses to start without a connection string.
///
/// # Errors
/// `MissingConnectionString` before anything is bound; otherwise store or I/O errors.
pub async fn run(settings: &Settings) -> Result<(), AppError> {
    let uri = settings.connection_string()?;
    let addr = settings.bind_addr()?;

    info!("Initializing store...");
    let store = MongoStore::connect(uri, &settings.db_name).await?;
    let ctx = Arc::new(AppContext::new(store.clone(), &settings.templates_dir, &settings.static_dir));

    let served = serve(ctx, addr).await;
    store.shutdown().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
