//! HTTP surface.
//!
//! | Route          | Output                     |
//! |----------------|----------------------------|
//! | `/items`       | JSON array, up to 100      |
//! | `/export`      | HTML page, up to 100       |
//! | `/export.csv`  | CSV attachment, up to 1000 |
//! | `/static/*`    | files from the static dir  |

mod access;
mod handlers;
mod state;

pub use access::access_log;
pub use handlers::{export_csv, export_page, list_items};
pub use state::AppContext;

use crate::store::RecordStore;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;

pub fn build_router<S: RecordStore>(ctx: Arc<AppContext<S>>) -> Router {
    let assets = ServeDir::new(&ctx.static_dir);
    Router::new()
        .route("/items", get(list_items::<S>))
        .route("/export", get(export_page::<S>))
        .route("/export.csv", get(export_csv::<S>))
        .nest_service("/static", assets)
        .layer(middleware::from_fn(access_log))
        .with_state(ctx)
}
