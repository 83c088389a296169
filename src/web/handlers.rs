use super::state::AppContext;
use crate::errors::AppError;
use crate::export::{CSV_FILENAME, records_to_json, render_csv};
use crate::query;
use crate::store::RecordStore;
use axum::{
    Json,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use serde_json::Value;
use std::sync::Arc;

pub async fn list_items<S: RecordStore>(State(ctx): State<Arc<AppContext<S>>>) -> Result<Json<Value>, AppError> {
    let records = query::fetch_listing(&ctx.store).await?;
    Ok(Json(records_to_json(&records)))
}

pub async fn export_page<S: RecordStore>(State(ctx): State<Arc<AppContext<S>>>) -> Result<Html<String>, AppError> {
    let records = query::fetch_listing(&ctx.store).await?;
    Ok(Html(ctx.templates.render_export(&records)?))
}

pub async fn export_csv<S: RecordStore>(State(ctx): State<Arc<AppContext<S>>>) -> Result<impl IntoResponse, AppError> {
    let records = query::fetch_for_csv(&ctx.store).await?;
    let body = render_csv(&records)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename={CSV_FILENAME}")),
        ],
        body,
    ))
}
