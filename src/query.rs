//! Bounded reads against the record collection.
//!
//! No sort is applied; the store's natural order is returned as-is.

use crate::errors::AppError;
use crate::record::Record;
use crate::store::RecordStore;

/// Cap for the JSON listing and the HTML export page.
pub const LISTING_LIMIT: i64 = 100;
/// Cap for the CSV download.
pub const CSV_EXPORT_LIMIT: i64 = 1000;

/// # Errors
/// Propagates any store failure unchanged.
pub async fn fetch_records<S: RecordStore>(store: &S, limit: i64) -> Result<Vec<Record>, AppError> {
    let records = store.find_all(limit).await?;
    log::debug!("query: limit={limit} returned={}", records.len());
    Ok(records)
}

/// # Errors
/// Propagates any store failure unchanged.
pub async fn fetch_listing<S: RecordStore>(store: &S) -> Result<Vec<Record>, AppError> {
    fetch_records(store, LISTING_LIMIT).await
}

/// # Errors
/// Propagates any store failure unchanged.
pub async fn fetch_for_csv<S: RecordStore>(store: &S) -> Result<Vec<Record>, AppError> {
    fetch_records(store, CSV_EXPORT_LIMIT).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use bson::doc;

    fn store_of(n: i32) -> MemoryStore {
        MemoryStore::with_records((0..n).map(|i| Record::new(doc! {"_id": i})))
    }

    #[tokio::test]
    async fn listing_caps_at_one_hundred() {
        let store = store_of(150);
        assert_eq!(fetch_listing(&store).await.unwrap().len(), 100);
    }

    #[tokio::test]
    async fn csv_caps_at_one_thousand() {
        let store = store_of(1200);
        assert_eq!(fetch_for_csv(&store).await.unwrap().len(), 1000);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = store_of(1);
        store.set_unavailable(true);
        assert!(matches!(fetch_listing(&store).await, Err(AppError::Store(_))));
    }
}
