//! Development sample data, written with replace-or-insert so reruns
//! converge on the same documents.

use crate::errors::AppError;
use crate::record::{Record, id_text};
use crate::store::{RECORDS_COLLECTION, RecordStore, UpsertOutcome};
use bson::{doc, oid::ObjectId};

const SAMPLE_IDS: [&str; 2] = ["69313e6a0af14e4d1806d0a4", "69313e820af14e4d1806d0a6"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
    pub replaced: u64,
    pub total: u64,
}

/// The fixed sample set.
///
/// # Errors
/// Returns `Config` if a hardcoded id is not a valid ObjectId.
pub fn sample_records() -> Result<Vec<Record>, AppError> {
    let oid = |hex: &str| ObjectId::parse_str(hex).map_err(|e| AppError::Config(format!("bad sample id {hex}: {e}")));
    Ok(vec![
        Record::new(doc! {
            "_id": oid(SAMPLE_IDS[0])?,
            "user_id": "u1",
            "score": 87,
            "video_url": "https://example.com/demo3.mp4",
            "latitude": 25.0423,
            "longitude": 121.5648,
        }),
        Record::new(doc! {
            "_id": oid(SAMPLE_IDS[1])?,
            "user_id": "u2",
            "score": 75,
            "video_url": "https://example.com/demo2.mp4",
            "latitude": 25.0321,
            "longitude": 121.5487,
        }),
    ])
}

/// Upsert every sample record, then count the collection.
///
/// # Errors
/// Stops at the first store failure.
pub async fn seed<S: RecordStore>(store: &S) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();
    for record in sample_records()? {
        match store.replace_or_insert(record).await? {
            UpsertOutcome::Inserted(id) => {
                report.inserted += 1;
                log::info!("seed: inserted _id={}", id_text(&id));
                println!("Inserted doc with _id={}", id_text(&id));
            }
            UpsertOutcome::Replaced(id) => {
                report.replaced += 1;
                log::info!("seed: replaced _id={}", id_text(&id));
                println!("Replaced doc with _id={}", id_text(&id));
            }
        }
    }
    report.total = store.count().await?;
    println!("Total documents in '{RECORDS_COLLECTION}': {}", report.total);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_parse() {
        let recs = sample_records().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].object_id().unwrap().to_hex(), SAMPLE_IDS[1]);
    }
}
