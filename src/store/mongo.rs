use super::{RECORDS_COLLECTION, RecordStore, UpsertOutcome};
use crate::errors::AppError;
use crate::record::Record;
use bson::{Document, doc};
use mongodb::{Client, Collection};

/// MongoDB-backed store. One client per process; the driver pools
/// connections internally, so clones share it.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    records: Collection<Document>,
}

impl MongoStore {
    /// # Errors
    /// Returns `Store` if the URI is malformed or the client cannot be built.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri).await?;
        let records = client.database(db_name).collection::<Document>(RECORDS_COLLECTION);
        log::info!("mongo: using database={db_name} collection={RECORDS_COLLECTION}");
        Ok(Self { client, records })
    }

    pub async fn shutdown(self) {
        log::info!("mongo: closing client");
        self.client.shutdown().await;
    }
}

impl RecordStore for MongoStore {
    async fn find_all(&self, limit: i64) -> Result<Vec<Record>, AppError> {
        let mut cursor = self.records.find(doc! {}).limit(limit).await?;
        let mut out = Vec::new();
        while cursor.advance().await? {
            out.push(Record::new(cursor.deserialize_current()?));
        }
        log::debug!("mongo find: limit={limit} returned={}", out.len());
        Ok(out)
    }

    async fn replace_or_insert(&self, record: Record) -> Result<UpsertOutcome, AppError> {
        let id = record
            .id()
            .cloned()
            .ok_or_else(|| AppError::Store("cannot upsert a record without _id".into()))?;
        let result = self
            .records
            .replace_one(doc! {"_id": id.clone()}, record.into_document())
            .upsert(true)
            .await?;
        Ok(match result.upserted_id {
            Some(new_id) => UpsertOutcome::Inserted(new_id),
            None => UpsertOutcome::Replaced(id),
        })
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.records.count_documents(doc! {}).await?)
    }
}
