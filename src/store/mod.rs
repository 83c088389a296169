//! Record storage.
//!
//! The store is an external collaborator; handlers only see [`RecordStore`].

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::errors::AppError;
use crate::record::Record;
use bson::Bson;
use std::future::Future;

pub const RECORDS_COLLECTION: &str = "records";

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Inserted(Bson),
    Replaced(Bson),
}

pub trait RecordStore: Send + Sync + 'static {
    /// Up to `limit` records in the store's natural order.
    fn find_all(&self, limit: i64) -> impl Future<Output = Result<Vec<Record>, AppError>> + Send;

    /// Replace the record with the same `_id`, or insert it.
    fn replace_or_insert(&self, record: Record) -> impl Future<Output = Result<UpsertOutcome, AppError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, AppError>> + Send;
}
