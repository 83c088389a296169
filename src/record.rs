//! Geotagged record documents.
//!
//! Records are schema-less: any field may be missing or carry an unexpected
//! type, so every accessor returns an `Option`.

pub mod fields;

use bson::{Bson, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

pub use fields::{USER_ID_KEYS, VIDEO_URL_KEYS, cell_text, first_present, is_blank};

pub const ID_FIELD: &str = "_id";

/// One stored document, exactly as the store returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Document);

impl Record {
    #[must_use]
    pub fn new(doc: Document) -> Self {
        Self(doc)
    }

    #[must_use]
    pub fn id(&self) -> Option<&Bson> {
        self.0.get(ID_FIELD)
    }

    #[must_use]
    pub fn object_id(&self) -> Option<ObjectId> {
        match self.id() {
            Some(Bson::ObjectId(oid)) => Some(*oid),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Bson> {
        self.0.get(key)
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.0
    }

    /// Relaxed Extended JSON projection; keeps every field and its native type.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        Bson::Document(self.0.clone()).into_relaxed_extjson()
    }
}

impl From<Document> for Record {
    fn from(doc: Document) -> Self {
        Self(doc)
    }
}

/// Display form of an identifier: ObjectId as hex, strings verbatim.
#[must_use]
pub fn id_text(id: &Bson) -> String {
    cell_text(id)
}
