//! Geotagged record service.
//!
//! Reads user/score/video/location documents from a MongoDB collection and
//! exposes them as JSON, an HTML page and a CSV download. A `seed` command
//! loads a fixed sample set for development.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod logger;
pub mod query;
pub mod record;
pub mod seed;
pub mod server;
pub mod store;
pub mod web;

pub use config::Settings;
pub use errors::AppError;
pub use record::Record;
pub use store::{MemoryStore, MongoStore, RecordStore};
