use crate::export::Templates;
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// Everything a request handler needs, built once at startup and shared
/// behind an `Arc`.
pub struct AppContext<S> {
    pub store: S,
    pub templates: Templates,
    pub static_dir: PathBuf,
}

impl<S: RecordStore> AppContext<S> {
    pub fn new(store: S, templates_dir: impl AsRef<Path>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            templates: Templates::from_dir(templates_dir),
            static_dir: static_dir.into(),
        }
    }
}
