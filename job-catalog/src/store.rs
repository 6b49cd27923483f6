use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::api::DocumentSource;
use crate::catalog::Catalog;
use crate::loader::load_catalog;
use crate::{Error, Result};

/// Holds the active catalog and replaces it one load at a time.
///
/// A load that fails for any reason leaves the active catalog in place.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Option<Arc<Catalog>>>,
    loading: AtomicBool,
}

/// Clears the pending flag when a load finishes, fails or is dropped
struct PendingLoad<'a>(&'a AtomicBool);

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<Catalog>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Reads and parses a document, then makes it the active catalog.
    ///
    /// Rejected with [`Error::LoadInProgress`] while another load is pending.
    pub async fn load<S>(&self, source: &S) -> Result<Arc<Catalog>>
    where
        S: DocumentSource + ?Sized,
    {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("rejected load of {}, another load is pending", source.describe());
            return Err(Error::LoadInProgress);
        }
        let _pending = PendingLoad(&self.loading);

        let text = source.read_text().await.map_err(|e| {
            log::error!("failed to read {}: {}", source.describe(), e);
            Error::Source(Box::new(e))
        })?;
        let catalog = Arc::new(Catalog::from_records(load_catalog(&text)?));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&catalog));
        log::info!("loaded {} jobs from {}", catalog.len(), source.describe());
        Ok(catalog)
    }
}
