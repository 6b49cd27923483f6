use thiserror::Error;

use crate::record::JobRecord;

/// The uploaded document isn't a JSON array of job objects
#[derive(Debug, Error)]
#[error("Error loading file. Please ensure it is a valid JSON file. ({0})")]
pub struct LoadError(#[from] serde_json::Error);

/// Parses a whole document into records, in document order.
///
/// Either every element becomes a record or the document is rejected.
pub fn load_catalog(raw_text: &str) -> Result<Vec<JobRecord>, LoadError> {
    match serde_json::from_str::<Vec<JobRecord>>(raw_text) {
        Ok(records) => {
            log::debug!("parsed {} job records", records.len());
            Ok(records)
        }
        Err(e) => {
            log::warn!("rejected job document: {}", e);
            Err(LoadError(e))
        }
    }
}
