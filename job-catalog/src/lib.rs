pub mod api;
pub mod catalog;
pub mod detail;
pub mod loader;
pub mod options;
pub mod query;
pub mod recency;
pub mod record;
pub mod store;

pub use api::{DocumentSource, FileSource, TextSource};
pub use catalog::Catalog;
pub use detail::{render_detail, DetailField, JobDetail};
pub use loader::{load_catalog, LoadError};
pub use options::{build_option_sets, Dimension, FilterOptionSet, OptionSets, ALL};
pub use query::{query, Filter, Query, SortKey};
pub use recency::{recency_minutes, Recency};
pub use record::{JobNo, JobRecord};
pub use store::CatalogStore;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("A job document is already being loaded")]
    LoadInProgress,
    #[error("Failed to read job document: '{0}'")]
    Source(Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to render job detail: '{0}'")]
    Render(#[from] askama::Error),
}
