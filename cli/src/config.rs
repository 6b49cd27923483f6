use job_catalog::SortKey;
use std::path::PathBuf;

/// Defaults read from the environment (and `.env`), overridden by flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// `JOB_CATALOG_FILE`: document used when `--file` is missing
    pub file: Option<PathBuf>,
    /// `JOB_CATALOG_SORT`: sort label used when `--sort` is missing
    pub sort: SortKey,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let file = lookup("JOB_CATALOG_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let sort = lookup("JOB_CATALOG_SORT")
            .as_deref()
            .map_or(SortKey::Unsorted, SortKey::from);
        Self { file, sort }
    }
}
