use crate::options::{build_option_sets, OptionSets};
use crate::query::{query, Query};
use crate::record::JobRecord;

/// A loaded document: its records and the filter options derived from them.
///
/// The two are only ever built together, so the options always describe
/// exactly these records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    records: Vec<JobRecord>,
    options: OptionSets,
}

impl Catalog {
    pub fn from_records(records: Vec<JobRecord>) -> Self {
        let options = build_option_sets(&records);
        Self { records, options }
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn options(&self) -> &OptionSets {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self, q: &Query) -> Vec<&JobRecord> {
        query(&self.records, q)
    }

    /// First record whose Job No reads as `job_no`
    pub fn find(&self, job_no: &str) -> Option<&JobRecord> {
        self.records
            .iter()
            .find(|record| record.job_no().map_or(false, |no| no.matches(job_no)))
    }
}
