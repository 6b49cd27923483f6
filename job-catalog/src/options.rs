use serde::Serialize;
use std::collections::HashSet;

use crate::record::JobRecord;

/// Wildcard filter value, always the first option of every set
pub const ALL: &str = "All";

/// The three categorical fields a catalog can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Level,
    Type,
    Skill,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Level, Dimension::Type, Dimension::Skill];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Level => "Level",
            Dimension::Type => "Type",
            Dimension::Skill => "Skill",
        }
    }

    pub fn value_of<'a>(&self, record: &'a JobRecord) -> Option<&'a str> {
        match self {
            Dimension::Level => record.level(),
            Dimension::Type => record.job_type(),
            Dimension::Skill => record.skill(),
        }
    }
}

/// Distinct values observed for one dimension, led by [`ALL`].
///
/// Values keep the order in which they first appear in the catalog.
/// Records without a value for the dimension contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterOptionSet {
    values: Vec<String>,
}

impl FilterOptionSet {
    fn collect<'a>(observed: impl Iterator<Item = Option<&'a str>>) -> Self {
        let mut seen = HashSet::new();
        let mut values = vec![ALL.to_owned()];
        for value in observed.flatten() {
            if value != ALL && seen.insert(value) {
                values.push(value.to_owned());
            }
        }
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|option| option == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Default for FilterOptionSet {
    fn default() -> Self {
        Self {
            values: vec![ALL.to_owned()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OptionSets {
    level: FilterOptionSet,
    #[serde(rename = "type")]
    job_type: FilterOptionSet,
    skill: FilterOptionSet,
}

impl OptionSets {
    pub fn level(&self) -> &FilterOptionSet {
        &self.level
    }

    pub fn job_type(&self) -> &FilterOptionSet {
        &self.job_type
    }

    pub fn skill(&self) -> &FilterOptionSet {
        &self.skill
    }

    pub fn for_dimension(&self, dimension: Dimension) -> &FilterOptionSet {
        match dimension {
            Dimension::Level => &self.level,
            Dimension::Type => &self.job_type,
            Dimension::Skill => &self.skill,
        }
    }
}

/// Scans the whole catalog for the values offered by each filter.
pub fn build_option_sets(catalog: &[JobRecord]) -> OptionSets {
    let collect = |dimension: Dimension| {
        FilterOptionSet::collect(catalog.iter().map(|record| dimension.value_of(record)))
    };
    OptionSets {
        level: collect(Dimension::Level),
        job_type: collect(Dimension::Type),
        skill: collect(Dimension::Skill),
    }
}
