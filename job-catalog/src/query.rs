use std::cmp::{Ordering, Reverse};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::options::{Dimension, ALL};
use crate::record::JobRecord;

/// Constraint on one dimension of a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Exactly(String),
}

impl Filter {
    /// Exact, case-sensitive comparison. An empty field never matches a concrete value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Exactly(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Exactly(value.to_owned())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    TitleAscending,
    TitleDescending,
    NewestFirst,
    OldestFirst,
    /// Leaves the filtered records in catalog order
    #[default]
    Unsorted,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::TitleAscending => "Title A-Z",
            SortKey::TitleDescending => "Title Z-A",
            SortKey::NewestFirst => "Posted Time — Newest First",
            SortKey::OldestFirst => "Posted Time — Oldest First",
            SortKey::Unsorted => "None",
        }
    }
}

/// Unrecognized labels select [`SortKey::Unsorted`].
impl From<&str> for SortKey {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Title A-Z" | "title-asc" => SortKey::TitleAscending,
            "Title Z-A" | "title-desc" => SortKey::TitleDescending,
            "Posted Time — Newest First" | "Posted Time - Newest First" | "newest" => {
                SortKey::NewestFirst
            }
            "Posted Time — Oldest First" | "Posted Time - Oldest First" | "oldest" => {
                SortKey::OldestFirst
            }
            _ => SortKey::Unsorted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub level: Filter,
    pub job_type: Filter,
    pub skill: Filter,
    pub sort: SortKey,
}

impl Query {
    pub fn filter(&self, dimension: Dimension) -> &Filter {
        match dimension {
            Dimension::Level => &self.level,
            Dimension::Type => &self.job_type,
            Dimension::Skill => &self.skill,
        }
    }

    pub fn matches(&self, record: &JobRecord) -> bool {
        Dimension::ALL
            .iter()
            .all(|dimension| self.filter(*dimension).matches(dimension.value_of(record)))
    }
}

/// Selects the records passing every filter, then orders them by the sort key.
///
/// The catalog itself is never reordered. Sorting is stable, so records
/// that compare equal stay in catalog order.
pub fn query<'a>(catalog: &'a [JobRecord], query: &Query) -> Vec<&'a JobRecord> {
    let mut view: Vec<&JobRecord> = catalog
        .iter()
        .filter(|record| query.matches(record))
        .collect();
    match query.sort {
        SortKey::TitleAscending => view.sort_by_cached_key(|record| title_key(record)),
        SortKey::TitleDescending => view.sort_by_cached_key(|record| Reverse(title_key(record))),
        SortKey::NewestFirst => {
            view.sort_by_cached_key(|record| record.recency().newest_first_key())
        }
        SortKey::OldestFirst => {
            view.sort_by_cached_key(|record| record.recency().oldest_first_key())
        }
        SortKey::Unsorted => {}
    }
    log::debug!("query {:?} kept {} of {} records", query, view.len(), catalog.len());
    view
}

fn title_key(record: &JobRecord) -> CollationKey {
    CollationKey::new(record.title().unwrap_or_default())
}

/// Dictionary-style sort key for titles.
///
/// Levels are compared in turn: base letters without accents or case,
/// then accents (unaccented first), then case (lower case first), then
/// the raw code points.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: Vec<char>,
    accents: Vec<char>,
    case: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let accents: Vec<char> = text.nfd().flat_map(char::to_lowercase).collect();
        let base = accents
            .iter()
            .copied()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        Self {
            base,
            accents,
            case: text.nfd().map(char::is_uppercase).collect(),
            raw: text.to_owned(),
        }
    }
}

pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<JobRecord> {
        serde_json::from_value(json!([
            {"Job No": 1, "Title": "B Job", "Posted": "2 hours",
             "Level": "Entry", "Type": "Fixed", "Skill": "X"},
            {"Job No": 2, "Title": "A Job", "Posted": "10 minutes",
             "Level": "Entry", "Type": "Fixed", "Skill": "Y"},
            {"Job No": 3, "Title": "c job", "Posted": "soon",
             "Level": "Expert", "Type": "Hourly", "Skill": "X"},
            {"Job No": 4, "Title": "D Job", "Posted": "3 days",
             "Level": "Entry", "Type": "Hourly", "Skill": "Y"}
        ]))
        .unwrap()
    }

    fn job_nos(view: &[&JobRecord]) -> Vec<String> {
        view.iter()
            .map(|record| {
                record
                    .job_no()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn end_to_end_newest_first() {
        let catalog: Vec<JobRecord> = serde_json::from_value(json!([
            {"Job No": 1, "Title": "B Job", "Posted": "2 hours",
             "Level": "Entry", "Type": "Fixed", "Skill": "X"},
            {"Job No": 2, "Title": "A Job", "Posted": "10 minutes",
             "Level": "Entry", "Type": "Fixed", "Skill": "Y"}
        ]))
        .unwrap();
        let q = Query {
            level: Filter::from("Entry"),
            job_type: Filter::from("All"),
            skill: Filter::from("All"),
            sort: SortKey::from("Posted Time — Newest First"),
        };
        assert_eq!(job_nos(&query(&catalog, &q)), ["2", "1"]);
    }

    #[test]
    fn all_filters_keep_catalog_order() {
        let catalog = catalog();
        let view = query(&catalog, &Query::default());
        assert_eq!(job_nos(&view), ["1", "2", "3", "4"]);
    }

    #[test]
    fn filters_are_anded_and_exact() {
        let catalog = catalog();
        let q = Query {
            level: Filter::from("Entry"),
            skill: Filter::from("Y"),
            ..Query::default()
        };
        assert_eq!(job_nos(&query(&catalog, &q)), ["2", "4"]);

        let q = Query {
            level: Filter::from("entry"),
            ..Query::default()
        };
        assert!(query(&catalog, &q).is_empty());
    }

    #[test]
    fn empty_fields_only_pass_the_wildcard() {
        let catalog: Vec<JobRecord> =
            serde_json::from_value(json!([{"Job No": 1}, {"Job No": 2, "Level": "Entry"}]))
                .unwrap();
        let q = Query {
            level: Filter::from("Entry"),
            ..Query::default()
        };
        assert_eq!(job_nos(&query(&catalog, &q)), ["2"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let q = Query {
            job_type: Filter::from("Hourly"),
            sort: SortKey::from("no such sort"),
            ..Query::default()
        };
        let once: Vec<JobRecord> = query(&catalog, &q).into_iter().cloned().collect();
        let twice: Vec<JobRecord> = query(&once, &q).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn title_orders_are_reverses() {
        let catalog = catalog();
        let ascending = query(
            &catalog,
            &Query {
                sort: SortKey::TitleAscending,
                ..Query::default()
            },
        );
        let mut descending = query(
            &catalog,
            &Query {
                sort: SortKey::TitleDescending,
                ..Query::default()
            },
        );
        assert_eq!(job_nos(&ascending), ["2", "1", "3", "4"]);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn posted_orders_put_unknown_last() {
        let catalog = catalog();
        let newest = Query {
            sort: SortKey::NewestFirst,
            ..Query::default()
        };
        let oldest = Query {
            sort: SortKey::OldestFirst,
            ..Query::default()
        };
        assert_eq!(job_nos(&query(&catalog, &newest)), ["2", "1", "4", "3"]);
        assert_eq!(job_nos(&query(&catalog, &oldest)), ["4", "1", "2", "3"]);
    }

    #[test]
    fn unknown_sort_label_keeps_order() {
        let catalog = catalog();
        let q = Query {
            sort: SortKey::from("Salary"),
            ..Query::default()
        };
        assert_eq!(q.sort, SortKey::Unsorted);
        assert_eq!(job_nos(&query(&catalog, &q)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn sort_labels() {
        assert_eq!(SortKey::from("Title A-Z"), SortKey::TitleAscending);
        assert_eq!(SortKey::from("title-desc"), SortKey::TitleDescending);
        assert_eq!(SortKey::from("Posted Time - Oldest First"), SortKey::OldestFirst);
        assert_eq!(SortKey::from(SortKey::NewestFirst.label()), SortKey::NewestFirst);
    }

    #[test]
    fn collation_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("", "a"), Ordering::Less);
    }

    fn sorted(catalog: &[JobRecord], sort: SortKey) -> Vec<String> {
        job_nos(&query(
            catalog,
            &Query {
                sort,
                ..Query::default()
            },
        ))
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog: Vec<JobRecord> = serde_json::from_value(json!([
            {"Job No": 1, "Title": "Same", "Posted": "1 hour"},
            {"Job No": 2, "Title": "Alpha", "Posted": "60 minutes"},
            {"Job No": 3, "Title": "Same", "Posted": "2 hours"},
            {"Job No": 4, "Title": "Alpha", "Posted": "120 minutes"},
            {"Job No": 5, "Title": "Same", "Posted": "soon"},
            {"Job No": 6, "Title": "Alpha", "Posted": "whenever"}
        ]))
        .unwrap();
        assert_eq!(
            sorted(&catalog, SortKey::TitleAscending),
            ["2", "4", "6", "1", "3", "5"]
        );
        assert_eq!(
            sorted(&catalog, SortKey::TitleDescending),
            ["1", "3", "5", "2", "4", "6"]
        );
        assert_eq!(
            sorted(&catalog, SortKey::NewestFirst),
            ["1", "2", "3", "4", "5", "6"]
        );
        assert_eq!(
            sorted(&catalog, SortKey::OldestFirst),
            ["3", "4", "1", "2", "5", "6"]
        );
    }

    #[test]
    fn accented_titles_sort_with_their_base_letter() {
        let catalog: Vec<JobRecord> = serde_json::from_value(json!([
            {"Job No": 1, "Title": "Zebra app"},
            {"Job No": 2, "Title": "Éclair service"},
            {"Job No": 3, "Title": "Apple port"},
            {"Job No": 4, "Title": "eclair service"}
        ]))
        .unwrap();
        assert_eq!(
            sorted(&catalog, SortKey::TitleAscending),
            ["3", "4", "2", "1"]
        );
        assert_eq!(
            sorted(&catalog, SortKey::TitleDescending),
            ["1", "2", "4", "3"]
        );
        assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("Ångström", "Angstrom"), Ordering::Greater);
    }
}
