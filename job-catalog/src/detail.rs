use askama::Template;
use serde::Serialize;
use std::fmt::{self, Display};

use crate::record::JobRecord;
use crate::Result;

const LINK_LABEL: &str = "Job Page Link";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "detail.html")]
struct DetailTemplate<'a> {
    fields: &'a [DetailField],
    link: &'a str,
}

/// Every field of a record, in presentation order, with the page link last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobDetail {
    fields: Vec<DetailField>,
}

pub fn render_detail(record: &JobRecord) -> JobDetail {
    let field = |label, value: Option<&str>| DetailField {
        label,
        value: value.unwrap_or_default().to_owned(),
    };
    let job_no = record.job_no().map(ToString::to_string);
    JobDetail {
        fields: vec![
            field("Job No", job_no.as_deref()),
            field("Title", record.title()),
            field("Type", record.job_type()),
            field("Level", record.level()),
            field("Skill", record.skill()),
            field("Estimated Time", record.estimated_time()),
            field("Description", record.detail()),
            field("Posted", record.posted()),
            field(LINK_LABEL, record.page_link()),
        ],
    }
}

impl JobDetail {
    pub fn fields(&self) -> &[DetailField] {
        &self.fields
    }

    /// Fragment for a detail pane; every value is escaped.
    pub fn to_html(&self) -> Result<String> {
        let (link, fields) = match self.fields.split_last() {
            Some((link, fields)) => (link.value.as_str(), fields),
            None => ("", &self.fields[..]),
        };
        Ok(DetailTemplate { fields, link }.render()?)
    }
}

impl Display for JobDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for DetailField { label, value } in &self.fields {
            if *label == LINK_LABEL {
                writeln!(f, "View Job Page: {}", value)?;
            } else {
                writeln!(f, "{}: {}", label, value)?;
            }
        }
        Ok(())
    }
}
