use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};

use crate::detail::{render_detail, JobDetail};
use crate::recency::{recency_minutes, Recency};

/// Identifier of a posting, kept the way the document wrote it
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum JobNo {
    Number(serde_json::Number),
    Text(String),
}

impl JobNo {
    /// True if the identifier reads as `text`, whether it was written as a number or a string
    pub fn matches(&self, text: &str) -> bool {
        match self {
            JobNo::Number(number) => number.to_string() == text.trim(),
            JobNo::Text(value) => value == text,
        }
    }
}

impl Display for JobNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobNo::Number(number) => write!(f, "{}", number),
            JobNo::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<u64> for JobNo {
    fn from(value: u64) -> Self {
        JobNo::Number(value.into())
    }
}

impl From<&str> for JobNo {
    fn from(value: &str) -> Self {
        JobNo::Text(value.to_owned())
    }
}

/// One job posting as it appears in an uploaded document.
///
/// The serde renames are the mapping between the document keys and the
/// record fields. Keys missing from the document, or set to `null`, leave
/// the field empty; nothing else about the record is validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct JobRecord {
    #[serde(
        rename = "Job No",
        default,
        deserialize_with = "job_no",
        skip_serializing_if = "Option::is_none"
    )]
    job_no: Option<JobNo>,
    #[serde(
        rename = "Title",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    title: Option<String>,
    #[serde(
        rename = "Job Page Link",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    page_link: Option<String>,
    #[serde(
        rename = "Posted",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    posted: Option<String>,
    #[serde(
        rename = "Type",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    job_type: Option<String>,
    #[serde(
        rename = "Level",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    level: Option<String>,
    #[serde(
        rename = "Estimated Time",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    estimated_time: Option<String>,
    #[serde(
        rename = "Skill",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    skill: Option<String>,
    #[serde(
        rename = "Detail",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    detail: Option<String>,
}

/// Text fields accept any scalar; numbers and booleans keep their JSON spelling.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(value) => Some(value),
        other => Some(other.to_string()),
    })
}

fn job_no<'de, D>(deserializer: D) -> Result<Option<JobNo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(number) => Some(JobNo::Number(number)),
        Value::String(value) => Some(JobNo::Text(value)),
        other => Some(JobNo::Text(other.to_string())),
    })
}

impl JobRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_no: Option<JobNo>,
        title: Option<String>,
        page_link: Option<String>,
        posted: Option<String>,
        job_type: Option<String>,
        level: Option<String>,
        estimated_time: Option<String>,
        skill: Option<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            job_no,
            title,
            page_link,
            posted,
            job_type,
            level,
            estimated_time,
            skill,
            detail,
        }
    }

    pub fn job_no(&self) -> Option<&JobNo> {
        self.job_no.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn page_link(&self) -> Option<&str> {
        self.page_link.as_deref()
    }

    pub fn posted(&self) -> Option<&str> {
        self.posted.as_deref()
    }

    pub fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn estimated_time(&self) -> Option<&str> {
        self.estimated_time.as_deref()
    }

    pub fn skill(&self) -> Option<&str> {
        self.skill.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Minutes elapsed since the posting, `Unknown` when the posted text can't be read
    pub fn recency(&self) -> Recency {
        self.posted.as_deref().map_or(Recency::Unknown, recency_minutes)
    }

    /// The list line: `<title> - <level> (<type>)`
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({})",
            self.title().unwrap_or_default(),
            self.level().unwrap_or_default(),
            self.job_type().unwrap_or_default()
        )
    }

    pub fn details(&self) -> JobDetail {
        render_detail(self)
    }
}
