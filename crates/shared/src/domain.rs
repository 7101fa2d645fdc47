use std::{fmt, str::FromStr};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::LoadError;

/// Selection value meaning "no constraint" for a filter control.
pub const ALL: &str = "All";

pub const FIELD_JOB_NO: &str = "Job No";
pub const FIELD_TITLE: &str = "Title";
pub const FIELD_POSTED: &str = "Posted";
pub const FIELD_TYPE: &str = "Type";
pub const FIELD_LEVEL: &str = "Level";
pub const FIELD_ESTIMATED_TIME: &str = "Estimated Time";
pub const FIELD_SKILL: &str = "Skill";
pub const FIELD_DETAIL: &str = "Detail";
pub const FIELD_JOB_PAGE_LINK: &str = "Job Page Link";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One posting as loaded from the data source. Text attributes that were
/// absent or not representable as text are `None` and render blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Job No")]
    pub job_no: JobId,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Posted", skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(rename = "Level", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "Estimated Time", skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(rename = "Skill", skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(rename = "Detail", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(rename = "Job Page Link", skip_serializing_if = "Option::is_none")]
    pub job_page_link: Option<String>,
}

impl JobRecord {
    /// Record with only an identity; every attribute blank.
    pub fn new(job_no: impl Into<JobId>) -> Self {
        Self {
            job_no: job_no.into(),
            title: None,
            posted: None,
            job_type: None,
            level: None,
            estimated_time: None,
            skill: None,
            detail: None,
            job_page_link: None,
        }
    }

    pub fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Level => self.level.as_deref(),
            FilterField::Type => self.job_type.as_deref(),
            FilterField::Skill => self.skill.as_deref(),
        }
    }

    fn from_object(index: usize, object: &Map<String, Value>) -> Result<Self, LoadError> {
        let job_no = match object.get(FIELD_JOB_NO) {
            Some(Value::String(text)) => JobId(text.clone()),
            Some(Value::Number(number)) => JobId(number.to_string()),
            _ => {
                return Err(LoadError::MissingField {
                    index,
                    field: FIELD_JOB_NO,
                })
            }
        };

        Ok(Self {
            job_no,
            title: text_field(object, FIELD_TITLE),
            posted: text_field(object, FIELD_POSTED),
            job_type: text_field(object, FIELD_TYPE),
            level: text_field(object, FIELD_LEVEL),
            estimated_time: text_field(object, FIELD_ESTIMATED_TIME),
            skill: text_field(object, FIELD_SKILL),
            detail: text_field(object, FIELD_DETAIL),
            job_page_link: text_field(object, FIELD_JOB_PAGE_LINK),
        })
    }
}

fn text_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    match object.get(name)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decodes the data source payload: a JSON array of objects, each with at
/// least a `Job No`.
pub fn parse_job_payload(bytes: &[u8]) -> Result<Vec<JobRecord>, LoadError> {
    let payload: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = payload else {
        return Err(LoadError::malformed("expected a JSON array of job records"));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => JobRecord::from_object(index, object),
            _ => Err(LoadError::malformed(format!(
                "job record {index} is not a JSON object"
            ))),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Level,
    Type,
    Skill,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Level, FilterField::Type, FilterField::Skill];

    /// Name of the source attribute backing this filter.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Level => FIELD_LEVEL,
            FilterField::Type => FIELD_TYPE,
            FilterField::Skill => FIELD_SKILL,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterValue {
    #[default]
    All,
    Exactly(String),
}

impl FilterValue {
    /// Maps a control selection to a predicate; the `All` option is the
    /// unconstrained sentinel, anything else is an exact match.
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL {
            Self::All
        } else {
            Self::Exactly(selection.to_string())
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(expected) => value == Some(expected.as_str()),
        }
    }

    pub fn as_selection(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Exactly(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub level: FilterValue,
    pub job_type: FilterValue,
    pub skill: FilterValue,
}

impl FilterCriteria {
    pub fn from_selections(level: &str, job_type: &str, skill: &str) -> Self {
        Self {
            level: FilterValue::from_selection(level),
            job_type: FilterValue::from_selection(job_type),
            skill: FilterValue::from_selection(skill),
        }
    }

    pub fn get(&self, field: FilterField) -> &FilterValue {
        match field {
            FilterField::Level => &self.level,
            FilterField::Type => &self.job_type,
            FilterField::Skill => &self.skill,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| *self.get(*field) == FilterValue::All)
    }

    pub fn matches(&self, record: &JobRecord) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| self.get(*field).matches(record.field(*field)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortCriteria {
    #[default]
    None,
    Title,
    Level,
    Posted,
}

impl SortCriteria {
    pub const ALL: [SortCriteria; 4] = [
        SortCriteria::None,
        SortCriteria::Title,
        SortCriteria::Level,
        SortCriteria::Posted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortCriteria::None => "none",
            SortCriteria::Title => "title",
            SortCriteria::Level => "level",
            SortCriteria::Posted => "posted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriteria::None => "Default order",
            SortCriteria::Title => "Title",
            SortCriteria::Level => "Level",
            SortCriteria::Posted => "Posted",
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option `{0}` (expected one of: none, title, level, posted)")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortCriteria {
    type Err = UnknownSortOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortCriteria::None),
            "title" => Ok(SortCriteria::Title),
            "level" => Ok(SortCriteria::Level),
            "posted" => Ok(SortCriteria::Posted),
            _ => Err(UnknownSortOption(value.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
