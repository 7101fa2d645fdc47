//! Render instructions handed to the presentation surface, and the surface
//! capability itself.

use shared::domain::{FilterField, JobId, JobRecord, SortCriteria, ALL};

pub const NO_JOBS_FOUND: &str = "No jobs found.";
pub const LOAD_FAILED: &str = "Failed to load job data.";
pub const VIEW_DETAILS: &str = "View Details";
pub const BACK_TO_LIST: &str = "Back to list";
pub const JOB_LINK_LABEL: &str = "View Job on Upwork";

/// Options the sort control offers, in display order.
pub const SORT_OPTIONS: [SortCriteria; 4] = SortCriteria::ALL;

/// Selectable values per filter control. Each non-empty list starts with the
/// `All` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub level: Vec<String>,
    pub job_type: Vec<String>,
    pub skill: Vec<String>,
}

impl FilterOptions {
    pub fn from_observed(
        level: Vec<String>,
        job_type: Vec<String>,
        skill: Vec<String>,
    ) -> Self {
        let with_all = |values: Vec<String>| {
            std::iter::once(ALL.to_string())
                .chain(values)
                .collect::<Vec<_>>()
        };
        Self {
            level: with_all(level),
            job_type: with_all(job_type),
            skill: with_all(skill),
        }
    }

    pub fn for_field(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Level => &self.level,
            FilterField::Type => &self.job_type,
            FilterField::Skill => &self.skill,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_empty() && self.job_type.is_empty() && self.skill.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub job_no: JobId,
    pub title: String,
    pub job_type: String,
    pub level: String,
}

impl ListRow {
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            job_no: record.job_no.clone(),
            title: blank_if_missing(record.title.as_deref()),
            job_type: blank_if_missing(record.job_type.as_deref()),
            level: blank_if_missing(record.level.as_deref()),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} - {} project ({})", self.title, self.job_type, self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPanel {
    Rows(Vec<ListRow>),
    NoJobsFound,
    LoadFailed(String),
}

impl ListPanel {
    pub fn from_view(view: &[&JobRecord]) -> Self {
        if view.is_empty() {
            Self::NoJobsFound
        } else {
            Self::Rows(view.iter().map(|record| ListRow::from_record(record)).collect())
        }
    }

    pub fn job_ids(&self) -> Vec<&JobId> {
        match self {
            Self::Rows(rows) => rows.iter().map(|row| &row.job_no).collect(),
            Self::NoJobsFound | Self::LoadFailed(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub job_no: JobId,
    pub title: String,
    pub fields: Vec<DetailField>,
    pub link: String,
}

impl DetailPanel {
    pub fn from_record(record: &JobRecord) -> Self {
        let field = |label, value: &Option<String>| DetailField {
            label,
            value: blank_if_missing(value.as_deref()),
        };
        Self {
            job_no: record.job_no.clone(),
            title: blank_if_missing(record.title.as_deref()),
            fields: vec![
                field("Posted", &record.posted),
                field("Type", &record.job_type),
                field("Level", &record.level),
                field("Estimated Time", &record.estimated_time),
                field("Skill", &record.skill),
                field("Detail", &record.detail),
            ],
            link: blank_if_missing(record.job_page_link.as_deref()),
        }
    }

    /// Placeholder shown when the selected job can no longer be resolved.
    pub fn vacant(job_no: JobId) -> Self {
        Self {
            job_no,
            title: String::new(),
            fields: Vec::new(),
            link: String::new(),
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// The single panel visible after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    List(ListPanel),
    Detail(DetailPanel),
}

/// Presentation surface driven by the view controller. Implementations only
/// display what they are given; they never query the store.
pub trait RenderSurface {
    fn show_filter_options(&mut self, options: &FilterOptions);

    fn show_sort_options(&mut self, options: &[SortCriteria]);

    /// Replaces whatever panel was visible.
    fn show_panel(&mut self, panel: Panel);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn show_filter_options(&mut self, options: &FilterOptions) {
        (**self).show_filter_options(options);
    }

    fn show_sort_options(&mut self, options: &[SortCriteria]) {
        (**self).show_sort_options(options);
    }

    fn show_panel(&mut self, panel: Panel) {
        (**self).show_panel(panel);
    }
}

fn blank_if_missing(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
