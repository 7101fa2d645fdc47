//! Authoritative in-memory job collection and the derived queries over it.

use std::{cmp::Ordering, collections::HashSet, sync::LazyLock};

use regex::Regex;
use shared::domain::{FilterCriteria, FilterField, JobId, JobRecord, SortCriteria};
use tracing::{debug, info};

static POSTED_MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*minutes\s*ago").expect("valid regex"));

/// Minutes encoded in a posting-age text such as "8 minutes ago". Any other
/// phrasing ("2 hours ago", "yesterday") is unknown.
pub fn posted_minutes(posted: &str) -> Option<u64> {
    POSTED_MINUTES_RE
        .captures(posted)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

#[derive(Debug, Default)]
pub struct JobStore {
    records: Vec<JobRecord>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection.
    pub fn load(&mut self, records: Vec<JobRecord>) -> usize {
        self.records = records;
        info!(jobs = self.records.len(), "job store loaded");
        self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Values observed for `field`, first-seen order, exact strings.
    pub fn distinct_values(&self, field: FilterField) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|record| record.field(field))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    pub fn query(&self, filter: &FilterCriteria, sort: SortCriteria) -> Vec<&JobRecord> {
        let mut view: Vec<&JobRecord> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .collect();

        // slice::sort_by is stable, ties keep post-filter order.
        match sort {
            SortCriteria::None => {}
            SortCriteria::Title => {
                view.sort_by(|a, b| compare_text(a.title.as_deref(), b.title.as_deref()))
            }
            SortCriteria::Level => {
                view.sort_by(|a, b| compare_text(a.level.as_deref(), b.level.as_deref()))
            }
            SortCriteria::Posted => view.sort_by(|a, b| compare_posted(a, b)),
        }

        debug!(
            matched = view.len(),
            total = self.records.len(),
            sort = %sort,
            "job query evaluated"
        );
        view
    }

    pub fn find_by_id(&self, id: &JobId) -> Option<&JobRecord> {
        self.records.iter().find(|record| &record.job_no == id)
    }
}

/// Case-insensitive first; on a case-only difference lowercase sorts ahead,
/// the way a locale collation orders "alpha" before "Alpha".
fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare_posted(a: &JobRecord, b: &JobRecord) -> Ordering {
    let minutes = |record: &JobRecord| record.posted.as_deref().and_then(posted_minutes);
    match (minutes(a), minutes(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
