//! Plain-text rendering surface. Keeps the latest instructions and writes
//! them out once the command has finished driving the controller.

use std::io::{self, Write};

use job_core::{
    render::{BACK_TO_LIST, JOB_LINK_LABEL, LOAD_FAILED, NO_JOBS_FOUND, VIEW_DETAILS},
    FilterOptions, ListPanel, Panel, RenderSurface,
};
use shared::domain::{FilterField, SortCriteria};

#[derive(Debug, Default)]
pub struct TextSurface {
    filter_options: FilterOptions,
    sort_options: Vec<SortCriteria>,
    panel: Option<Panel>,
}

impl TextSurface {
    pub fn write_panel(&self, out: &mut impl Write) -> io::Result<()> {
        match &self.panel {
            None => Ok(()),
            Some(Panel::List(ListPanel::Rows(rows))) => {
                for row in rows {
                    writeln!(
                        out,
                        "[{}] {}  ({VIEW_DETAILS}: show {})",
                        row.job_no,
                        row.summary(),
                        row.job_no
                    )?;
                }
                Ok(())
            }
            Some(Panel::List(ListPanel::NoJobsFound)) => writeln!(out, "{NO_JOBS_FOUND}"),
            Some(Panel::List(ListPanel::LoadFailed(message))) => writeln!(out, "{message}"),
            Some(Panel::Detail(detail)) => {
                writeln!(out, "{}", detail.title)?;
                writeln!(out, "{}", "=".repeat(detail.title.chars().count().max(3)))?;
                for field in &detail.fields {
                    writeln!(out, "{}: {}", field.label, field.value)?;
                }
                writeln!(out, "{JOB_LINK_LABEL}: {}", detail.link)?;
                writeln!(out, "({BACK_TO_LIST}: list)")
            }
        }
    }

    pub fn write_options(&self, out: &mut impl Write) -> io::Result<()> {
        if self.filter_options.is_empty() {
            return writeln!(out, "{LOAD_FAILED}");
        }
        for field in FilterField::ALL {
            writeln!(
                out,
                "{field}: {}",
                self.filter_options.for_field(field).join(", ")
            )?;
        }
        let sorts: Vec<_> = self
            .sort_options
            .iter()
            .map(|sort| format!("{} ({})", sort.as_str(), sort.label()))
            .collect();
        writeln!(out, "Sort: {}", sorts.join(", "))
    }
}

impl RenderSurface for TextSurface {
    fn show_filter_options(&mut self, options: &FilterOptions) {
        self.filter_options = options.clone();
    }

    fn show_sort_options(&mut self, options: &[SortCriteria]) {
        self.sort_options = options.to_vec();
    }

    fn show_panel(&mut self, panel: Panel) {
        self.panel = Some(panel);
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
