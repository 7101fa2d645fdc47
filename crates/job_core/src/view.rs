//! List/detail view state machine.
//!
//! The controller owns the job store, the active filter and sort criteria,
//! and which panel is visible. Every inbound event is handled synchronously
//! and ends in at most one render instruction to the surface.

use shared::{
    domain::{FilterCriteria, FilterField, JobId, JobRecord, SortCriteria},
    error::{LoadError, LookupMiss},
};
use tracing::{debug, warn};

use crate::{
    render::{
        DetailPanel, FilterOptions, ListPanel, Panel, RenderSurface, LOAD_FAILED, SORT_OPTIONS,
    },
    store::JobStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    List,
    Detail(JobId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Pending,
    Ready,
    Failed(LoadError),
}

/// Named inbound events from the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loaded(Result<Vec<JobRecord>, LoadError>),
    ApplyFilters {
        level: String,
        job_type: String,
        skill: String,
    },
    Sort(SortCriteria),
    Select(JobId),
    Back,
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            ViewEvent::Loaded(_) => "loaded",
            ViewEvent::ApplyFilters { .. } => "apply",
            ViewEvent::Sort(_) => "sort",
            ViewEvent::Select(_) => "select",
            ViewEvent::Back => "back",
        }
    }
}

pub struct ViewController<S> {
    store: JobStore,
    surface: S,
    state: ViewState,
    phase: LoadPhase,
    filter: FilterCriteria,
    sort: SortCriteria,
}

impl<S: RenderSurface> ViewController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            store: JobStore::new(),
            surface,
            state: ViewState::List,
            phase: LoadPhase::Pending,
            filter: FilterCriteria::default(),
            sort: SortCriteria::None,
        }
    }

    pub fn handle(&mut self, event: ViewEvent) {
        let name = event.name();
        if !matches!(event, ViewEvent::Loaded(_)) && self.phase != LoadPhase::Ready {
            debug!(
                event = name,
                phase = ?self.phase,
                "ignoring event before a successful load"
            );
            return;
        }

        match event {
            ViewEvent::Loaded(result) => self.on_load_result(result),
            ViewEvent::ApplyFilters {
                level,
                job_type,
                skill,
            } => self.on_apply_filters(&level, &job_type, &skill),
            ViewEvent::Sort(sort) => self.on_sort(sort),
            ViewEvent::Select(id) => {
                // Misses are already logged; nothing else observes them.
                let _ = self.on_select(&id);
            }
            ViewEvent::Back => self.on_back(),
        }
    }

    pub fn on_load_result(&mut self, result: Result<Vec<JobRecord>, LoadError>) {
        match result {
            Ok(records) => self.on_load_complete(records),
            Err(err) => self.on_load_failed(err),
        }
    }

    pub fn on_load_complete(&mut self, records: Vec<JobRecord>) {
        if self.phase != LoadPhase::Pending {
            warn!(phase = ?self.phase, "ignoring repeated job load");
            return;
        }

        self.store.load(records);
        self.phase = LoadPhase::Ready;

        let options = FilterOptions::from_observed(
            self.store.distinct_values(FilterField::Level),
            self.store.distinct_values(FilterField::Type),
            self.store.distinct_values(FilterField::Skill),
        );
        self.surface.show_filter_options(&options);
        self.surface.show_sort_options(&SORT_OPTIONS);

        self.filter = FilterCriteria::default();
        self.sort = SortCriteria::None;
        self.state = ViewState::List;
        self.render_list();
    }

    /// Terminal: the store stays empty and no further event is honoured.
    pub fn on_load_failed(&mut self, err: LoadError) {
        if self.phase != LoadPhase::Pending {
            warn!(phase = ?self.phase, error = %err, "ignoring late load failure");
            return;
        }

        warn!(error = %err, "job data failed to load");
        self.store.clear();
        self.phase = LoadPhase::Failed(err);
        self.state = ViewState::List;
        self.surface
            .show_panel(Panel::List(ListPanel::LoadFailed(LOAD_FAILED.to_string())));
    }

    pub fn on_apply_filters(&mut self, level: &str, job_type: &str, skill: &str) {
        self.filter = FilterCriteria::from_selections(level, job_type, skill);
        self.render_list_if_visible();
    }

    pub fn on_sort(&mut self, sort: SortCriteria) {
        self.sort = sort;
        self.render_list_if_visible();
    }

    /// Only honoured from the list; a select while a detail is visible is
    /// ignored and leaves the current detail in place.
    pub fn on_select(&mut self, id: &JobId) -> Result<(), LookupMiss> {
        if self.phase != LoadPhase::Ready {
            return Err(LookupMiss(id.clone()));
        }
        if let ViewState::Detail(current) = &self.state {
            debug!(
                job_no = %id,
                current = %current,
                "ignoring select while detail is visible"
            );
            return Ok(());
        }
        let Some(record) = self.store.find_by_id(id) else {
            warn!(job_no = %id, "selected job is not in the store; staying on the list");
            return Err(LookupMiss(id.clone()));
        };

        let panel = DetailPanel::from_record(record);
        self.state = ViewState::Detail(id.clone());
        self.surface.show_panel(Panel::Detail(panel));
        Ok(())
    }

    /// Returns to the list using the criteria active now, not the load-time
    /// defaults.
    pub fn on_back(&mut self) {
        if self.phase != LoadPhase::Ready {
            return;
        }
        self.state = ViewState::List;
        self.render_list();
    }

    /// Re-issues the render for the current state.
    pub fn refresh(&mut self) {
        match (&self.phase, &self.state) {
            (LoadPhase::Pending, _) => {}
            (LoadPhase::Failed(_), _) => self
                .surface
                .show_panel(Panel::List(ListPanel::LoadFailed(LOAD_FAILED.to_string()))),
            (LoadPhase::Ready, ViewState::List) => self.render_list(),
            (LoadPhase::Ready, ViewState::Detail(id)) => {
                let panel = match self.store.find_by_id(id) {
                    Some(record) => DetailPanel::from_record(record),
                    None => {
                        warn!(job_no = %id, "selected job vanished; showing empty detail");
                        DetailPanel::vacant(id.clone())
                    }
                };
                self.surface.show_panel(Panel::Detail(panel));
            }
        }
    }

    /// Filtered and sorted records under the current criteria.
    pub fn view_sequence(&self) -> Vec<&JobRecord> {
        self.store.query(&self.filter, self.sort)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> SortCriteria {
        self.sort
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn render_list_if_visible(&mut self) {
        match &self.state {
            ViewState::List => self.render_list(),
            ViewState::Detail(id) => {
                debug!(job_no = %id, "criteria stored while detail is visible");
            }
        }
    }

    fn render_list(&mut self) {
        let panel = ListPanel::from_view(&self.store.query(&self.filter, self.sort));
        debug!(
            filter = ?self.filter,
            sort = %self.sort,
            rows = panel.job_ids().len(),
            "rendering job list"
        );
        self.surface.show_panel(Panel::List(panel));
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
