//! Job board core: the loaded job collection, its derived queries, and the
//! list/detail view controller that turns user events into render
//! instructions.

pub mod config;
pub mod render;
pub mod source;
pub mod store;
pub mod view;

pub use config::{load_settings, Settings};
pub use render::{
    DetailField, DetailPanel, FilterOptions, ListPanel, ListRow, Panel, RenderSurface,
};
pub use source::{data_source_for, DataSource, FileDataSource, HttpDataSource};
pub use store::JobStore;
pub use view::{LoadPhase, ViewController, ViewEvent, ViewState};
