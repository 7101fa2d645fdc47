//! UI layer for the desktop GUI: app shell, panels, and the render surface model.

pub mod app;
pub mod panels;
pub mod surface;

pub use app::JobBoardApp;
