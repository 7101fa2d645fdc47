//! Bridge between the UI thread and the background worker that performs the
//! one asynchronous operation: loading the job payload.

pub mod commands;
pub mod runtime;
