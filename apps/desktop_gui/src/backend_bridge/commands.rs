//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    LoadJobs { data_source: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadJobs { .. } => "load_jobs",
        }
    }
}
