//! Worker thread owning a tokio runtime; serves UI commands and reports back
//! as UI events.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use job_core::data_source_for;
use shared::error::LoadError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, repaint: egui::Context) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::JobsLoaded(Err(LoadError::unreachable(
                    format!("backend worker startup failure: {err}"),
                ))));
                repaint.request_repaint();
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend command received");
                match cmd {
                    BackendCommand::LoadJobs { data_source } => {
                        let source = data_source_for(&data_source);
                        let _ = ui_tx.try_send(UiEvent::Info(format!(
                            "Loading jobs from {}",
                            source.describe()
                        )));
                        let result = source.fetch().await;
                        if ui_tx.send(UiEvent::JobsLoaded(result)).is_err() {
                            tracing::debug!("ui closed before jobs arrived");
                            return;
                        }
                    }
                }
                repaint.request_repaint();
            }
        });
    });
}
