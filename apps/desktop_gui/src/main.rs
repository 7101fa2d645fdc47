mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use job_core::load_settings;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::JobBoardApp;

#[derive(Parser, Debug)]
struct Args {
    /// Path or http(s) URL of the job payload; overrides job_board.toml.
    #[arg(long)]
    data_source: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(data_source) = args.data_source {
        settings.data_source = data_source;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            backend_bridge::runtime::launch(cmd_rx, ui_tx, cc.egui_ctx.clone());
            Ok(Box::new(JobBoardApp::new(
                cmd_tx,
                ui_rx,
                settings.data_source,
            )))
        }),
    )
}
