use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use job_core::{LoadPhase, ViewController, ViewEvent, ViewState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::panels;
use crate::ui::surface::{GuiSurface, Selections};

pub struct JobBoardApp {
    controller: ViewController<GuiSurface>,
    ui_rx: Receiver<UiEvent>,
    selections: Selections,
    status: String,
    load_error: Option<UiError>,
}

impl JobBoardApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        data_source: String,
    ) -> Self {
        let mut status = format!("Loading jobs from {data_source}");
        dispatch_backend_command(
            &cmd_tx,
            BackendCommand::LoadJobs { data_source },
            &mut status,
        );

        Self {
            controller: ViewController::new(GuiSurface::default()),
            ui_rx,
            selections: Selections::default(),
            status,
            load_error: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::JobsLoaded(result) => {
                    if let Err(err) = &result {
                        let ui_error = UiError::from_load_error(err);
                        self.status = ui_error.status_text();
                        self.load_error = Some(ui_error);
                    }
                    self.controller.handle(ViewEvent::Loaded(result));
                    if self.controller.phase() == &LoadPhase::Ready {
                        self.selections = Selections::default();
                        self.status = format!("{} jobs loaded", self.controller.store().len());
                    }
                }
            }
        }
    }

    fn apply_view_events(&mut self, events: Vec<ViewEvent>) {
        for event in events {
            self.controller.handle(event);
        }
        if self.load_error.is_none() && self.controller.phase() == &LoadPhase::Ready {
            self.status = match self.controller.state() {
                ViewState::List => format!(
                    "{} of {} jobs shown",
                    self.controller.view_sequence().len(),
                    self.controller.store().len()
                ),
                ViewState::Detail(job_no) => format!("Job {job_no}"),
            };
        }
    }
}

impl eframe::App for JobBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut events = Vec::new();
        egui::TopBottomPanel::top("job_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::show_controls(
                ui,
                self.controller.surface(),
                &mut self.selections,
                &mut events,
            );
            ui.add_space(4.0);
        });
        egui::TopBottomPanel::bottom("job_status").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::show_panel(ui, self.controller.surface().panel.as_ref(), &mut events);
        });

        if !events.is_empty() {
            self.apply_view_events(events);
            ctx.request_repaint();
        }
    }
}
