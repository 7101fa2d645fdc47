//! Drawing for the control bar, the list panel, and the detail panel. Draw
//! functions never touch the controller; they push view events instead.

use eframe::egui;
use job_core::{
    render::{BACK_TO_LIST, JOB_LINK_LABEL, NO_JOBS_FOUND, VIEW_DETAILS},
    DetailPanel, ListPanel, ListRow, Panel, ViewEvent,
};
use shared::domain::FilterField;

use crate::ui::surface::{GuiSurface, Selections};

pub fn show_controls(
    ui: &mut egui::Ui,
    surface: &GuiSurface,
    selections: &mut Selections,
    events: &mut Vec<ViewEvent>,
) {
    ui.horizontal_wrapped(|ui| {
        for field in FilterField::ALL {
            let selected = match field {
                FilterField::Level => &mut selections.level,
                FilterField::Type => &mut selections.job_type,
                FilterField::Skill => &mut selections.skill,
            };
            ui.label(field.key());
            egui::ComboBox::from_id_salt(("job_filter", field.key()))
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for option in surface.filter_options.for_field(field) {
                        ui.selectable_value(selected, option.clone(), option.as_str());
                    }
                });
        }
        if ui.button("Apply filters").clicked() {
            events.push(ViewEvent::ApplyFilters {
                level: selections.level.clone(),
                job_type: selections.job_type.clone(),
                skill: selections.skill.clone(),
            });
        }

        ui.separator();

        ui.label("Sort by");
        egui::ComboBox::from_id_salt("job_sort")
            .selected_text(selections.sort.label())
            .show_ui(ui, |ui| {
                for sort in &surface.sort_options {
                    ui.selectable_value(&mut selections.sort, *sort, sort.label());
                }
            });
        if ui.button("Sort").clicked() {
            events.push(ViewEvent::Sort(selections.sort));
        }
    });
}

pub fn show_panel(ui: &mut egui::Ui, panel: Option<&Panel>, events: &mut Vec<ViewEvent>) {
    match panel {
        None => {
            ui.spinner();
        }
        Some(Panel::List(list)) => show_list(ui, list, events),
        Some(Panel::Detail(detail)) => show_detail(ui, detail, events),
    }
}

fn show_list(ui: &mut egui::Ui, list: &ListPanel, events: &mut Vec<ViewEvent>) {
    match list {
        ListPanel::Rows(rows) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for row in rows {
                        show_row(ui, row, events);
                    }
                });
        }
        ListPanel::NoJobsFound => {
            ui.label(NO_JOBS_FOUND);
        }
        ListPanel::LoadFailed(message) => {
            ui.colored_label(egui::Color32::from_rgb(200, 80, 80), message.as_str());
        }
    }
}

fn show_row(ui: &mut egui::Ui, row: &ListRow, events: &mut Vec<ViewEvent>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(row.summary());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(VIEW_DETAILS).clicked() {
                    events.push(ViewEvent::Select(row.job_no.clone()));
                }
            });
        });
    });
}

fn show_detail(ui: &mut egui::Ui, detail: &DetailPanel, events: &mut Vec<ViewEvent>) {
    if ui.button(BACK_TO_LIST).clicked() {
        events.push(ViewEvent::Back);
    }
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading(detail.title.as_str());
            ui.add_space(6.0);
            for field in &detail.fields {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{}:", field.label)).strong());
                    ui.label(field.value.as_str());
                });
            }
            ui.add_space(6.0);
            if !detail.link.is_empty() {
                ui.hyperlink_to(JOB_LINK_LABEL, &detail.link);
            }
        });
}
