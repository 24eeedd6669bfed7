use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site + payload controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("SpaceX Launch Records Dashboard");
            });
            ui.separator();

            let chart_height = (ui.available_height() * 0.45).max(260.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                plot::outcome_pie(ui, &self.state, chart_height);
                ui.add_space(12.0);
                plot::payload_scatter(ui, &self.state, chart_height);
                ui.add_space(12.0);

                egui::CollapsingHeader::new("Filtered records")
                    .default_open(false)
                    .show(ui, |ui| {
                        table::filtered_records(ui, &self.state);
                    });
            });
        });
    }
}
