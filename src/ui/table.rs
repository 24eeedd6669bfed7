use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{ChartData, FAILURE_LABEL, SUCCESS_LABEL};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Tabular view of the records currently plotted in the scatter.
pub fn filtered_records(ui: &mut Ui, state: &AppState) {
    let points = match &state.charts.scatter {
        ChartData::Ready(p) => p,
        ChartData::Empty => {
            ui.label("No records match the current filters.");
            return;
        }
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .max_scroll_height(240.0)
        .header(20.0, |mut header| {
            for title in ["Launch Site", "Payload Mass (kg)", "Booster Version", "Outcome"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, points.len(), |mut row| {
                let p = &points[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(&p.launch_site);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.0}", p.payload_mass_kg));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(&p.booster_version)
                            .color(state.booster_colors.color_for(&p.booster_version)),
                    );
                });
                row.col(|ui: &mut Ui| {
                    let label = if p.outcome_class { SUCCESS_LABEL } else { FAILURE_LABEL };
                    ui.label(RichText::new(label).color(state.outcome_colors.color_for(label)));
                });
            });
        });
}
