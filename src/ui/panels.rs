use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the site dropdown and payload range control.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            site_dropdown(ui, state);
            ui.add_space(8.0);
            payload_range(ui, state);
            ui.add_space(8.0);

            if ui.button("Reset").clicked() {
                state.reset_controls();
            }

            ui.separator();
            site_summary(ui, state);
        });
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch site");

    let current = state.controls.selected_site.clone();
    let mut picked: Option<SiteSelection> = None;

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current.is_all(), SiteSelection::AllSites.to_string())
                .clicked()
            {
                picked = Some(SiteSelection::AllSites);
            }
            for site in state.dataset.sites() {
                if ui
                    .selectable_label(current.site() == Some(site.as_str()), site)
                    .clicked()
                {
                    picked = Some(SiteSelection::Site(site.clone()));
                }
            }
        });

    if let Some(selection) = picked {
        state.select_site(selection);
    }
}

fn payload_range(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Payload range (kg)");

    let slider = *state.slider();
    let mut low = state.controls.payload_range.low();
    let mut high = state.controls.payload_range.high();

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .suffix(" kg")
                .text("from"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .suffix(" kg")
                .text("to"),
        )
        .changed();

    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }

    let (min, max) = state.dataset.payload_bounds();
    ui.label(
        RichText::new(format!("Dataset spans {min:.0}–{max:.0} kg"))
            .small()
            .color(Color32::GRAY),
    );
}

fn site_summary(ui: &mut Ui, state: &AppState) {
    ui.strong("Sites");
    for (site, color) in state.site_colors.legend_entries() {
        let launches = state
            .dataset
            .records()
            .iter()
            .filter(|r| r.launch_site == site)
            .count();
        ui.label(RichText::new(format!("{site}  ({launches})")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}: {} launches, {} in scatter",
            state
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            state.dataset.len(),
            state.visible_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
