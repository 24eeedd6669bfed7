use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::config::{ColumnNames, Config, SliderConfig};
use crate::data::filter::{compute_charts, ChartSet, FAILURE_LABEL, SUCCESS_LABEL};
use crate::data::loader;
use crate::data::model::{ControlState, LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every control change goes through a method here, which recomputes the
/// chart inputs before returning. Rendering only reads `charts`.
pub struct AppState {
    /// Loaded dataset, shared read-only.
    pub dataset: Arc<LaunchDataset>,

    /// File the dataset came from.
    pub source_path: PathBuf,

    /// Current dropdown / slider values.
    pub controls: ControlState,

    /// Chart inputs for `controls` (cached).
    pub charts: ChartSet,

    /// Colour per launch site (pie, all-sites mode).
    pub site_colors: ColorMap,

    /// Colour per booster version (scatter).
    pub booster_colors: ColorMap,

    /// Fixed Success / Failure colours (pie, single-site mode).
    pub outcome_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    columns: ColumnNames,
    slider: SliderConfig,
}

impl AppState {
    pub fn new(dataset: Arc<LaunchDataset>, source_path: PathBuf, config: &Config) -> Self {
        let controls = initial_controls(&dataset, &config.slider);
        let charts = compute_charts(&dataset, &controls);
        Self {
            site_colors: ColorMap::new(dataset.sites()),
            booster_colors: ColorMap::new(dataset.booster_versions()),
            outcome_colors: ColorMap::from_pairs(&[
                (SUCCESS_LABEL, Color32::from_rgb(0x2c, 0xa0, 0x2c)),
                (FAILURE_LABEL, Color32::from_rgb(0xd6, 0x27, 0x28)),
            ]),
            dataset,
            source_path,
            controls,
            charts,
            status_message: None,
            columns: config.columns.clone(),
            slider: config.slider,
        }
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    /// Swap in a newly loaded dataset and reset the controls to span it.
    pub fn set_dataset(&mut self, dataset: Arc<LaunchDataset>, source_path: PathBuf) {
        self.site_colors = ColorMap::new(dataset.sites());
        self.booster_colors = ColorMap::new(dataset.booster_versions());
        self.controls = initial_controls(&dataset, &self.slider);
        self.dataset = dataset;
        self.source_path = source_path;
        self.status_message = None;
        self.recompute();
    }

    /// Load `path` and switch to it. On failure the current dataset stays
    /// and the error goes to the status line.
    pub fn load_from_path(&mut self, path: &Path) {
        match loader::load_file(path, &self.columns) {
            Ok(dataset) => self.set_dataset(Arc::new(dataset), path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Dropdown changed.
    pub fn select_site(&mut self, selection: SiteSelection) {
        if selection == self.controls.selected_site {
            return;
        }
        self.controls.selected_site = selection;
        self.recompute();
    }

    /// Slider moved. Endpoints are normalised into the slider bounds, so
    /// handles may cross.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let range = PayloadRange::new(low, high).within(self.slider.min, self.slider.max);
        if range == self.controls.payload_range {
            return;
        }
        self.controls.payload_range = range;
        self.recompute();
    }

    /// Back to all sites and the dataset's payload span.
    pub fn reset_controls(&mut self) {
        self.controls = initial_controls(&self.dataset, &self.slider);
        self.recompute();
    }

    /// Number of records currently in the scatter.
    pub fn visible_count(&self) -> usize {
        self.charts.scatter.ready().map_or(0, Vec::len)
    }

    fn recompute(&mut self) {
        self.charts = compute_charts(&self.dataset, &self.controls);
        log::debug!(
            "Recomputed charts for site={} range={}: breakdown_empty={} scatter={}",
            self.controls.selected_site,
            self.controls.payload_range,
            self.charts.breakdown.is_empty(),
            self.visible_count()
        );
    }
}

/// Dataset-spanning controls, narrowed to what the slider can show.
fn initial_controls(dataset: &LaunchDataset, slider: &SliderConfig) -> ControlState {
    let mut controls = ControlState::initial(dataset);
    controls.payload_range = controls.payload_range.within(slider.min, slider.max);
    controls
}
