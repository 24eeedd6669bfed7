use super::model::{ControlState, LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

/// Label for the successful side of a single-site breakdown.
pub const SUCCESS_LABEL: &str = "Success";
/// Label for the failed side of a single-site breakdown.
pub const FAILURE_LABEL: &str = "Failure";

// ---------------------------------------------------------------------------
// Chart datasets
// ---------------------------------------------------------------------------

/// Result of a chart query. `Empty` means "no matching records" and must be
/// rendered as a placeholder, never as a blank chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData<T> {
    Empty,
    Ready(T),
}

impl<T> ChartData<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartData::Empty)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartData::Empty => None,
            ChartData::Ready(v) => Some(v),
        }
    }
}

/// Which grouping a breakdown was computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakdownMode {
    /// Successful launches grouped by site.
    SuccessesBySite,
    /// Success vs failure at one site.
    SiteOutcomes(String),
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeBreakdown {
    pub mode: BreakdownMode,
    pub slices: Vec<Slice>,
}

impl OutcomeBreakdown {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// One scatter marker: positioned by (payload, class), coloured by booster.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: bool,
    pub booster_version: String,
    pub launch_site: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(rec: &LaunchRecord) -> Self {
        ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            outcome_class: rec.outcome_class,
            booster_version: rec.booster_version.clone(),
            launch_site: rec.launch_site.clone(),
        }
    }
}

/// Both chart inputs for one control state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub breakdown: ChartData<OutcomeBreakdown>,
    pub scatter: ChartData<Vec<ScatterPoint>>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Pie chart input.
///
/// * All sites → successful launches counted per site (sites without a
///   success are left out).
/// * One site → exactly two slices, `Success` then `Failure`.
///
/// A site that is not in the dataset yields `Empty`.
pub fn compute_outcome_breakdown(
    dataset: &LaunchDataset,
    selected_site: &SiteSelection,
) -> ChartData<OutcomeBreakdown> {
    match selected_site {
        SiteSelection::AllSites => {
            let slices: Vec<Slice> = dataset
                .sites()
                .iter()
                .map(|site| Slice {
                    label: site.clone(),
                    count: dataset
                        .records()
                        .iter()
                        .filter(|r| r.outcome_class && r.launch_site == *site)
                        .count(),
                })
                .filter(|s| s.count > 0)
                .collect();

            if slices.is_empty() {
                return ChartData::Empty;
            }
            ChartData::Ready(OutcomeBreakdown {
                mode: BreakdownMode::SuccessesBySite,
                slices,
            })
        }
        SiteSelection::Site(site) => {
            let (successes, failures) = dataset
                .records()
                .iter()
                .filter(|r| r.launch_site == *site)
                .fold((0usize, 0usize), |(ok, failed), r| {
                    if r.outcome_class {
                        (ok + 1, failed)
                    } else {
                        (ok, failed + 1)
                    }
                });

            if successes + failures == 0 {
                return ChartData::Empty;
            }
            ChartData::Ready(OutcomeBreakdown {
                mode: BreakdownMode::SiteOutcomes(site.clone()),
                slices: vec![
                    Slice {
                        label: SUCCESS_LABEL.to_string(),
                        count: successes,
                    },
                    Slice {
                        label: FAILURE_LABEL.to_string(),
                        count: failures,
                    },
                ],
            })
        }
    }
}

/// Scatter chart input: records inside `payload_range` (both ends
/// inclusive), further restricted to the selected site. Dataset order is
/// preserved.
pub fn compute_payload_scatter(
    dataset: &LaunchDataset,
    selected_site: &SiteSelection,
    payload_range: PayloadRange,
) -> ChartData<Vec<ScatterPoint>> {
    let site = selected_site.site();
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| site.map_or(true, |s| r.launch_site == s))
        .map(ScatterPoint::from)
        .collect();

    if points.is_empty() {
        ChartData::Empty
    } else {
        ChartData::Ready(points)
    }
}

/// Evaluate both charts for one control state.
pub fn compute_charts(dataset: &LaunchDataset, controls: &ControlState) -> ChartSet {
    ChartSet {
        breakdown: compute_outcome_breakdown(dataset, &controls.selected_site),
        scatter: compute_payload_scatter(dataset, &controls.selected_site, controls.payload_range),
    }
}
