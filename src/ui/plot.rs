use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::ColorMap;
use crate::data::filter::{BreakdownMode, ChartData, OutcomeBreakdown, ScatterPoint};
use crate::data::model::SiteSelection;
use crate::state::AppState;

/// Angular resolution of pie arcs, in radians.
const ARC_STEP: f64 = 0.03;
/// Radius of the hole in the middle of the pie, relative to the pie.
const DONUT_HOLE: f64 = 0.3;
/// Scatter marker radius range, in points.
const MARKER_RADIUS: (f32, f32) = (3.0, 12.0);

// ---------------------------------------------------------------------------
// Titles and placeholders
// ---------------------------------------------------------------------------

pub fn breakdown_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::AllSites => "Total Successful Launches by Site".to_string(),
        SiteSelection::Site(site) => format!("Total Success vs Failure for site {site}"),
    }
}

pub fn breakdown_placeholder(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::AllSites => "No successful launches for All Sites".to_string(),
        SiteSelection::Site(site) => format!("No data for {site}"),
    }
}

pub fn scatter_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::AllSites => "Payload vs Success for all sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs Success for {site}"),
    }
}

pub const SCATTER_PLACEHOLDER: &str = "No data for selected filters";

fn placeholder(ui: &mut Ui, height: f32, text: &str) {
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(text).size(20.0).color(Color32::GRAY));
        });
    });
}

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// `(start, end)` angle of each slice in radians, clockwise from 12 o'clock.
/// Zero counts get an empty span.
pub fn slice_angles(counts: &[usize]) -> Vec<(f64, f64)> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![(0.0, 0.0); counts.len()];
    }
    let mut start = 0.0;
    counts
        .iter()
        .map(|&c| {
            let end = start + TAU * c as f64 / total as f64;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

fn on_circle(angle: f64, radius: f64) -> [f64; 2] {
    [radius * angle.sin(), radius * angle.cos()]
}

/// Wedge outline between radius `inner` and 1, as convex polygons.
///
/// A solid wedge (`inner == 0`) is split into pieces of at most a quarter
/// turn; a ring segment is split into one quad per arc step.
pub fn wedge_polygons(start: f64, end: f64, inner: f64) -> Vec<Vec<[f64; 2]>> {
    let mut pieces = Vec::new();
    if inner > 0.0 {
        let steps = ((end - start) / ARC_STEP).ceil() as usize;
        for i in 0..steps {
            let a0 = start + (end - start) * i as f64 / steps as f64;
            let a1 = start + (end - start) * (i + 1) as f64 / steps as f64;
            pieces.push(vec![
                on_circle(a0, 1.0),
                on_circle(a1, 1.0),
                on_circle(a1, inner),
                on_circle(a0, inner),
            ]);
        }
        return pieces;
    }

    let mut from = start;
    while end - from > 1e-9 {
        let to = (from + FRAC_PI_2).min(end);
        let steps = ((to - from) / ARC_STEP).ceil().max(1.0) as usize;
        let mut outline = Vec::with_capacity(steps + 2);
        outline.push([0.0, 0.0]);
        for i in 0..=steps {
            outline.push(on_circle(from + (to - from) * i as f64 / steps as f64, 1.0));
        }
        pieces.push(outline);
        from = to;
    }
    pieces
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the outcome breakdown as a donut with percentage labels.
pub fn outcome_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let selection = &state.controls.selected_site;
    ui.strong(breakdown_title(selection));

    let breakdown = match &state.charts.breakdown {
        ChartData::Ready(b) => b,
        ChartData::Empty => {
            placeholder(ui, height, &breakdown_placeholder(selection));
            return;
        }
    };

    let colors = match breakdown.mode {
        BreakdownMode::SuccessesBySite => &state.site_colors,
        BreakdownMode::SiteOutcomes(_) => &state.outcome_colors,
    };

    Plot::new("outcome_pie")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            draw_pie(plot_ui, breakdown, colors);
        });
}

fn draw_pie(plot_ui: &mut egui_plot::PlotUi, breakdown: &OutcomeBreakdown, colors: &ColorMap) {
    let counts: Vec<usize> = breakdown.slices.iter().map(|s| s.count).collect();
    let total = breakdown.total() as f64;

    for (slice, (start, end)) in breakdown.slices.iter().zip(slice_angles(&counts)) {
        if slice.count == 0 {
            continue;
        }
        let color = colors.color_for(&slice.label);
        let name = format!("{} ({})", slice.label, slice.count);

        for outline in wedge_polygons(start, end, DONUT_HOLE) {
            let polygon = Polygon::new(PlotPoints::from(outline))
                .name(&name)
                .fill_color(color)
                .stroke(Stroke::new(0.5, color));
            plot_ui.polygon(polygon);
        }

        let [x, y] = on_circle((start + end) / 2.0, 0.65);
        let share = 100.0 * slice.count as f64 / total;
        plot_ui.text(Text::new(
            PlotPoint::new(x, y),
            RichText::new(format!("{share:.1}%")).color(Color32::WHITE).strong(),
        ));
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload mass (x) against outcome class (y), coloured by booster
/// version and sized by payload mass.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let selection = &state.controls.selected_site;
    ui.strong(scatter_title(selection));

    let points = match &state.charts.scatter {
        ChartData::Ready(p) => p,
        ChartData::Empty => {
            placeholder(ui, height, SCATTER_PLACEHOLDER);
            return;
        }
    };

    let slider = state.slider();
    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(slider.min)
        .include_x(slider.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter({
            let hover_points = points.clone();
            move |name, value| {
                nearest_point(&hover_points, name, value.x, value.y)
                    .map(hover_label)
                    .unwrap_or_default()
            }
        })
        .show(ui, |plot_ui| {
            // One item per point so each marker can carry its own size;
            // items sharing a booster name share one legend entry.
            for (booster, series) in group_by_booster(points) {
                let color = state.booster_colors.color_for(booster);
                for p in series {
                    plot_ui.points(
                        Points::new(vec![[p.payload_mass_kg, class_value(p)]])
                            .name(booster)
                            .color(color)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(marker_radius(p.payload_mass_kg, slider.max)),
                    );
                }
            }
        });
}

fn class_value(p: &ScatterPoint) -> f64 {
    if p.outcome_class {
        1.0
    } else {
        0.0
    }
}

/// Marker radius growing with payload mass, relative to `max_kg`.
pub fn marker_radius(kg: f64, max_kg: f64) -> f32 {
    let (small, large) = MARKER_RADIUS;
    let share = if max_kg > 0.0 {
        (kg / max_kg).clamp(0.0, 1.0)
    } else {
        0.0
    };
    small + (large - small) * share.sqrt() as f32
}

/// The point of series `booster` closest to the hovered position.
///
/// Only points on the hovered class row are candidates.
pub fn nearest_point<'a>(
    points: &'a [ScatterPoint],
    booster: &str,
    x: f64,
    y: f64,
) -> Option<&'a ScatterPoint> {
    if booster.is_empty() {
        return None;
    }
    let class = y >= 0.5;
    points
        .iter()
        .filter(|p| p.booster_version == booster && p.outcome_class == class)
        .min_by(|a, b| {
            let da = (a.payload_mass_kg - x).abs();
            let db = (b.payload_mass_kg - x).abs();
            da.total_cmp(&db)
        })
}

pub fn hover_label(p: &ScatterPoint) -> String {
    format!(
        "{}\nLaunch site: {}\nPayload: {:.0} kg\nclass: {}",
        p.booster_version,
        p.launch_site,
        p.payload_mass_kg,
        u8::from(p.outcome_class)
    )
}

/// Points grouped by booster version, groups in first-seen order.
pub fn group_by_booster(points: &[ScatterPoint]) -> Vec<(&str, Vec<&ScatterPoint>)> {
    let mut groups: Vec<(&str, Vec<&ScatterPoint>)> = Vec::new();
    for p in points {
        match groups.iter_mut().find(|(b, _)| *b == p.booster_version) {
            Some((_, series)) => series.push(p),
            None => groups.push((p.booster_version.as_str(), vec![p])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_angles_cover_full_turn() {
        let spans = slice_angles(&[1, 1, 2]);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].0, 0.0);
        assert!((spans[1].0 - TAU / 4.0).abs() < 1e-12);
        assert!((spans[2].1 - TAU).abs() < 1e-12);
    }

    #[test]
    fn zero_count_slice_has_no_span() {
        let spans = slice_angles(&[3, 0]);
        assert!((spans[1].1 - spans[1].0).abs() < 1e-12);
        assert!(wedge_polygons(spans[1].0, spans[1].1, 0.0).is_empty());
        assert!(wedge_polygons(spans[1].0, spans[1].1, DONUT_HOLE).is_empty());
        assert_eq!(slice_angles(&[0, 0]), vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn full_circle_wedge_is_split_into_quarters() {
        let pieces = wedge_polygons(0.0, TAU, 0.0);
        assert_eq!(pieces.len(), 4);
        for outline in &pieces {
            assert_eq!(outline[0], [0.0, 0.0]);
            let [x, y] = outline[1];
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn donut_segments_stay_off_the_hole() {
        let pieces = wedge_polygons(0.0, FRAC_PI_2, DONUT_HOLE);
        assert!(pieces.len() > 1);
        for quad in &pieces {
            assert_eq!(quad.len(), 4);
            let r = |[x, y]: [f64; 2]| (x * x + y * y).sqrt();
            assert!((r(quad[0]) - 1.0).abs() < 1e-12);
            assert!((r(quad[1]) - 1.0).abs() < 1e-12);
            assert!((r(quad[2]) - DONUT_HOLE).abs() < 1e-12);
            assert!((r(quad[3]) - DONUT_HOLE).abs() < 1e-12);
        }
        let last = pieces.last().unwrap();
        assert!((last[1][0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn marker_radius_grows_with_payload() {
        assert_eq!(marker_radius(0.0, 10_000.0), MARKER_RADIUS.0);
        assert_eq!(marker_radius(10_000.0, 10_000.0), MARKER_RADIUS.1);
        assert_eq!(marker_radius(20_000.0, 10_000.0), MARKER_RADIUS.1);
        assert!(marker_radius(2_000.0, 10_000.0) < marker_radius(6_000.0, 10_000.0));
        assert_eq!(marker_radius(500.0, 0.0), MARKER_RADIUS.0);
    }

    fn point(kg: f64, class: bool, booster: &str, site: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: kg,
            outcome_class: class,
            booster_version: booster.to_string(),
            launch_site: site.to_string(),
        }
    }

    #[test]
    fn hover_picks_nearest_point_of_series() {
        let points = vec![
            point(1000.0, true, "FT", "KSC LC-39A"),
            point(1100.0, false, "FT", "CCAFS LC-40"),
            point(1050.0, true, "B4", "VAFB SLC-4E"),
            point(4000.0, true, "FT", "CCAFS SLC-40"),
        ];
        let hit = nearest_point(&points, "FT", 1080.0, 1.0).unwrap();
        assert_eq!(hit.launch_site, "KSC LC-39A");
        let hit = nearest_point(&points, "FT", 1080.0, 0.0).unwrap();
        assert_eq!(hit.launch_site, "CCAFS LC-40");
        let hit = nearest_point(&points, "FT", 3500.0, 0.98).unwrap();
        assert_eq!(hit.launch_site, "CCAFS SLC-40");
        assert!(nearest_point(&points, "", 1000.0, 1.0).is_none());
        assert!(nearest_point(&points, "v1.0", 1000.0, 1.0).is_none());
    }

    #[test]
    fn hover_label_names_launch_site() {
        let label = hover_label(&point(2534.0, false, "F9 v1.1", "VAFB SLC-4E"));
        assert_eq!(
            label,
            "F9 v1.1\nLaunch site: VAFB SLC-4E\nPayload: 2534 kg\nclass: 0"
        );
    }

    #[test]
    fn titles_follow_selection() {
        let all = SiteSelection::AllSites;
        let one = SiteSelection::Site("VAFB SLC-4E".into());
        assert_eq!(breakdown_title(&all), "Total Successful Launches by Site");
        assert_eq!(
            breakdown_title(&one),
            "Total Success vs Failure for site VAFB SLC-4E"
        );
        assert_eq!(breakdown_placeholder(&one), "No data for VAFB SLC-4E");
        assert_eq!(scatter_title(&all), "Payload vs Success for all sites");
    }

    #[test]
    fn groups_points_by_booster() {
        let p = |kg: f64, booster: &str| ScatterPoint {
            payload_mass_kg: kg,
            outcome_class: true,
            booster_version: booster.to_string(),
            launch_site: "A".to_string(),
        };
        let points = vec![p(1.0, "FT"), p(2.0, "B4"), p(3.0, "FT")];
        let groups = group_by_booster(&points);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "FT");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "B4");
    }
}
