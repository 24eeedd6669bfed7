use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (site names, booster versions) to distinct colours.
///
/// Colours follow the order the categories were given in, so a category
/// keeps its colour no matter which subset is currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: HashMap<String, Color32>,
    order: Vec<String>,
}

impl ColorMap {
    pub fn new<S: AsRef<str>>(categories: &[S]) -> Self {
        let palette = generate_palette(categories.len());
        let order: Vec<String> = categories.iter().map(|c| c.as_ref().to_string()).collect();
        let mapping = order.iter().cloned().zip(palette).collect();
        ColorMap { mapping, order }
    }

    /// Fixed colours, used for the Success/Failure pie.
    pub fn from_pairs(pairs: &[(&str, Color32)]) -> Self {
        ColorMap {
            mapping: pairs.iter().map(|(k, c)| (k.to_string(), *c)).collect(),
            order: pairs.iter().map(|(k, _)| k.to_string()).collect(),
        }
    }

    /// Colour for `category`; grey for anything unknown.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries (label → colour) in category order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.order
            .iter()
            .map(|k| (k.clone(), self.color_for(k)))
            .collect()
    }
}
