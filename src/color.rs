use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Palette generators
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
            to_color32(rgb)
        })
        .collect()
}

/// `n` colours blending from deep purple to yellow, for ordered axes
/// such as hour of day.
pub fn sequential_palette(n: usize) -> Vec<Color32> {
    let start: LinSrgb = Srgb::new(0.27, 0.0, 0.33).into_linear();
    let end: LinSrgb = Srgb::new(0.99, 0.91, 0.14).into_linear();
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let mixed = start.mix(end, t);
            to_color32(Srgb::from_linear(mixed))
        })
        .collect()
}

/// Cool blue and warm red, for two-way comparisons.
pub fn diverging_pair() -> [Color32; 2] {
    [
        Color32::from_rgb(59, 76, 192),
        Color32::from_rgb(180, 4, 38),
    ]
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per category label, so a bar keeps its colour when
/// filters remove its neighbours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(labels: &[&'static str], colors: Vec<Color32>) -> Self {
        let mapping = labels.iter().copied().zip(colors).collect();
        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Distinct hues for an unordered set of labels.
    pub fn categorical(labels: &[&'static str]) -> Self {
        Self::new(labels, generate_palette(labels.len()))
    }

    /// A gradient for ordered labels.
    pub fn sequential(labels: &[&'static str]) -> Self {
        Self::new(labels, sequential_palette(labels.len()))
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}
