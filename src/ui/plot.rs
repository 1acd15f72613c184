use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot, Points};

use crate::color::ColorMap;
use crate::data::summary::DashboardSummary;
use crate::text::{format_count, format_mean, DisplayText};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// Total, mean and busiest day, side by side.
pub fn metrics_row(ui: &mut Ui, summary: &DashboardSummary, text: &DisplayText) {
    let mean = summary
        .mean_rentals_per_day
        .map(format_mean)
        .unwrap_or_else(|| text.no_data.to_string());

    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], text.total_label, &format_count(summary.total_rentals), None);
        metric(&mut cols[1], text.mean_label, &mean, None);
        match &summary.peak_day {
            Some(peak) => metric(
                &mut cols[2],
                text.peak_label,
                &format_count(u64::from(peak.total_rentals)),
                Some(peak.date_label().as_str()),
            ),
            None => metric(&mut cols[2], text.peak_label, text.no_data, None),
        }
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str, detail: Option<&str>) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).size(26.0).strong());
        if let Some(detail) = detail {
            ui.label(RichText::new(detail).color(Color32::LIGHT_GREEN));
        }
    });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Axis titles and the placeholder for an empty series.
pub struct ChartLabels<'a> {
    pub x_axis: &'a str,
    pub y_axis: &'a str,
    pub no_data: &'a str,
}

/// Vertical bars, one per `(label, value)`, coloured by label.
pub fn bar_chart(
    ui: &mut Ui,
    id: &str,
    series: &[(&'static str, u64)],
    colors: &ColorMap,
    labels: &ChartLabels<'_>,
) {
    if series.is_empty() {
        no_data(ui, labels.no_data);
        return;
    }

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, &(label, value))| {
            Bar::new(i as f64, value as f64)
                .name(label)
                .fill(colors.color_for(label))
                .width(0.7)
        })
        .collect();

    let tick_labels: Vec<&'static str> = series.iter().map(|(label, _)| *label).collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(labels.x_axis)
        .y_axis_label(labels.y_axis)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            tick_labels
                .get(index as usize)
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(labels.y_axis));
        });
}

/// Scatter of `[x, y]` points.
pub fn scatter_chart(ui: &mut Ui, id: &str, points: &[[f64; 2]], labels: &ChartLabels<'_>) {
    if points.is_empty() {
        no_data(ui, labels.no_data);
        return;
    }

    let points = Points::new(points.to_vec())
        .radius(3.0)
        .color(Color32::from_rgba_unmultiplied(46, 160, 67, 150))
        .name(labels.y_axis);

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(labels.x_axis)
        .y_axis_label(labels.y_axis)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });
}

fn no_data(ui: &mut Ui, text: &str) {
    ui.add_sized(
        [ui.available_width(), 60.0],
        egui::Label::new(RichText::new(text).italics().color(Color32::GRAY)),
    );
}
