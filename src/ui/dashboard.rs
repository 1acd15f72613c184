use std::collections::BTreeMap;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::{diverging_pair, ColorMap};
use crate::config::Layout;
use crate::data::model::{DayCategory, HumidityCategory, Month, Season, WeatherSituation};
use crate::state::{AppState, HOUR_LABELS};
use crate::text::DisplayText;
use crate::ui::plot::{bar_chart, metrics_row, scatter_chart, ChartLabels};
use crate::ui::table::daily_table;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the metrics, charts and narratives for the current summary.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let text = &state.text;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new(text.title).size(26.0).strong());

            match state.layout {
                Layout::Overview => {
                    ui.label(text.subtitle);
                    ui.add_space(8.0);
                    metrics_row(ui, &state.summary, text);
                    section(ui, text.hourly_heading);
                    hourly_chart(ui, state);
                    section(ui, text.season_heading);
                    season_chart(ui, state);
                    day_type_question(ui, state);
                    temperature_question(ui, state);
                    breakdowns(ui, state);
                    rows(ui, state);
                }
                Layout::Analysis => {
                    ui.label(text.welcome);
                    section(ui, text.metrics_heading);
                    metrics_row(ui, &state.summary, text);
                    day_type_question(ui, state);
                    temperature_question(ui, state);
                    breakdowns(ui, state);
                    rows(ui, state);
                    ui.add_space(16.0);
                    ui.separator();
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.label(RichText::new(text.footer).small().color(Color32::GRAY));
                    });
                }
            }
        });
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(title);
}

fn labels<'a>(text: &'a DisplayText, x_axis: &'a str) -> ChartLabels<'a> {
    ChartLabels {
        x_axis,
        y_axis: text.rentals_axis,
        no_data: text.no_data,
    }
}

/// Map a grouped sum onto chart bars.
fn series<K: Copy>(sums: &BTreeMap<K, u64>, label: fn(K) -> &'static str) -> Vec<(&'static str, u64)> {
    sums.iter().map(|(k, v)| (label(*k), *v)).collect()
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn hourly_chart(ui: &mut Ui, state: &AppState) {
    let bars: Vec<(&'static str, u64)> = state
        .summary
        .rentals_by_hour
        .iter()
        .map(|(hour, v)| (HOUR_LABELS[usize::from(*hour)], *v))
        .collect();
    bar_chart(
        ui,
        "hourly",
        &bars,
        &state.colors.hour,
        &labels(&state.text, state.text.hour_axis),
    );
}

fn season_chart(ui: &mut Ui, state: &AppState) {
    bar_chart(
        ui,
        "season",
        &series(&state.summary.rentals_by_season, Season::label),
        &state.colors.season,
        &labels(&state.text, state.text.season_axis),
    );
}

fn day_type_question(ui: &mut Ui, state: &AppState) {
    let text = &state.text;
    let summary = &state.summary;

    section(ui, text.day_type_question);
    ui.label(text.day_type_description);
    ui.label(RichText::new(text.day_type_chart_title).strong());
    bar_chart(
        ui,
        "day_type",
        &series(&summary.rentals_by_day_category, DayCategory::label),
        &state.colors.day_category,
        &labels(text, text.day_type_axis),
    );
    ui.label(text.day_type_conclusion(&summary.day_type_comparison));
}

fn temperature_question(ui: &mut Ui, state: &AppState) {
    let text = &state.text;
    let summary = &state.summary;

    section(ui, text.temperature_question);
    ui.label(text.temperature_description);
    ui.label(RichText::new(text.temperature_chart_title).strong());
    scatter_chart(
        ui,
        "temperature",
        &summary.temperature_points,
        &labels(text, text.temperature_axis),
    );
    ui.label(text.temperature_conclusion(summary.temperature_correlation));
}

/// Month, weather, humidity and rider-type charts, collapsed by default.
fn breakdowns(ui: &mut Ui, state: &AppState) {
    let text = &state.text;
    let summary = &state.summary;
    ui.add_space(12.0);

    egui::CollapsingHeader::new(RichText::new(text.month_heading).strong())
        .id_salt("month_breakdown")
        .show(ui, |ui: &mut Ui| {
            bar_chart(
                ui,
                "month",
                &series(&summary.rentals_by_month, Month::label),
                &state.colors.month,
                &labels(text, ""),
            );
        });

    egui::CollapsingHeader::new(RichText::new(text.weather_heading).strong())
        .id_salt("weather_breakdown")
        .show(ui, |ui: &mut Ui| {
            bar_chart(
                ui,
                "weather",
                &series(&summary.rentals_by_weather, WeatherSituation::label),
                &state.colors.weather,
                &labels(text, ""),
            );
        });

    egui::CollapsingHeader::new(RichText::new(text.humidity_heading).strong())
        .id_salt("humidity_breakdown")
        .show(ui, |ui: &mut Ui| {
            bar_chart(
                ui,
                "humidity",
                &series(&summary.rentals_by_humidity, HumidityCategory::label),
                &state.colors.humidity,
                &labels(text, ""),
            );
        });

    egui::CollapsingHeader::new(RichText::new(text.riders_heading).strong())
        .id_salt("rider_breakdown")
        .show(ui, |ui: &mut Ui| {
            let split = summary.rider_split;
            let bars = if split.casual + split.registered == 0 {
                Vec::new()
            } else {
                vec![
                    (text.casual_label, split.casual),
                    (text.registered_label, split.registered),
                ]
            };
            let colors = ColorMap::new(
                &[text.casual_label, text.registered_label],
                diverging_pair().to_vec(),
            );
            bar_chart(ui, "riders", &bars, &colors, &labels(text, ""));
        });
}

/// Collapsed by default; rows are only collected while it is open.
fn rows(ui: &mut Ui, state: &AppState) {
    let text = &state.text;
    egui::CollapsingHeader::new(RichText::new(text.rows_heading).strong())
        .id_salt("filtered_rows")
        .show(ui, |ui: &mut Ui| {
            let daily = state.daily_rows();
            if daily.is_empty() {
                ui.label(RichText::new(text.no_data).italics().color(Color32::GRAY));
            } else {
                daily_table(ui, &daily, &text.table_columns);
            }
        });
}
