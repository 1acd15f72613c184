use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::DailyRecord;
use crate::text::format_count;

const ROW_HEIGHT: f32 = 18.0;

/// Scrollable listing of the filtered daily rows.
pub fn daily_table(ui: &mut Ui, rows: &[&DailyRecord], headers: &[&str; 6]) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(320.0)
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(70.0), 4)
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(*title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let record = rows[row.index()];
                row.col(|ui| {
                    ui.label(record.date.format("%Y-%m-%d").to_string());
                });
                row.col(|ui| {
                    ui.label(record.season.label());
                });
                row.col(|ui| {
                    ui.label(record.weather_situation.label());
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{:.0}% ({})",
                        record.humidity, record.humidity_category
                    ));
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", record.temperature));
                });
                row.col(|ui| {
                    ui.label(format_count(u64::from(record.total_rentals)));
                });
            });
        });
}
