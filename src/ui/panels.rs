use std::fmt;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{FilterState, Selector};
use crate::data::model::{DayCategory, Season, Year};
use crate::state::{AppState, StatusMessage};
use crate::text::format_count;

// ---------------------------------------------------------------------------
// Left side panel – selectors
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let text = state.text.clone();

    ui.heading(text.filters_heading);
    ui.separator();

    let mut filters = state.filters;
    selector_combo(ui, "year", text.year_label, text.all_option, &mut filters.year, Year::ALL);
    selector_combo(
        ui,
        "season",
        text.season_label,
        text.all_option,
        &mut filters.season,
        Season::ALL,
    );
    selector_combo(
        ui,
        "day_type",
        text.day_type_label,
        text.all_option,
        &mut filters.day_type,
        DayCategory::ALL,
    );

    ui.add_space(8.0);
    if ui
        .add_enabled(!filters.is_unrestricted(), egui::Button::new(text.reset_button))
        .clicked()
    {
        filters = FilterState::default();
    }

    // One recomputation pass if anything changed.
    state.set_filters(filters);

    if !state.summary.notices.is_empty() {
        ui.separator();
        for notice in &state.summary.notices {
            ui.label(RichText::new(text.notice(*notice)).color(Color32::YELLOW));
        }
    }
}

/// A labelled combo box over "All" plus every value.
fn selector_combo<T>(
    ui: &mut Ui,
    id: &str,
    label: &str,
    all_option: &str,
    current: &mut Selector<T>,
    values: &[T],
) where
    T: Copy + PartialEq + fmt::Display,
{
    let option_text = |selector: &Selector<T>| match selector {
        Selector::All => all_option.to_string(),
        Selector::Only(value) => value.to_string(),
    };

    ui.strong(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(option_text(&*current))
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            for option in Selector::options(values) {
                let text = option_text(&option);
                ui.selectable_value(current, option, text);
            }
        });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button(state.text.export_button).clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} / {} days, {} / {} hours",
            format_count(state.summary.daily_rows as u64),
            format_count(state.context.daily.len() as u64),
            format_count(state.summary.hourly_rows as u64),
            format_count(state.context.hourly.len() as u64),
        ));

        match &state.status_message {
            Some(StatusMessage::Info(msg)) => {
                ui.separator();
                ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
            }
            Some(StatusMessage::Error(msg)) => {
                ui.separator();
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export summary")
        .set_file_name("rental-summary.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match crate::export::export_summary(&state.summary, &path) {
            Ok(()) => {
                log::info!("Exported summary for {} to {}", state.filters, path.display());
                state.status_message = Some(StatusMessage::Info(format!(
                    "Saved {}",
                    path.display()
                )));
            }
            Err(e) => {
                log::error!("Failed to export summary: {e:#}");
                state.status_message = Some(StatusMessage::Error(format!("Error: {e:#}")));
            }
        }
    }
}
