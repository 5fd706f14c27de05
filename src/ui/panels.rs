use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::MagnitudeBand;
use crate::data::fetch::FeedPeriod;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets, legend, histogram
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Minimum magnitude ----
    ui.strong("Minimum magnitude");
    let mut min_mag = state.criteria.min_magnitude;
    let slider = egui::Slider::new(&mut min_mag, 0.0..=10.0)
        .step_by(0.1)
        .fixed_decimals(1);
    if ui.add(slider).changed() {
        state.set_min_magnitude(min_mag);
    }
    ui.add_space(6.0);

    // ---- Location search ----
    ui.strong("Location");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.location_input).hint_text("e.g. Alaska, Japan"),
    );
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Search").clicked() || submitted {
            state.apply_search();
        }
        if ui.button("Clear").clicked() {
            state.clear_search();
        }
    });

    if let Some(msg) = &state.result.focus.diagnostic {
        ui.label(RichText::new(msg).color(Color32::from_rgb(230, 140, 0)));
    }
    ui.separator();

    // ---- Legend ----
    ui.strong("Magnitude");
    for (label, color) in MagnitudeBand::legend_entries() {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new("●").color(color));
            ui.label(label);
        });
    }
    ui.separator();

    // ---- Histogram ----
    ui.strong("Distribution");
    plot::magnitude_histogram(ui, &state.result.histogram);

    let focus = &state.result.focus;
    ui.small(format!("View: {} zoom {}", focus.center, focus.zoom_level));
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

        let mut period = state.feed_period;
        egui::ComboBox::from_id_salt("feed_period")
            .selected_text(period.label())
            .show_ui(ui, |ui: &mut Ui| {
                for p in FeedPeriod::ALL {
                    ui.selectable_value(&mut period, p, p.label());
                }
            });
        if period != state.feed_period {
            state.feed_period = period;
            state.start_fetch();
        }

        if ui
            .add_enabled(!state.is_loading(), egui::Button::new("Refresh"))
            .clicked()
        {
            state.start_fetch();
        }

        ui.separator();

        if state.is_loading() {
            ui.spinner();
            ui.label("Loading…");
        } else if !state.events.is_empty() {
            ui.label(format!(
                "{} events loaded, {} shown",
                state.events.len(),
                state.result.filtered_events.len()
            ));
        }

        if let Some(msg) = state.status_message() {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – event list
// ---------------------------------------------------------------------------

/// Format epoch milliseconds as a UTC timestamp.
pub fn format_time(time_millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(time_millis)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "–".to_string())
}

/// Table of the currently visible events.
pub fn event_table(ui: &mut Ui, state: &AppState) {
    let events = &state.result.filtered_events;
    if events.is_empty() {
        ui.label("No events to show.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(150.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::remainder().at_least(200.0))
        .column(Column::auto().at_least(70.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Time (UTC)");
            });
            header.col(|ui| {
                ui.strong("Mag");
            });
            header.col(|ui| {
                ui.strong("Place");
            });
            header.col(|ui| {
                ui.strong("Depth (km)");
            });
        })
        .body(|body| {
            body.rows(18.0, events.len(), |mut row| {
                let ev = &events[row.index()];
                row.col(|ui| {
                    ui.label(format_time(ev.time_millis));
                });
                row.col(|ui| {
                    let color = MagnitudeBand::for_magnitude(ev.magnitude).fill();
                    ui.label(RichText::new(format!("{:.1}", ev.magnitude)).color(color));
                });
                row.col(|ui| {
                    let place = ev.place.as_deref().unwrap_or("Unknown location");
                    match &ev.url {
                        Some(url) => {
                            ui.hyperlink_to(place, url);
                        }
                        None => {
                            ui.label(place);
                        }
                    }
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", ev.depth_km));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open earthquake data")
        .add_filter("Supported files", &["geojson", "json", "csv"])
        .add_filter("GeoJSON", &["geojson", "json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
