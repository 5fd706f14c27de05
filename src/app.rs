use std::time::Duration;

use eframe::egui;

use crate::config::Config;
use crate::data::model::MapFocus;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct QuakeViewerApp {
    pub state: AppState,
    /// Focus last pushed into the map plot.
    applied_focus: Option<MapFocus>,
}

impl QuakeViewerApp {
    /// Create the app and start downloading the configured feed.
    pub fn new(config: Config) -> Self {
        let mut state = AppState::new(config);
        state.start_fetch();
        Self {
            state,
            applied_focus: None,
        }
    }
}

impl eframe::App for QuakeViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_fetch();
        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters + histogram ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: event list ----
        egui::TopBottomPanel::bottom("event_table")
            .default_height(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::event_table(ui, &self.state);
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.events.is_empty() && self.state.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }
            plot::quake_map(ui, &self.state.result, &mut self.applied_focus);
        });
    }
}
