//! The eframe/egui implementation for the GUI.
//!
//! Layout mirrors the flow of the data: latest reading up top, the
//! start/stop toggle, a capacity field with an explicit Apply button,
//! the history chart, and a collapsible debug panel with labeled state
//! fields. When no sensor is available the panel body is a single
//! static message.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::capacity::CapacityEditor;
use crate::controller::{SubscriptionController, SubscriptionState};
use crate::platform::SensorAvailability;

/// Application window state.
pub struct LuxApp {
    controller: SubscriptionController,
    editor: CapacityEditor,
    availability: SensorAvailability,
    sample_rate_hz: f64,
}

impl LuxApp {
    /// Build the window state around an already-configured controller.
    pub fn new(
        controller: SubscriptionController,
        availability: SensorAvailability,
        sample_rate_hz: f64,
    ) -> Self {
        let capacity = controller.buffer().read().capacity();
        Self {
            controller,
            editor: CapacityEditor::new(capacity),
            availability,
            sample_rate_hz,
        }
    }

    fn monitor_panel(&mut self, ui: &mut egui::Ui) {
        let (latest, point_count) = {
            let buffer = self.controller.buffer().read();
            (buffer.latest().map(|s| s.illuminance), buffer.len())
        };

        match latest {
            Some(lux) => ui.label(format!("Illuminance: {:.1} lx", lux)),
            None => ui.label("Illuminance: waiting for samples"),
        };

        let button_text = match self.controller.state() {
            SubscriptionState::Stopped => "Start",
            SubscriptionState::Active => "Stop",
        };
        if ui.button(button_text).clicked() {
            self.controller.toggle();
        }

        ui.horizontal(|ui| {
            ui.label("History capacity:");
            ui.add(egui::TextEdit::singleline(self.editor.pending_mut()).desired_width(60.0));
            if ui.button("Apply").clicked() {
                let buffer = self.controller.buffer();
                self.editor.commit(&mut buffer.write());
            }
        });

        ui.separator();
        if point_count > 0 {
            self.history_plot(ui);
        } else {
            ui.label("No samples yet");
        }

        ui.separator();
        self.debug_panel(ui);
    }

    fn history_plot(&self, ui: &mut egui::Ui) {
        ui.heading("History");
        let points: Vec<[f64; 2]> = {
            let buffer = self.controller.buffer().read();
            buffer
                .samples()
                .enumerate()
                .map(|(i, s)| [i as f64, s.illuminance])
                .collect()
        };
        let line = Line::new(PlotPoints::from_iter(points.iter().copied()));
        Plot::new("illuminance_history")
            .view_aspect(2.0)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }

    fn debug_panel(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Debug")
            .default_open(false)
            .show(ui, |ui| {
                let buffer = self.controller.buffer().read();
                egui::Grid::new("debug_grid").show(ui, |ui| {
                    ui.label("Subscription:");
                    ui.label(match self.controller.state() {
                        SubscriptionState::Stopped => "stopped",
                        SubscriptionState::Active => "active",
                    });
                    ui.end_row();

                    ui.label("Samples buffered:");
                    ui.label(buffer.len().to_string());
                    ui.end_row();

                    ui.label("Capacity:");
                    ui.label(buffer.capacity().to_string());
                    ui.end_row();

                    ui.label("Sample rate:");
                    ui.label(format!("{} Hz", self.sample_rate_hz));
                    ui.end_row();
                });
            });
    }
}

impl eframe::App for LuxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Ambient Light Monitor");
            ui.separator();

            match &self.availability {
                SensorAvailability::Available => self.monitor_panel(ui),
                SensorAvailability::Unavailable { reason } => {
                    ui.label(reason.clone());
                }
            }
        });

        // Request a repaint to ensure the GUI is continuously updated
        ctx.request_repaint();
    }
}
