//! User interface components and rendering logic for the constellation tool.
//!
//! This module contains all the UI-related code including the main
//! application struct, canvas rendering, the toolbar, and the memory detail
//! panel.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main ConstellationApp
//! - `canvas` - Canvas interaction: orbit drag, wheel zoom, hover, clicks
//! - `rendering` - Drawing edges, memory discs, halos, and the HUD

mod canvas;
mod rendering;
mod state;

pub use state::{ConstellationApp, DisplaySettings};

use crate::demo::all_demos;
use crate::types::{ConstellationFilter, MemoryKind, ViewMode};
use eframe::egui;

fn filter_label(filter: ConstellationFilter) -> &'static str {
    match filter {
        ConstellationFilter::All => "All memories",
        ConstellationFilter::ByKind(MemoryKind::HumanMemory) => "Human memories",
        ConstellationFilter::ByKind(MemoryKind::CompanionMemory) => "Companion memories",
        ConstellationFilter::ByKind(MemoryKind::Dream) => "Dreams",
        ConstellationFilter::LinkedOnly => "Linked only",
    }
}

impl eframe::App for ConstellationApp {
    /// Persist the journal and display settings between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string("app_state", json);
            }
            Err(err) => {
                log::error!("failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Lays out the toolbar, the detail side panel, and the canvas, then
    /// keeps the repaint loop running so the auto-orbit and pulse animations
    /// advance.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_scene();

        let visuals = if self.display.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        if self.scene.selected_id().is_some() {
            egui::SidePanel::right("detail_panel")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.draw_detail_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        // The constellation animates even without input.
        ctx.request_repaint();
    }
}

impl ConstellationApp {
    /// Renders the toolbar with demo loading, view options, and relation
    /// toggles.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.menu_button("Load Demo", |ui| {
                for info in all_demos() {
                    if ui.button(info.name).clicked() {
                        self.load_demo(info.kind);
                        ui.close();
                    }
                }
            });

            ui.separator();

            egui::ComboBox::from_id_source("view_mode_combo")
                .selected_text(self.display.view_mode.label())
                .show_ui(ui, |ui| {
                    for mode in [ViewMode::Orbit, ViewMode::Galaxy, ViewMode::Thread] {
                        if ui
                            .selectable_value(&mut self.display.view_mode, mode, mode.label())
                            .clicked()
                        {
                            self.scene.set_view_mode(self.display.view_mode);
                        }
                    }
                });

            egui::ComboBox::from_id_source("filter_combo")
                .selected_text(filter_label(self.display.filter))
                .show_ui(ui, |ui| {
                    for filter in [
                        ConstellationFilter::All,
                        ConstellationFilter::ByKind(MemoryKind::HumanMemory),
                        ConstellationFilter::ByKind(MemoryKind::CompanionMemory),
                        ConstellationFilter::ByKind(MemoryKind::Dream),
                        ConstellationFilter::LinkedOnly,
                    ] {
                        if ui
                            .selectable_value(
                                &mut self.display.filter,
                                filter,
                                filter_label(filter),
                            )
                            .clicked()
                        {
                            self.scene.set_filter(self.display.filter);
                        }
                    }
                });

            ui.separator();

            if ui
                .checkbox(&mut self.display.resolve_options.temporal, "Temporal")
                .changed()
                || ui
                    .checkbox(&mut self.display.resolve_options.semantic, "Semantic")
                    .changed()
            {
                self.scene.set_resolve_options(self.display.resolve_options);
            }

            ui.separator();

            if ui
                .checkbox(&mut self.display.auto_orbit, "Auto-orbit")
                .changed()
            {
                self.scene.set_auto_orbit(self.display.auto_orbit);
            }
            ui.checkbox(&mut self.display.show_hud, "HUD");
            ui.checkbox(&mut self.display.dark_mode, "Dark Mode");

            ui.separator();

            if ui.button("Reset View").clicked() {
                self.scene.reset_camera();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let snap = self.scene.camera_snapshot();
                ui.label(format!("Zoom: {:.0}%", snap.zoom * 100.0));
                ui.label(format!(
                    "{} memories · {} threads",
                    self.scene.visible_count(),
                    self.scene.edge_count()
                ));
            });
        });
    }

    /// Renders the detail panel for the selected memory.
    fn draw_detail_panel(&mut self, ui: &mut egui::Ui) {
        let Some(id) = self.scene.selected_id() else {
            return;
        };
        let Some(node) = self.scene.node(id).cloned() else {
            self.scene.clear_selection();
            return;
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(node.kind.label());
                ui.separator();

                ui.label(format!("Felt: {}", node.emotion));
                ui.label(format!("Significance: {:.0}%", node.significance * 100.0));
                ui.label(format!(
                    "Recorded: {}",
                    node.timestamp.format("%Y-%m-%d %H:%M UTC")
                ));

                ui.separator();
                ui.label(&node.content);

                ui.separator();
                if ui.button("Close").clicked() {
                    self.scene.clear_selection();
                }
            });
    }
}
