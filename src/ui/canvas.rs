//! Canvas interaction and navigation functionality.
//!
//! This module routes pointer input from the egui canvas widget into the
//! scene core and drives the per-frame tick. All positions handed to the
//! scene are local to the canvas rect, so the scene stays ignorant of panel
//! layout.

use super::state::ConstellationApp;
use crate::types::Viewport;
use eframe::egui;

/// Pixels of smooth scroll that count as one wheel tick.
const SCROLL_PIXELS_PER_TICK: f32 = 50.0;

impl ConstellationApp {
    /// Renders the constellation canvas and processes pointer interaction.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        self.scene
            .set_viewport(Viewport::new(rect.width(), rect.height()));

        // Pointer positions go to the scene in canvas-local coordinates.
        let to_local = |pos: egui::Pos2| (pos.x - rect.min.x, pos.y - rect.min.y);

        if response.drag_started() {
            self.scene.begin_drag();
        }
        if response.dragged() {
            let delta = response.drag_delta();
            self.scene.drag_delta(delta.x, delta.y);
        }
        if response.drag_stopped() {
            self.scene.end_drag();
        }

        if let Some(pos) = response.hover_pos() {
            self.scene.pointer_moved(to_local(pos));

            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.scene.wheel(scroll / SCROLL_PIXELS_PER_TICK);
            }
        } else if !self.scene.is_dragging() {
            // Pointer left the canvas; nothing is under it any more.
            self.scene.clear_hover();
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.scene.click(to_local(pos));
            }
        }

        let dt = ui.input(|i| i.stable_dt);
        self.scene.tick(dt);

        self.draw_scene(&painter, rect);

        if let (Some(id), Some(pointer)) = (self.scene.hovered_id(), response.hover_pos()) {
            if let Some(node) = self.scene.node(id) {
                let tooltip = format!(
                    "{}\n{} · {}\n{}",
                    node.kind.label(),
                    node.emotion,
                    node.timestamp.format("%Y-%m-%d %H:%M"),
                    node.content
                );
                egui::Area::new(egui::Id::new("memory_tooltip"))
                    .fixed_pos(pointer + egui::vec2(14.0, 14.0))
                    .order(egui::Order::Tooltip)
                    .show(ui.ctx(), |ui| {
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            ui.set_max_width(280.0);
                            ui.label(tooltip);
                        });
                    });
            }
        }
    }
}
