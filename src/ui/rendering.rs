//! Drawing the constellation: edges, memory discs, halos, and the HUD.
//!
//! Everything here consumes the depth-ordered [`FramePass`] produced by the
//! scene core; no projection math happens at this layer.

use super::state::ConstellationApp;
use crate::constants::{HALO_PADDING, PULSE_THRESHOLD};
use crate::scene::FramePass;
use crate::types::{EdgeKind, MemoryNode};
use eframe::egui;

/// Depth at which drawn elements reach their dimmest.
const FADE_DEPTH: f32 = 600.0;

/// Dimming factor applied to drawn elements by view-space depth. Nearby
/// elements draw at full intensity; far ones fade but never vanish.
fn depth_fade(depth: f32) -> f32 {
    (1.0 - depth / FADE_DEPTH).clamp(0.35, 1.0)
}

/// A memory's stored `[r, g, b]` as an egui color. The data model stays
/// egui-free; the conversion lives here where the color is consumed.
fn memory_color(node: &MemoryNode) -> egui::Color32 {
    egui::Color32::from_rgb(node.color[0], node.color[1], node.color[2])
}

/// Stroke color for an edge of the given kind, before depth fading.
fn edge_color(kind: EdgeKind) -> egui::Color32 {
    match kind {
        EdgeKind::Explicit => egui::Color32::from_rgb(230, 190, 90),
        EdgeKind::Temporal => egui::Color32::from_rgb(110, 160, 230),
        EdgeKind::Semantic => egui::Color32::from_rgb(180, 120, 230),
    }
}

impl ConstellationApp {
    /// Paints the current frame onto the canvas rect.
    ///
    /// Edges draw first, then nodes farthest to nearest, so closer discs
    /// occlude farther geometry without a depth buffer. Skips silently when
    /// the viewport is degenerate.
    pub fn draw_scene(&self, painter: &egui::Painter, rect: egui::Rect) {
        let bg = if self.display.dark_mode {
            egui::Color32::from_rgb(10, 12, 24)
        } else {
            egui::Color32::from_rgb(235, 238, 246)
        };
        painter.rect_filled(rect, 0.0, bg);

        let Some(pass) = self.scene.frame() else {
            return;
        };

        let origin = rect.min.to_vec2();
        self.draw_edges(painter, origin, &pass);
        self.draw_nodes(painter, origin, &pass);

        if self.display.show_hud {
            self.draw_hud(painter, rect);
        }
    }

    fn draw_edges(&self, painter: &egui::Painter, origin: egui::Vec2, pass: &FramePass) {
        for edge in &pass.edges {
            let color = edge_color(edge.kind).gamma_multiply(depth_fade(edge.depth) * 0.8);
            painter.line_segment(
                [
                    egui::pos2(edge.from.0, edge.from.1) + origin,
                    egui::pos2(edge.to.0, edge.to.1) + origin,
                ],
                egui::Stroke::new(edge.width, color),
            );
        }
    }

    fn draw_nodes(&self, painter: &egui::Painter, origin: egui::Vec2, pass: &FramePass) {
        let hovered = self.scene.hovered_id();
        let selected = self.scene.selected_id();
        let pulse = self.scene.pulse_phase();

        for projected in &pass.nodes {
            let Some(node) = self.scene.node(projected.id) else {
                continue;
            };
            let center = egui::pos2(projected.pos.0, projected.pos.1) + origin;
            let fade = depth_fade(projected.depth);
            let fill = memory_color(node).gamma_multiply(fade);

            painter.circle_filled(center, projected.radius, fill);

            // Significant memories breathe on the shared clock.
            if node.significance > PULSE_THRESHOLD {
                let ring = projected.radius + 2.0 + (pulse * 0.5 + 0.5) * 3.0;
                painter.circle_stroke(
                    center,
                    ring,
                    egui::Stroke::new(1.0, fill.gamma_multiply(0.6)),
                );
            }

            if selected == Some(projected.id) {
                painter.circle_stroke(
                    center,
                    projected.radius + HALO_PADDING,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(240, 210, 120)),
                );
            } else if hovered == Some(projected.id) {
                painter.circle_stroke(
                    center,
                    projected.radius + HALO_PADDING,
                    egui::Stroke::new(1.5, egui::Color32::from_gray(230).gamma_multiply(fade)),
                );
            }
        }
    }

    /// Small camera and census readout in the canvas corner.
    fn draw_hud(&self, painter: &egui::Painter, rect: egui::Rect) {
        let snap = self.scene.camera_snapshot();
        let text = format!(
            "yaw {:+.2}  pitch {:+.2}  zoom {:.2}x\n{} memories · {} threads",
            snap.yaw,
            snap.pitch,
            snap.zoom,
            self.scene.visible_count(),
            self.scene.edge_count(),
        );
        let color = if self.display.dark_mode {
            egui::Color32::from_gray(180)
        } else {
            egui::Color32::from_gray(80)
        };
        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::monospace(11.0),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemoryKind;

    #[test]
    fn test_memory_color_matches_stored_channels() {
        let node = MemoryNode::new(
            MemoryKind::HumanMemory,
            "content",
            "calm",
            [12, 200, 99],
            0.5,
            chrono::Utc::now(),
        );
        assert_eq!(memory_color(&node), egui::Color32::from_rgb(12, 200, 99));
    }

    #[test]
    fn test_depth_fade_is_clamped_and_monotone() {
        assert_eq!(depth_fade(-100.0), 1.0);
        assert!(depth_fade(200.0) < depth_fade(100.0));
        assert_eq!(depth_fade(10_000.0), 0.35);
    }
}
