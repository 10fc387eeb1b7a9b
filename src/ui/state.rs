//! Application state management structures.
//!
//! This module contains the display settings persisted between restarts and
//! the main `ConstellationApp`, which owns the journal data and the live
//! scene core.

use crate::demo::{build_demo, DemoKind};
use crate::edges::ResolveOptions;
use crate::scene::ConstellationScene;
use crate::types::{ConstellationFilter, MemoryLink, MemoryNode, ViewMode};
use serde::{Deserialize, Serialize};

/// Display options the user can toggle from the toolbar.
///
/// These survive restarts; everything transient (camera pose, hover,
/// selection, the animation clock) deliberately does not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Active render strategy
    pub view_mode: ViewMode,
    /// Which nodes are shown
    pub filter: ConstellationFilter,
    /// Which derived relations the resolver computes
    pub resolve_options: ResolveOptions,
    /// Whether the constellation slowly rotates when idle
    pub auto_orbit: bool,
    /// Whether the camera readout overlay is drawn
    pub show_hud: bool,
    /// Whether to use the dark theme
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            filter: ConstellationFilter::default(),
            resolve_options: ResolveOptions::default(),
            auto_orbit: true,
            show_hud: true,
            dark_mode: true,
        }
    }
}

/// The main application structure containing the journal and UI state.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering and interaction logic.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationApp {
    /// The memory records being visualized
    pub nodes: Vec<MemoryNode>,
    /// Explicit links between memories
    pub links: Vec<MemoryLink>,
    /// Persisted display options
    pub display: DisplaySettings,
    /// The live scene core; rebuilt from the journal on startup
    #[serde(skip)]
    pub scene: ConstellationScene,
    /// Whether the scene has been seeded from the journal this session
    #[serde(skip)]
    pub scene_synced: bool,
}

impl Default for ConstellationApp {
    fn default() -> Self {
        let (nodes, links) = build_demo(DemoKind::SharedWeek);
        Self {
            nodes,
            links,
            display: DisplaySettings::default(),
            scene: ConstellationScene::new(),
            scene_synced: false,
        }
    }
}

impl ConstellationApp {
    /// Serializes the application state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replaces the journal with one of the built-in demos.
    pub fn load_demo(&mut self, kind: DemoKind) {
        let (nodes, links) = build_demo(kind);
        self.nodes = nodes;
        self.links = links;
        self.scene_synced = false;
    }

    /// Pushes journal data and persisted display options into the scene.
    ///
    /// Runs once after startup or a demo load; afterwards the scene is the
    /// single source of truth for transient state.
    pub fn sync_scene(&mut self) {
        if self.scene_synced {
            return;
        }
        self.scene.set_nodes(self.nodes.clone());
        self.scene.set_links(self.links.clone());
        self.scene.set_filter(self.display.filter);
        self.scene.set_resolve_options(self.display.resolve_options);
        self.scene.set_view_mode(self.display.view_mode);
        self.scene.set_auto_orbit(self.display.auto_orbit);
        self.scene_synced = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_starts_with_demo_journal() {
        let app = ConstellationApp::default();
        assert!(!app.nodes.is_empty());
        assert!(!app.scene_synced);
    }

    #[test]
    fn test_json_round_trip_preserves_journal_and_settings() {
        let mut app = ConstellationApp::default();
        app.display.dark_mode = false;
        app.display.view_mode = ViewMode::Galaxy;
        let json = app.to_json().expect("serialize");

        let restored = ConstellationApp::from_json(&json).expect("deserialize");
        assert_eq!(restored.nodes.len(), app.nodes.len());
        assert_eq!(restored.links.len(), app.links.len());
        assert!(!restored.display.dark_mode);
        assert_eq!(restored.display.view_mode, ViewMode::Galaxy);
        // Transient scene state never persists.
        assert!(!restored.scene_synced);
    }

    #[test]
    fn test_sync_scene_is_idempotent() {
        let mut app = ConstellationApp::default();
        app.sync_scene();
        app.scene.tick(0.0);
        let count = app.scene.visible_count();
        assert_eq!(count, app.nodes.len());

        app.sync_scene();
        app.scene.tick(0.0);
        assert_eq!(app.scene.visible_count(), count);
        assert!(app.scene_synced);
    }

    #[test]
    fn test_load_demo_marks_scene_stale() {
        let mut app = ConstellationApp::default();
        app.sync_scene();
        app.scene.tick(0.0);
        app.load_demo(DemoKind::DreamCycle);
        assert!(!app.scene_synced);
        app.sync_scene();
        app.scene.tick(0.0);
        assert_eq!(app.scene.visible_count(), app.nodes.len());
    }
}
