//! The frame-driven constellation core.
//!
//! [`ConstellationScene`] owns everything the renderer and the interaction
//! layer need: the latest node/link snapshot, cached layout positions, the
//! resolved edge set, the orbit camera, hover/selection state, and one shared
//! animation clock. It is deliberately free of any UI dependency so the same
//! core runs under the egui shell, a manually-ticked test harness, or a
//! headless renderer.
//!
//! Data changes mark the scene dirty; the recompute happens once, at the
//! start of the next tick, so its cost stays visible and bounded. Within a
//! tick the camera the projector reads is the state finalized by the
//! previous tick's event processing.

use crate::camera::{Camera, CameraSnapshot};
use crate::constants::{
    DRAG_SENSITIVITY, EDGE_BASE_WIDTH, EDGE_MIN_WIDTH, EDGE_STRENGTH_WIDTH, GALAXY_SPREAD,
    NODE_BASE_RADIUS, NODE_MIN_RADIUS, NODE_SIGNIFICANCE_RADIUS, PULSE_SPEED, THREAD_SPREAD,
    WHEEL_ZOOM_FACTOR,
};
use crate::edges::{resolve_edges, ResolveOptions};
use crate::layout::layout_positions;
use crate::projection::{project, Projected};
use crate::types::{
    ConstellationFilter, Edge, EdgeKind, MemoryId, MemoryLink, MemoryNode, Vec3, ViewMode,
    Viewport,
};
use std::collections::{HashMap, HashSet};

/// One node, projected and ready to draw.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedNode {
    /// The memory this disc represents
    pub id: MemoryId,
    /// Screen position in pixels
    pub pos: (f32, f32),
    /// Perspective scale at this node
    pub scale: f32,
    /// View-space depth; larger is farther
    pub depth: f32,
    /// Final disc radius in pixels, floored at the minimum pick radius
    pub radius: f32,
}

/// One edge, projected and ready to draw.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedEdge {
    /// Screen position of one endpoint
    pub from: (f32, f32),
    /// Screen position of the other endpoint
    pub to: (f32, f32),
    /// Final line width in pixels
    pub width: f32,
    /// The relation kind, for color differentiation
    pub kind: EdgeKind,
    /// The farther endpoint's depth, for edge fading
    pub depth: f32,
}

/// A complete draw pass for one frame.
///
/// Edges come first; nodes are sorted farthest-first so the renderer can
/// paint them in order and nearer discs occlude farther ones without a
/// depth buffer.
#[derive(Debug, Clone, Default)]
pub struct FramePass {
    /// Edges to draw, before any node
    pub edges: Vec<ProjectedEdge>,
    /// Nodes to draw, sorted descending by depth
    pub nodes: Vec<ProjectedNode>,
}

/// The in-memory constellation state, ticked once per display refresh.
pub struct ConstellationScene {
    nodes: Vec<MemoryNode>,
    node_index: HashMap<MemoryId, usize>,
    links: Vec<MemoryLink>,
    filter: ConstellationFilter,
    resolve_options: ResolveOptions,
    view_mode: ViewMode,
    viewport: Viewport,
    positions: HashMap<MemoryId, Vec3>,
    edges: Vec<Edge>,
    visible: HashSet<MemoryId>,
    camera: Camera,
    hovered: Option<MemoryId>,
    selected: Option<MemoryId>,
    clock: f32,
    auto_orbit: bool,
    dragging: bool,
    dirty: bool,
}

impl Default for ConstellationScene {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstellationScene {
    /// Creates an empty scene with a default camera and auto-orbit enabled.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            links: Vec::new(),
            filter: ConstellationFilter::default(),
            resolve_options: ResolveOptions::default(),
            view_mode: ViewMode::default(),
            viewport: Viewport::new(0.0, 0.0),
            positions: HashMap::new(),
            edges: Vec::new(),
            visible: HashSet::new(),
            camera: Camera::default(),
            hovered: None,
            selected: None,
            clock: 0.0,
            auto_orbit: true,
            dragging: false,
            dirty: false,
        }
    }

    /// Replaces the node set. Positions and edges recompute once, at the
    /// start of the next tick, however many setters ran in between.
    pub fn set_nodes(&mut self, nodes: Vec<MemoryNode>) {
        self.node_index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id, i))
            .collect();
        self.nodes = nodes;
        self.dirty = true;
    }

    /// Replaces the link set.
    pub fn set_links(&mut self, links: Vec<MemoryLink>) {
        self.links = links;
        self.dirty = true;
    }

    /// Changes the active filter. Layout is over the full node set, so
    /// surviving nodes keep their positions across filter changes; the
    /// filter only changes which nodes draw and hit-test.
    pub fn set_filter(&mut self, filter: ConstellationFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.dirty = true;
        }
    }

    /// Toggles which derived relations the resolver computes.
    pub fn set_resolve_options(&mut self, options: ResolveOptions) {
        if self.resolve_options != options {
            self.resolve_options = options;
            self.dirty = true;
        }
    }

    /// The active derived-relation toggles.
    pub fn resolve_options(&self) -> ResolveOptions {
        self.resolve_options
    }

    /// Switches the render strategy. All three modes share the same world
    /// positions; no relayout happens here.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// The active render strategy.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The active filter.
    pub fn filter(&self) -> ConstellationFilter {
        self.filter
    }

    /// Updates the drawable area. Supplied by the host on resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The current drawable area.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Enables or disables the idle auto-orbit.
    pub fn set_auto_orbit(&mut self, enabled: bool) {
        self.auto_orbit = enabled;
    }

    /// Whether auto-orbit is enabled.
    pub fn auto_orbit(&self) -> bool {
        self.auto_orbit
    }

    /// Advances the scene by one tick: recomputes cached state if data
    /// changed, advances the shared animation clock, and applies the
    /// auto-orbit increment unless a drag gesture is active.
    pub fn tick(&mut self, dt: f32) {
        if self.dirty {
            self.rebuild();
        }
        self.clock += dt.max(0.0);
        if self.auto_orbit && !self.dragging {
            self.camera.auto_orbit_step();
        }
    }

    /// The shared animation clock in seconds. All pulsing strokes phase off
    /// this one value so they stay synchronized.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Current phase of the significance pulse, in [-1, 1].
    pub fn pulse_phase(&self) -> f32 {
        (self.clock * PULSE_SPEED).sin()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: MemoryId) -> Option<&MemoryNode> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    /// The currently hovered node, if any.
    pub fn hovered_id(&self) -> Option<MemoryId> {
        self.hovered
    }

    /// The currently selected node, if any. Independent of hover.
    pub fn selected_id(&self) -> Option<MemoryId> {
        self.selected
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Number of nodes passing the active filter.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Number of resolved edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// A camera snapshot for the host-drawn HUD.
    pub fn camera_snapshot(&self) -> CameraSnapshot {
        self.camera.snapshot()
    }

    /// Resets the camera to the default view.
    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    // --- pointer entry points -------------------------------------------

    /// Updates hover from the latest pointer position.
    ///
    /// Re-projects all visible nodes with the current camera; the node whose
    /// disc contains the pointer and sits nearest the camera wins, ties
    /// broken by screen distance. No hit clears the hover.
    pub fn pointer_moved(&mut self, pos: (f32, f32)) {
        self.hovered = self.hit_test(pos);
    }

    /// Clears the hover, for when the pointer leaves the canvas entirely.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Starts a drag gesture, suspending auto-orbit until it ends.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Accumulates a pointer drag into the orbit rotation.
    pub fn drag_delta(&mut self, dx: f32, dy: f32) {
        self.dragging = true;
        self.camera
            .orbit(dx * DRAG_SENSITIVITY, dy * DRAG_SENSITIVITY);
    }

    /// Ends the active drag gesture, resuming auto-orbit.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies wheel zoom: multiplies zoom by the per-tick factor raised to
    /// the step count, then clamps.
    pub fn wheel(&mut self, steps: f32) {
        let zoom = self.camera.zoom * WHEEL_ZOOM_FACTOR.powf(steps);
        self.camera.set_zoom(zoom);
    }

    /// Runs the hover hit-test at the click position and binds the selection
    /// to the hit node. A miss clears the selection.
    pub fn click(&mut self, pos: (f32, f32)) {
        self.selected = self.hit_test(pos);
    }

    // --- projection and picking -----------------------------------------

    /// Projects one world position under the active view mode.
    ///
    /// Orbit mode runs the full perspective pipeline. Galaxy and thread
    /// modes flatten the identical world positions, ignoring camera
    /// rotation, so neighborhoods stay recognizable across modes.
    pub fn project_point(&self, world: Vec3) -> Projected {
        match self.view_mode {
            ViewMode::Orbit => project(world, &self.camera, self.viewport),
            ViewMode::Galaxy => self.flatten(world, GALAXY_SPREAD),
            ViewMode::Thread => self.flatten(world, THREAD_SPREAD),
        }
    }

    fn flatten(&self, world: Vec3, spread: (f32, f32)) -> Projected {
        let (cx, cy) = self.viewport.center();
        let view = world - self.camera.pan;
        Projected {
            x: cx + view.x * spread.0 * self.camera.zoom,
            y: cy + view.y * spread.1 * self.camera.zoom,
            scale: 1.0,
            // World z still orders the painter pass, so occlusion stays
            // consistent with the orbit view at rest.
            depth: view.z,
        }
    }

    fn node_radius(&self, node: &MemoryNode, projected: &Projected) -> f32 {
        let base = NODE_BASE_RADIUS + node.significance * NODE_SIGNIFICANCE_RADIUS;
        (base * projected.scale * self.camera.zoom).max(NODE_MIN_RADIUS)
    }

    /// Finds the visible node under the pointer, if any.
    ///
    /// A node is hit when the squared screen distance from the pointer to
    /// its projected center is within its disc radius. Among hits the
    /// nearest-camera (smallest depth) node wins; ties break by smallest
    /// distance. Empty scenes and degenerate viewports always report none.
    pub fn hit_test(&self, pos: (f32, f32)) -> Option<MemoryId> {
        if self.viewport.is_degenerate() {
            return None;
        }

        let mut best: Option<(f32, f32, MemoryId)> = None;
        for node in self.visible_nodes() {
            let Some(&world) = self.positions.get(&node.id) else {
                continue;
            };
            let projected = self.project_point(world);
            let radius = self.node_radius(node, &projected);
            let dx = pos.0 - projected.x;
            let dy = pos.1 - projected.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > radius * radius {
                continue;
            }
            let better = match best {
                None => true,
                Some((depth, d_sq, _)) => {
                    projected.depth < depth || (projected.depth == depth && dist_sq < d_sq)
                }
            };
            if better {
                best = Some((projected.depth, dist_sq, node.id));
            }
        }
        best.map(|(_, _, id)| id)
    }

    /// Builds the draw pass for the current frame, or `None` when the
    /// viewport has zero area and the frame should be skipped.
    pub fn frame(&self) -> Option<FramePass> {
        if self.viewport.is_degenerate() {
            return None;
        }

        let mut projected: HashMap<MemoryId, Projected> = HashMap::new();
        let mut pass_nodes = Vec::new();
        for node in self.visible_nodes() {
            let Some(&world) = self.positions.get(&node.id) else {
                continue;
            };
            let p = self.project_point(world);
            projected.insert(node.id, p);
            pass_nodes.push(ProjectedNode {
                id: node.id,
                pos: (p.x, p.y),
                scale: p.scale,
                depth: p.depth,
                radius: self.node_radius(node, &p),
            });
        }

        // Painter's algorithm: farthest first, so nearer discs occlude.
        pass_nodes.sort_by(|a, b| {
            b.depth
                .partial_cmp(&a.depth)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut pass_edges = Vec::new();
        for edge in &self.edges {
            let (Some(pa), Some(pb)) = (projected.get(&edge.from), projected.get(&edge.to))
            else {
                continue;
            };
            let width = ((EDGE_BASE_WIDTH + edge.strength * EDGE_STRENGTH_WIDTH)
                * pa.scale.min(pb.scale)
                * self.camera.zoom)
                .max(EDGE_MIN_WIDTH);
            pass_edges.push(ProjectedEdge {
                from: (pa.x, pa.y),
                to: (pb.x, pb.y),
                width,
                kind: edge.kind,
                depth: pa.depth.max(pb.depth),
            });
        }

        Some(FramePass {
            edges: pass_edges,
            nodes: pass_nodes,
        })
    }

    fn visible_nodes(&self) -> impl Iterator<Item = &MemoryNode> {
        self.nodes.iter().filter(|n| self.visible.contains(&n.id))
    }

    /// Recomputes layout, edge set, and visibility from the latest data.
    fn rebuild(&mut self) {
        // Layout runs over the full node list so filter changes never
        // reshuffle surviving nodes.
        self.positions = layout_positions(&self.nodes);

        let candidates: Vec<MemoryNode> = match self.filter {
            ConstellationFilter::ByKind(kind) => self
                .nodes
                .iter()
                .filter(|n| n.kind == kind)
                .cloned()
                .collect(),
            ConstellationFilter::All | ConstellationFilter::LinkedOnly => self.nodes.clone(),
        };

        self.edges = resolve_edges(&candidates, &self.links, self.resolve_options);

        self.visible = match self.filter {
            ConstellationFilter::LinkedOnly => self
                .edges
                .iter()
                .flat_map(|e| [e.from, e.to])
                .collect(),
            _ => candidates.iter().map(|n| n.id).collect(),
        };
        if let Some(h) = self.hovered {
            if !self.visible.contains(&h) {
                self.hovered = None;
            }
        }
        if let Some(s) = self.selected {
            if !self.visible.contains(&s) {
                self.selected = None;
            }
        }
        self.dirty = false;
    }
}
