//! Core data types for the memory constellation.
//!
//! This module defines the externally supplied node and link records, the
//! resolved edge type, and the small geometry/viewport types shared by the
//! layout, projection, and rendering code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for memory nodes.
pub type MemoryId = Uuid;

/// The kind of memory a node represents.
///
/// Every kind exposes the same rendering-relevant surface (id, significance,
/// color, timestamp) through [`MemoryNode`]; the kind only affects filtering
/// and presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MemoryKind {
    /// A memory recorded by the human participant
    HumanMemory,
    /// A memory recorded by the companion
    CompanionMemory,
    /// A dream, shared or solitary
    Dream,
}

impl MemoryKind {
    /// Human-friendly display name.
    pub fn label(&self) -> &'static str {
        match self {
            MemoryKind::HumanMemory => "Human memory",
            MemoryKind::CompanionMemory => "Companion memory",
            MemoryKind::Dream => "Dream",
        }
    }
}

/// A single memory node, supplied externally and immutable per render tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryNode {
    /// Unique identifier for this memory
    pub id: MemoryId,
    /// Which kind of memory this is
    pub kind: MemoryKind,
    /// The memory's text content
    pub content: String,
    /// Emotion label attached by the external theming layer
    pub emotion: String,
    /// Display color (RGB) attached by the external theming layer
    pub color: [u8; 3],
    /// How significant this memory is, in [0, 1]
    pub significance: f32,
    /// When the memory was recorded
    pub timestamp: DateTime<Utc>,
}

impl MemoryNode {
    /// Creates a new memory node with a fresh unique id.
    ///
    /// Significance is clamped to [0, 1] so malformed external data degrades
    /// rather than distorting layout or rendering.
    pub fn new(
        kind: MemoryKind,
        content: impl Into<String>,
        emotion: impl Into<String>,
        color: [u8; 3],
        significance: f32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            emotion: emotion.into(),
            color,
            significance: significance.clamp(0.0, 1.0),
            timestamp,
        }
    }
}

/// The kind of relation an edge represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// An explicitly stored link between two memories
    Explicit,
    /// Derived: the two memories were recorded close together in time
    Temporal,
    /// Derived: the two memories share an emotion label
    Semantic,
}

/// An externally supplied link record between two memories.
///
/// Links are raw input; they become [`Edge`]s only after resolution, which
/// drops links referencing absent ids and collapses duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryLink {
    /// ID of one endpoint
    pub from: MemoryId,
    /// ID of the other endpoint
    pub to: MemoryId,
    /// Relation strength in [0, 1]; `None` takes the default
    pub strength: Option<f32>,
}

impl MemoryLink {
    /// Creates a link with the default strength.
    pub fn new(from: MemoryId, to: MemoryId) -> Self {
        Self {
            from,
            to,
            strength: None,
        }
    }

    /// Creates a link with an explicit strength.
    pub fn with_strength(from: MemoryId, to: MemoryId, strength: f32) -> Self {
        Self {
            from,
            to,
            strength: Some(strength),
        }
    }
}

/// A resolved edge between two memories.
///
/// After resolution the unordered endpoint pair plus the kind is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// ID of one endpoint
    pub from: MemoryId,
    /// ID of the other endpoint
    pub to: MemoryId,
    /// What relation this edge represents
    pub kind: EdgeKind,
    /// Relation strength in [0, 1]
    pub strength: f32,
}

impl Edge {
    /// The endpoint pair in a canonical (unordered) form, for dedup keys.
    pub fn unordered_pair(&self) -> (MemoryId, MemoryId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// A point or vector in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// All-zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance from the origin.
    pub fn length_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// The drawable area in pixels, supplied by the host on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport from dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The viewport center, where the world origin projects under an
    /// identity camera.
    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }

    /// Whether the viewport has zero area. Degenerate viewports skip
    /// projection and hit-testing entirely.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Which subset of memories is shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConstellationFilter {
    /// Show every memory
    All,
    /// Show only memories of one kind
    ByKind(MemoryKind),
    /// Show only memories that participate in at least one resolved edge
    LinkedOnly,
}

impl Default for ConstellationFilter {
    fn default() -> Self {
        ConstellationFilter::All
    }
}

/// The three interchangeable render strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewMode {
    /// Interactive orbit camera with perspective projection
    Orbit,
    /// Flattened galaxy presentation of the same layout
    Galaxy,
    /// Flattened thread presentation of the same layout
    Thread,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Orbit
    }
}

impl ViewMode {
    /// Human-friendly display name.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Orbit => "Orbit",
            ViewMode::Galaxy => "Galaxy",
            ViewMode::Thread => "Thread",
        }
    }
}
