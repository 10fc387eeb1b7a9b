//! Shared application-wide constants.
//! Centralizes tweakable values used across layout, projection, rendering, and interactions.

// Layout
/// Radius of the layout sphere in world units.
pub const SPHERE_RADIUS: f32 = 160.0;
/// Golden angle in radians, used by the Fibonacci-sphere distribution.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

// Camera
/// Minimum zoom factor.
pub const ZOOM_MIN: f32 = 0.5;
/// Maximum zoom factor.
pub const ZOOM_MAX: f32 = 3.0;
/// Multiplicative zoom change per wheel tick step.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.05;
/// Pitch is clamped to this magnitude (radians) so extreme vertical drags
/// cannot flip the orbit upside down.
pub const PITCH_LIMIT: f32 = 1.55;
/// Yaw advance per tick (radians) while auto-orbit is enabled and no drag is active.
pub const AUTO_ORBIT_STEP: f32 = 0.0035;
/// Orbit rotation per pixel of pointer drag (radians).
pub const DRAG_SENSITIVITY: f32 = 0.01;

// Projection
/// Perspective distance as a fraction of the smaller viewport dimension.
pub const PERSPECTIVE_FACTOR: f32 = 0.9;
/// Lower clamp for the perspective distance (pixels).
pub const PERSPECTIVE_MIN: f32 = 240.0;
/// Upper clamp for the perspective distance (pixels).
pub const PERSPECTIVE_MAX: f32 = 1200.0;
/// Floor for the perspective divide denominator. Keeps the divide finite and
/// non-negative for points behind the focal plane.
pub const DENOMINATOR_FLOOR: f32 = 1.0;

// Flattened view modes
/// Per-axis spread for the galaxy flatten (x, y).
pub const GALAXY_SPREAD: (f32, f32) = (1.15, 1.15);
/// Per-axis spread for the thread flatten (x, y).
pub const THREAD_SPREAD: (f32, f32) = (1.6, 0.55);

// Node rendering
/// Disc radius at significance 0 (pixels, before projection scale).
pub const NODE_BASE_RADIUS: f32 = 4.0;
/// Additional disc radius granted at significance 1.
pub const NODE_SIGNIFICANCE_RADIUS: f32 = 10.0;
/// Minimum drawn and pickable disc radius (pixels), so zoomed-out or far
/// nodes remain clickable.
pub const NODE_MIN_RADIUS: f32 = 5.0;
/// Nodes with significance above this threshold get a pulsing stroke.
pub const PULSE_THRESHOLD: f32 = 0.7;
/// Angular speed of the shared pulse clock (radians per second).
pub const PULSE_SPEED: f32 = 4.0;
/// Extra radius of the hover/selection halo (pixels).
pub const HALO_PADDING: f32 = 4.0;

// Edge rendering
/// Edge line width at strength 0 (pixels, before scaling).
pub const EDGE_BASE_WIDTH: f32 = 0.6;
/// Additional edge line width granted at strength 1.
pub const EDGE_STRENGTH_WIDTH: f32 = 2.0;
/// Minimum drawn edge width (pixels).
pub const EDGE_MIN_WIDTH: f32 = 0.5;

// Connection resolution
/// Strength assigned to explicit links that carry none.
pub const EXPLICIT_DEFAULT_STRENGTH: f32 = 0.7;
/// Strength assigned to derived temporal edges.
pub const TEMPORAL_STRENGTH: f32 = 0.35;
/// Strength assigned to derived semantic edges.
pub const SEMANTIC_STRENGTH: f32 = 0.45;
/// Two memories within this many seconds of each other form a temporal edge.
pub const TEMPORAL_WINDOW_SECS: i64 = 3600;
