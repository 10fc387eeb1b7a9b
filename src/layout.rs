//! Deterministic spatial layout of memories onto a sphere surface.
//!
//! Positions are a pure function of the node count and each node's index in
//! the supplied order, via the Fibonacci-sphere distribution: quasi-uniform
//! coverage for any N with no randomness and no iteration-to-convergence.

use crate::constants::{GOLDEN_ANGLE, SPHERE_RADIUS};
use crate::types::{MemoryId, MemoryNode, Vec3};
use std::collections::HashMap;

/// Maps an ordered sequence of memories onto sphere-surface coordinates.
///
/// Every call with the same node order yields identical positions. An empty
/// input yields an empty mapping.
pub fn layout_positions(nodes: &[MemoryNode]) -> HashMap<MemoryId, Vec3> {
    layout_positions_with_radius(nodes, SPHERE_RADIUS)
}

/// Fibonacci-sphere layout with an explicit radius.
///
/// For index `i` in `[0, N)`:
/// `y = (i * 2/N - 1) + 1/N`, `r = sqrt(1 - y^2)`,
/// `phi = ((i + 1) mod N) * goldenAngle`, then `(cos(phi)*r, y, sin(phi)*r)`
/// scaled by the radius.
pub fn layout_positions_with_radius(
    nodes: &[MemoryNode],
    radius: f32,
) -> HashMap<MemoryId, Vec3> {
    let n = nodes.len();
    if n == 0 {
        return HashMap::new();
    }

    let offset = 2.0 / n as f32;
    let mut positions = HashMap::with_capacity(n);
    for (i, node) in nodes.iter().enumerate() {
        let y = (i as f32 * offset - 1.0) + offset / 2.0;
        // y is within (-1, 1) by construction; guard the sqrt against
        // floating rounding all the same.
        let r = (1.0 - y * y).max(0.0).sqrt();
        let phi = ((i + 1) % n) as f32 * GOLDEN_ANGLE;
        positions.insert(
            node.id,
            Vec3::new(phi.cos() * r * radius, y * radius, phi.sin() * r * radius),
        );
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemoryKind;
    use chrono::{TimeZone, Utc};

    fn make_nodes(n: usize) -> Vec<MemoryNode> {
        (0..n)
            .map(|i| {
                MemoryNode::new(
                    MemoryKind::HumanMemory,
                    format!("memory {i}"),
                    "calm",
                    [200, 200, 200],
                    0.5,
                    Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        let positions = layout_positions(&[]);
        assert!(positions.is_empty());
    }

    #[test]
    fn test_all_positions_on_sphere_surface() {
        for n in [1, 2, 3, 7, 50, 200] {
            let nodes = make_nodes(n);
            let positions = layout_positions(&nodes);
            assert_eq!(positions.len(), n);

            let r_sq = SPHERE_RADIUS * SPHERE_RADIUS;
            for (id, pos) in &positions {
                let err = (pos.length_sq() - r_sq).abs();
                assert!(
                    err < 0.05 * r_sq.max(1.0),
                    "node {id} at {pos:?} off sphere for n={n}: err={err}"
                );
            }
        }
    }

    #[test]
    fn test_positions_are_unique() {
        let nodes = make_nodes(100);
        let positions = layout_positions(&nodes);

        let values: Vec<&Vec3> = positions.values().collect();
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                let d = *values[i] - *values[j];
                assert!(d.length_sq() > 1e-6, "duplicate positions at {i}/{j}");
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let nodes = make_nodes(37);
        let first = layout_positions(&nodes);
        let second = layout_positions(&nodes);

        for (id, pos) in &first {
            assert_eq!(second.get(id), Some(pos));
        }
    }

    #[test]
    fn test_single_node_no_division_artifacts() {
        let nodes = make_nodes(1);
        let positions = layout_positions(&nodes);
        let pos = positions.values().next().unwrap();

        assert!(pos.x.is_finite() && pos.y.is_finite() && pos.z.is_finite());
    }

    #[test]
    fn test_explicit_radius_respected() {
        let nodes = make_nodes(10);
        let positions = layout_positions_with_radius(&nodes, 10.0);

        for pos in positions.values() {
            assert!((pos.length_sq() - 100.0).abs() < 1.0);
        }
    }
}
