//! Resolving the drawable edge set from links and derived relations.
//!
//! Explicit link records are combined with derived relations (temporal
//! proximity, shared emotion) into a deduplicated edge list. Links that
//! reference ids absent from the current node set are dropped silently;
//! transient inconsistencies degrade to fewer edges drawn, never an error.

use crate::constants::{
    EXPLICIT_DEFAULT_STRENGTH, SEMANTIC_STRENGTH, TEMPORAL_STRENGTH, TEMPORAL_WINDOW_SECS,
};
use crate::types::{Edge, EdgeKind, MemoryId, MemoryLink, MemoryNode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which derived relations to compute alongside explicit links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Connect memories recorded within the temporal window of each other
    pub temporal: bool,
    /// Connect memories sharing an emotion label
    pub semantic: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            temporal: true,
            semantic: true,
        }
    }
}

/// Builds the edge set for the given nodes.
///
/// Duplicate edges (same unordered id pair and same kind) collapse to one;
/// the first occurrence wins, so an explicit link's strength takes priority
/// over a later duplicate.
pub fn resolve_edges(
    nodes: &[MemoryNode],
    links: &[MemoryLink],
    options: ResolveOptions,
) -> Vec<Edge> {
    let present: HashSet<MemoryId> = nodes.iter().map(|n| n.id).collect();

    let mut edges = Vec::new();
    let mut seen: HashSet<(MemoryId, MemoryId, EdgeKind)> = HashSet::new();

    let mut push = |edges: &mut Vec<Edge>, edge: Edge| {
        let (a, b) = edge.unordered_pair();
        if seen.insert((a, b, edge.kind)) {
            edges.push(edge);
        }
    };

    for link in links {
        if !present.contains(&link.from) || !present.contains(&link.to) {
            log::warn!(
                "dropping link {} -> {}: endpoint missing from node set",
                link.from,
                link.to
            );
            continue;
        }
        if link.from == link.to {
            continue;
        }
        push(
            &mut edges,
            Edge {
                from: link.from,
                to: link.to,
                kind: EdgeKind::Explicit,
                strength: link
                    .strength
                    .unwrap_or(EXPLICIT_DEFAULT_STRENGTH)
                    .clamp(0.0, 1.0),
            },
        );
    }

    if options.temporal || options.semantic {
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                if options.temporal {
                    let gap = (a.timestamp - b.timestamp).num_seconds().abs();
                    if gap <= TEMPORAL_WINDOW_SECS {
                        push(
                            &mut edges,
                            Edge {
                                from: a.id,
                                to: b.id,
                                kind: EdgeKind::Temporal,
                                strength: TEMPORAL_STRENGTH,
                            },
                        );
                    }
                }
                if options.semantic && !a.emotion.is_empty() && a.emotion == b.emotion {
                    push(
                        &mut edges,
                        Edge {
                            from: a.id,
                            to: b.id,
                            kind: EdgeKind::Semantic,
                            strength: SEMANTIC_STRENGTH,
                        },
                    );
                }
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MemoryKind;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn node(emotion: &str, secs: i64) -> MemoryNode {
        MemoryNode::new(
            MemoryKind::HumanMemory,
            "content",
            emotion,
            [128, 128, 128],
            0.5,
            ts(secs),
        )
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    const NO_DERIVED: ResolveOptions = ResolveOptions {
        temporal: false,
        semantic: false,
    };

    #[test]
    fn test_explicit_link_resolves_to_edge() {
        let nodes = vec![node("joy", 0), node("calm", 100_000)];
        let links = vec![MemoryLink::with_strength(nodes[0].id, nodes[1].id, 0.9)];

        let edges = resolve_edges(&nodes, &links, NO_DERIVED);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].kind, EdgeKind::Explicit);
        assert_eq!(edges[0].strength, 0.9);
    }

    #[test]
    fn test_missing_strength_takes_default() {
        let nodes = vec![node("joy", 0), node("calm", 100_000)];
        let links = vec![MemoryLink::new(nodes[0].id, nodes[1].id)];

        let edges = resolve_edges(&nodes, &links, NO_DERIVED);

        assert_eq!(edges[0].strength, EXPLICIT_DEFAULT_STRENGTH);
    }

    #[test]
    fn test_duplicate_unordered_links_collapse() {
        let nodes = vec![node("joy", 0), node("calm", 100_000)];
        let links = vec![
            MemoryLink::with_strength(nodes[0].id, nodes[1].id, 1.0),
            MemoryLink::with_strength(nodes[1].id, nodes[0].id, 0.2),
            MemoryLink::new(nodes[0].id, nodes[1].id),
        ];

        let edges = resolve_edges(&nodes, &links, NO_DERIVED);

        assert_eq!(edges.len(), 1);
        // First occurrence wins.
        assert_eq!(edges[0].strength, 1.0);
    }

    #[test]
    fn test_link_to_missing_id_is_dropped() {
        let nodes = vec![node("joy", 0)];
        let links = vec![MemoryLink::new(nodes[0].id, Uuid::new_v4())];

        let edges = resolve_edges(&nodes, &links, NO_DERIVED);

        assert!(edges.is_empty());
    }

    #[test]
    fn test_self_link_is_dropped() {
        let nodes = vec![node("joy", 0)];
        let links = vec![MemoryLink::new(nodes[0].id, nodes[0].id)];

        let edges = resolve_edges(&nodes, &links, NO_DERIVED);

        assert!(edges.is_empty());
    }

    #[test]
    fn test_temporal_window_derives_edge() {
        let near_a = node("joy", 0);
        let near_b = node("calm", TEMPORAL_WINDOW_SECS);
        let far = node("fear", TEMPORAL_WINDOW_SECS * 10);
        let nodes = vec![near_a.clone(), near_b.clone(), far];

        let edges = resolve_edges(
            &nodes,
            &[],
            ResolveOptions {
                temporal: true,
                semantic: false,
            },
        );

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].kind, EdgeKind::Temporal);
        assert_eq!(edges[0].strength, TEMPORAL_STRENGTH);
        let pair = edges[0].unordered_pair();
        let expected = Edge {
            from: near_a.id,
            to: near_b.id,
            kind: EdgeKind::Temporal,
            strength: TEMPORAL_STRENGTH,
        }
        .unordered_pair();
        assert_eq!(pair, expected);
    }

    #[test]
    fn test_shared_emotion_derives_edge() {
        let nodes = vec![node("joy", 0), node("joy", 100_000), node("calm", 200_000)];

        let edges = resolve_edges(
            &nodes,
            &[],
            ResolveOptions {
                temporal: false,
                semantic: true,
            },
        );

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].kind, EdgeKind::Semantic);
    }

    #[test]
    fn test_explicit_and_derived_edges_coexist() {
        // Same pair, different kinds: both survive.
        let nodes = vec![node("joy", 0), node("joy", 10)];
        let links = vec![MemoryLink::new(nodes[0].id, nodes[1].id)];

        let edges = resolve_edges(&nodes, &links, ResolveOptions::default());

        let kinds: HashSet<EdgeKind> = edges.iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&EdgeKind::Explicit));
        assert!(kinds.contains(&EdgeKind::Temporal));
        assert!(kinds.contains(&EdgeKind::Semantic));
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_empty_inputs_yield_no_edges() {
        assert!(resolve_edges(&[], &[], ResolveOptions::default()).is_empty());
    }
}
