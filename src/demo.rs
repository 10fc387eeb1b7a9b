//! Built-in demo journals that can be quickly loaded from the UI.
//!
//! This module defines a few curated memory journals ranging from a small
//! shared week to a denser dream-heavy archive, to help new users see the
//! constellation without importing their own data.

use crate::constants::EXPLICIT_DEFAULT_STRENGTH;
use crate::types::{MemoryKind, MemoryLink, MemoryNode};
use chrono::{Duration, TimeZone, Utc};

/// Kinds of built-in demo journals available from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    /// A quiet week of shared human and companion memories
    SharedWeek,
    /// A cluster of dreams threaded through recurring emotions
    DreamCycle,
    /// A larger mixed archive exercising every relation kind
    FullArchive,
}

/// Metadata for a single demo journal.
pub struct DemoInfo {
    /// Stable identifier for the demo
    pub kind: DemoKind,
    /// Human-friendly display name
    pub name: &'static str,
}

/// Returns all demos with their display names.
pub const fn all_demos() -> &'static [DemoInfo] {
    const DEMOS: &[DemoInfo] = &[
        DemoInfo {
            kind: DemoKind::SharedWeek,
            name: "A Shared Week",
        },
        DemoInfo {
            kind: DemoKind::DreamCycle,
            name: "Dream Cycle",
        },
        DemoInfo {
            kind: DemoKind::FullArchive,
            name: "Full Archive",
        },
    ];
    DEMOS
}

/// Builds the node and link sets for the given demo kind.
pub fn build_demo(kind: DemoKind) -> (Vec<MemoryNode>, Vec<MemoryLink>) {
    match kind {
        DemoKind::SharedWeek => build_shared_week(),
        DemoKind::DreamCycle => build_dream_cycle(),
        DemoKind::FullArchive => build_full_archive(),
    }
}

fn at(day: i64, hour: i64, minute: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
        + Duration::days(day)
        + Duration::hours(hour)
        + Duration::minutes(minute)
}

fn build_shared_week() -> (Vec<MemoryNode>, Vec<MemoryLink>) {
    let morning_walk = MemoryNode::new(
        MemoryKind::HumanMemory,
        "Walked to the harbor before sunrise; the water was completely still.",
        "calm",
        [120, 170, 230],
        0.55,
        at(0, 6, 40),
    );
    let first_coffee = MemoryNode::new(
        MemoryKind::CompanionMemory,
        "They laughed at my terrible pun about the espresso machine.",
        "joy",
        [240, 200, 90],
        0.4,
        at(0, 7, 10),
    );
    let late_train = MemoryNode::new(
        MemoryKind::HumanMemory,
        "Missed the last train and walked home in the rain instead.",
        "melancholy",
        [110, 110, 180],
        0.6,
        at(2, 23, 15),
    );
    let rooftop = MemoryNode::new(
        MemoryKind::CompanionMemory,
        "We watched the storm roll in from the rooftop, counting seconds between flashes.",
        "awe",
        [200, 120, 220],
        0.85,
        at(4, 20, 5),
    );
    let quiet_sunday = MemoryNode::new(
        MemoryKind::HumanMemory,
        "Read all afternoon with nowhere to be.",
        "calm",
        [120, 200, 160],
        0.3,
        at(6, 15, 0),
    );

    let links = vec![
        // The walk and the coffee are the same morning, remembered together.
        MemoryLink::new(morning_walk.id, first_coffee.id),
        MemoryLink::with_strength(late_train.id, rooftop.id, 0.9),
    ];

    (
        vec![morning_walk, first_coffee, late_train, rooftop, quiet_sunday],
        links,
    )
}

fn build_dream_cycle() -> (Vec<MemoryNode>, Vec<MemoryLink>) {
    let emotions = ["wonder", "unease", "wonder", "longing", "unease", "wonder"];
    let contents = [
        "A staircase that kept folding back into itself.",
        "The house from childhood, but every door opened onto the sea.",
        "Flying low over a city made of paper lanterns.",
        "Someone I couldn't name kept almost turning around.",
        "All the clocks ran backwards and nobody minded.",
        "A library where the books hummed when you touched them.",
    ];

    let nodes: Vec<MemoryNode> = contents
        .iter()
        .zip(emotions.iter())
        .enumerate()
        .map(|(i, (&content, &emotion))| {
            MemoryNode::new(
                MemoryKind::Dream,
                content,
                emotion,
                [150 + (i as u8) * 15, 110, 210],
                0.45 + 0.08 * i as f32,
                at(i as i64 * 3, 3, 30),
            )
        })
        .collect();

    // One explicit thread through the recurring staircase imagery; the
    // shared emotions generate the rest of the web.
    let links = vec![MemoryLink::with_strength(
        nodes[0].id,
        nodes[5].id,
        EXPLICIT_DEFAULT_STRENGTH,
    )];

    (nodes, links)
}

fn build_full_archive() -> (Vec<MemoryNode>, Vec<MemoryLink>) {
    let (mut nodes, mut links) = build_shared_week();
    let (dreams, dream_links) = build_dream_cycle();

    let anchor = nodes[3].id;
    let bridge = MemoryNode::new(
        MemoryKind::Dream,
        "The rooftop again, but the lightning hung frozen in the sky.",
        "awe",
        [210, 140, 230],
        0.95,
        at(5, 4, 0),
    );
    links.push(MemoryLink::with_strength(anchor, bridge.id, 1.0));

    nodes.push(bridge);
    nodes.extend(dreams);
    links.extend(dream_links);

    (nodes, links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::{resolve_edges, ResolveOptions};

    #[test]
    fn test_all_demos_listed() {
        assert_eq!(all_demos().len(), 3);
    }

    #[test]
    fn test_every_demo_link_references_existing_nodes() {
        for info in all_demos() {
            let (nodes, links) = build_demo(info.kind);
            for link in &links {
                assert!(nodes.iter().any(|n| n.id == link.from), "{}", info.name);
                assert!(nodes.iter().any(|n| n.id == link.to), "{}", info.name);
            }
        }
    }

    #[test]
    fn test_shared_week_produces_temporal_and_semantic_edges() {
        let (nodes, links) = build_shared_week();
        let edges = resolve_edges(&nodes, &links, ResolveOptions::default());

        use crate::types::EdgeKind;
        assert!(edges.iter().any(|e| e.kind == EdgeKind::Explicit));
        assert!(edges.iter().any(|e| e.kind == EdgeKind::Temporal));
        assert!(edges.iter().any(|e| e.kind == EdgeKind::Semantic));
    }

    #[test]
    fn test_full_archive_contains_all_memory_kinds() {
        use crate::types::MemoryKind;
        let (nodes, _) = build_demo(DemoKind::FullArchive);
        for kind in [
            MemoryKind::HumanMemory,
            MemoryKind::CompanionMemory,
            MemoryKind::Dream,
        ] {
            assert!(nodes.iter().any(|n| n.kind == kind));
        }
    }
}
