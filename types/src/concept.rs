//! Concept nodes of the relationship diagram and their fixed adjacency table.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// One of the six organisational-systems concepts. Deserializes from the
/// lowercase id, as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptId {
    Leadership,
    Culture,
    Processes,
    People,
    Results,
    Customers,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown concept '{0}'")]
pub struct UnknownConcept(pub String);

impl ConceptId {
    pub const COUNT: usize = 6;

    pub const ALL: [ConceptId; Self::COUNT] = [
        ConceptId::Leadership,
        ConceptId::Culture,
        ConceptId::Processes,
        ConceptId::People,
        ConceptId::Results,
        ConceptId::Customers,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ConceptId::Leadership => "leadership",
            ConceptId::Culture => "culture",
            ConceptId::Processes => "processes",
            ConceptId::People => "people",
            ConceptId::Results => "results",
            ConceptId::Customers => "customers",
        }
    }

    /// Capitalised name shown in the detail panel and on the node itself.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ConceptId::Leadership => "Leadership",
            ConceptId::Culture => "Culture",
            ConceptId::Processes => "Processes",
            ConceptId::People => "People",
            ConceptId::Results => "Results",
            ConceptId::Customers => "Customers",
        }
    }

    /// Static node data for this concept.
    #[must_use]
    pub fn node(self) -> &'static ConceptNode {
        // CONCEPT_TABLE is ordered like ALL.
        &CONCEPT_TABLE[self as usize]
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConceptId {
    type Err = UnknownConcept;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ConceptId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownConcept(s.to_string()))
    }
}

/// Qualitative strength of a directed relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Strong,
    Medium,
    Weak,
}

impl Strength {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strength::Strong => "strong",
            Strength::Medium => "medium",
            Strength::Weak => "weak",
        }
    }
}

/// Fractional position inside the diagram area; both axes run 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub x: f32,
    pub y: f32,
}

/// A directed edge out of a concept node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub target: ConceptId,
    pub strength: Strength,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConceptNode {
    pub id: ConceptId,
    pub title: &'static str,
    pub position: NodePosition,
    pub connections: &'static [Connection],
}

/// Look up a node by its raw identifier. Unknown identifiers yield `None`.
#[must_use]
pub fn lookup_concept(raw: &str) -> Option<&'static ConceptNode> {
    raw.parse::<ConceptId>().ok().map(ConceptId::node)
}

const fn link(
    target: ConceptId,
    strength: Strength,
    icon: &'static str,
    description: &'static str,
) -> Connection {
    Connection {
        target,
        strength,
        description,
        icon,
    }
}

static CONCEPT_TABLE: [ConceptNode; ConceptId::COUNT] = [
    ConceptNode {
        id: ConceptId::Leadership,
        title: "Leadership: setting direction",
        position: NodePosition { x: 0.5, y: 0.1 },
        connections: &[
            link(
                ConceptId::Culture,
                Strength::Strong,
                "✦",
                "Leaders model the behaviours that become the culture",
            ),
            link(
                ConceptId::Processes,
                Strength::Strong,
                "⚙",
                "Leaders decide which processes exist and how they are funded",
            ),
            link(
                ConceptId::People,
                Strength::Medium,
                "♥",
                "Coaching and trust shape how people grow",
            ),
            link(
                ConceptId::Results,
                Strength::Medium,
                "▲",
                "Priorities chosen at the top steer what gets delivered",
            ),
        ],
    },
    ConceptNode {
        id: ConceptId::Culture,
        title: "Culture: the shared habits",
        position: NodePosition { x: 0.12, y: 0.42 },
        connections: &[
            link(
                ConceptId::People,
                Strength::Strong,
                "♥",
                "Norms decide who thrives, who stays and who leaves",
            ),
            link(
                ConceptId::Leadership,
                Strength::Medium,
                "↺",
                "Culture limits which leadership styles can succeed",
            ),
            link(
                ConceptId::Customers,
                Strength::Medium,
                "☺",
                "Customers feel the culture in every interaction",
            ),
        ],
    },
    ConceptNode {
        id: ConceptId::Processes,
        title: "Processes: how work flows",
        position: NodePosition { x: 0.88, y: 0.42 },
        connections: &[
            link(
                ConceptId::Results,
                Strength::Strong,
                "▲",
                "The system is perfectly designed for the results it gets",
            ),
            link(
                ConceptId::People,
                Strength::Medium,
                "♥",
                "Clumsy processes waste effort and drain motivation",
            ),
            link(
                ConceptId::Customers,
                Strength::Medium,
                "☺",
                "Handoffs and wait times are what customers experience",
            ),
        ],
    },
    ConceptNode {
        id: ConceptId::People,
        title: "People: skills and motivation",
        position: NodePosition { x: 0.25, y: 0.88 },
        connections: &[
            link(
                ConceptId::Processes,
                Strength::Strong,
                "⚙",
                "People run, bend and improve the processes",
            ),
            link(
                ConceptId::Culture,
                Strength::Medium,
                "✦",
                "Every hire shifts the culture a little",
            ),
            link(
                ConceptId::Customers,
                Strength::Strong,
                "☺",
                "Front-line people are the customer's view of the system",
            ),
        ],
    },
    ConceptNode {
        id: ConceptId::Results,
        title: "Results: what the system produces",
        position: NodePosition { x: 0.75, y: 0.88 },
        connections: &[
            link(
                ConceptId::Leadership,
                Strength::Strong,
                "↺",
                "Outcomes feed back into the next round of decisions",
            ),
            link(
                ConceptId::People,
                Strength::Weak,
                "♥",
                "Visible wins lift morale, repeated misses erode it",
            ),
        ],
    },
    ConceptNode {
        id: ConceptId::Customers,
        title: "Customers: why the system exists",
        position: NodePosition { x: 0.5, y: 0.62 },
        connections: &[
            link(
                ConceptId::Results,
                Strength::Strong,
                "▲",
                "Customer choices are the final measure of results",
            ),
            link(
                ConceptId::Processes,
                Strength::Weak,
                "⚙",
                "Complaints and requests reshape processes over time",
            ),
            link(
                ConceptId::Culture,
                Strength::Weak,
                "✦",
                "Stories about customers become part of the culture",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::{ConceptId, Strength, UnknownConcept, lookup_concept};

    #[test]
    fn table_is_ordered_like_all() {
        for id in ConceptId::ALL {
            assert_eq!(id.node().id, id);
        }
    }

    #[test]
    fn leadership_has_four_connections() {
        let node = ConceptId::Leadership.node();
        let targets: Vec<_> = node.connections.iter().map(|c| c.target).collect();
        assert_eq!(
            targets,
            vec![
                ConceptId::Culture,
                ConceptId::Processes,
                ConceptId::People,
                ConceptId::Results
            ]
        );
        assert_eq!(node.connections[0].strength, Strength::Strong);
        assert_eq!(node.connections[3].strength, Strength::Medium);
    }

    #[test]
    fn connections_are_directed() {
        let to_culture = ConceptId::Leadership
            .node()
            .connections
            .iter()
            .find(|c| c.target == ConceptId::Culture)
            .expect("leadership -> culture");
        let to_leadership = ConceptId::Culture
            .node()
            .connections
            .iter()
            .find(|c| c.target == ConceptId::Leadership)
            .expect("culture -> leadership");
        assert_ne!(to_culture.strength, to_leadership.strength);
        assert_ne!(to_culture.description, to_leadership.description);
    }

    #[test]
    fn no_self_loops_and_positions_in_bounds() {
        for id in ConceptId::ALL {
            let node = id.node();
            assert!((0.0..=1.0).contains(&node.position.x));
            assert!((0.0..=1.0).contains(&node.position.y));
            assert!(node.connections.iter().all(|c| c.target != id));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Culture ".parse::<ConceptId>(), Ok(ConceptId::Culture));
        assert_eq!(
            "unknown".parse::<ConceptId>(),
            Err(UnknownConcept("unknown".to_string()))
        );
        assert!(lookup_concept("unknown").is_none());
        assert_eq!(
            lookup_concept("leadership").map(|n| n.id),
            Some(ConceptId::Leadership)
        );
    }
}
