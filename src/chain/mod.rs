/// Evolution chain tree: build from the wire document, locate, walk ancestry
pub mod describe;
pub mod enrich;

use serde::Serialize;

use crate::api::{ChainDocument, ChainLink, EvolutionDetailRecord};

pub use describe::{describe, title_case, Direction};
pub use enrich::{enrich, EvolutionOption};

/// Category of condition that causes a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    LevelUp,
    UseItem,
    /// Any other trigger kind, carried verbatim (e.g. "trade")
    Other(String),
}

impl Trigger {
    pub fn from_name(name: &str) -> Self {
        match name {
            "level-up" => Trigger::LevelUp,
            "use-item" => Trigger::UseItem,
            other => Trigger::Other(other.to_string()),
        }
    }

    /// The raw trigger kind as the API spells it
    pub fn as_str(&self) -> &str {
        match self {
            Trigger::LevelUp => "level-up",
            Trigger::UseItem => "use-item",
            Trigger::Other(name) => name,
        }
    }
}

/// How a parent species reaches the node this condition is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionCondition {
    pub trigger: Trigger,
    pub min_level: Option<u32>,
    pub item: Option<String>,
}

impl From<&EvolutionDetailRecord> for TransitionCondition {
    fn from(record: &EvolutionDetailRecord) -> Self {
        Self {
            trigger: Trigger::from_name(&record.trigger.name),
            min_level: record.min_level,
            item: record.item.as_ref().map(|i| i.name.clone()),
        }
    }
}

/// One species in the evolution tree. Conditions describe how the parent
/// reaches this node; the root carries none. Built once from the chain
/// document and never mutated, so the tree is acyclic by construction.
#[derive(Debug, Clone)]
pub struct ChainNode {
    /// Species name, lower-cased for comparisons
    pub species: String,
    pub conditions: Vec<TransitionCondition>,
    /// Children in document order, which is the API's canonical branch order
    pub evolves_to: Vec<ChainNode>,
}

impl ChainNode {
    /// Build the tree from a decoded chain document, preserving child order
    pub fn from_document(doc: &ChainDocument) -> Self {
        Self::from_link(&doc.chain)
    }

    fn from_link(link: &ChainLink) -> Self {
        Self {
            species: link.species.name.to_lowercase(),
            conditions: link
                .evolution_details
                .iter()
                .map(TransitionCondition::from)
                .collect(),
            evolves_to: link.evolves_to.iter().map(Self::from_link).collect(),
        }
    }

    /// First condition in document order, the one used for display
    pub fn primary_condition(&self) -> Option<&TransitionCondition> {
        self.conditions.first()
    }

    /// Depth-first pre-order search for a species by case-folded name
    pub fn locate(&self, target: &str) -> Option<&ChainNode> {
        let target = target.to_lowercase();
        self.locate_folded(&target)
    }

    fn locate_folded(&self, target: &str) -> Option<&ChainNode> {
        if self.species == target {
            return Some(self);
        }
        self.evolves_to
            .iter()
            .find_map(|child| child.locate_folded(target))
    }

    /// Root-first path of ancestors of `target`, excluding the target itself.
    ///
    /// `Some(vec![])` means the target is the root; `None` means the target is
    /// absent from the tree, which callers must not conflate with an empty
    /// ancestor list.
    pub fn ancestors_of(&self, target: &str) -> Option<Vec<&ChainNode>> {
        let target = target.to_lowercase();
        self.ancestors_folded(&target)
    }

    fn ancestors_folded(&self, target: &str) -> Option<Vec<&ChainNode>> {
        if self.species == target {
            return Some(Vec::new());
        }
        for child in &self.evolves_to {
            if let Some(mut path) = child.ancestors_folded(target) {
                path.insert(0, self);
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(species: &str, children: Vec<ChainNode>) -> ChainNode {
        ChainNode {
            species: species.to_string(),
            conditions: Vec::new(),
            evolves_to: children,
        }
    }

    fn linear_chain() -> ChainNode {
        // a -> b -> c
        node("a", vec![node("b", vec![node("c", vec![])])])
    }

    #[test]
    fn test_locate_finds_mid_chain_node() {
        let tree = linear_chain();
        assert_eq!(tree.locate("b").unwrap().species, "b");
    }

    #[test]
    fn test_locate_folds_case() {
        let tree = linear_chain();
        assert_eq!(tree.locate("C").unwrap().species, "c");
    }

    #[test]
    fn test_locate_missing_is_none() {
        let tree = linear_chain();
        assert!(tree.locate("z").is_none());
    }

    #[test]
    fn test_ancestors_root_first() {
        let tree = linear_chain();
        let path = tree.ancestors_of("c").unwrap();
        let names: Vec<&str> = path.iter().map(|n| n.species.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_ancestors_of_root_is_empty() {
        let tree = linear_chain();
        assert_eq!(tree.ancestors_of("a").unwrap().len(), 0);
    }

    #[test]
    fn test_ancestors_of_missing_is_none() {
        let tree = linear_chain();
        assert!(tree.ancestors_of("z").is_none());
    }

    #[test]
    fn test_branching_ancestors_follow_single_path() {
        // eevee with two branches; ancestors of each branch is just the root
        let tree = node("eevee", vec![node("vaporeon", vec![]), node("jolteon", vec![])]);
        let path = tree.ancestors_of("jolteon").unwrap();
        let names: Vec<&str> = path.iter().map(|n| n.species.as_str()).collect();
        assert_eq!(names, vec!["eevee"]);
    }

    #[test]
    fn test_trigger_parsing() {
        assert_eq!(Trigger::from_name("level-up"), Trigger::LevelUp);
        assert_eq!(Trigger::from_name("use-item"), Trigger::UseItem);
        assert_eq!(
            Trigger::from_name("trade"),
            Trigger::Other("trade".to_string())
        );
        assert_eq!(Trigger::from_name("trade").as_str(), "trade");
    }
}
