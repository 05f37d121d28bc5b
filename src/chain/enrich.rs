/// Ancestor/descendant option lists with concurrent sprite fan-out
use futures::future::{join, join_all};
use serde::Serialize;

use crate::api::DataSource;
use crate::chain::{describe, title_case, ChainNode, Direction};

/// One entry in the "previous" or "next" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionOption {
    /// Title-cased display name
    pub name: String,
    pub method: String,
    pub sprite: Option<String>,
}

/// Enrich `target`'s position in the tree into (previous, next) option lists.
///
/// Returns `None` when the target is absent from the tree. All sprite lookups
/// across both lists run concurrently; `join_all` keeps results in input
/// order, so list order is the traversal/child order no matter which fetch
/// completes first. A failed sprite lookup leaves that option's sprite absent.
pub async fn enrich<S: DataSource + ?Sized>(
    tree: &ChainNode,
    target: &str,
    source: &S,
) -> Option<(Vec<EvolutionOption>, Vec<EvolutionOption>)> {
    let node = tree.locate(target)?;
    let path = tree.ancestors_of(target)?;

    let prev_futs = path
        .iter()
        .map(|ancestor| async move { option_for(ancestor, Direction::Backward, source).await });
    let next_futs = node
        .evolves_to
        .iter()
        .map(|child| async move { option_for(child, Direction::Forward, source).await });

    let (previous, next) = join(join_all(prev_futs), join_all(next_futs)).await;
    Some((previous, next))
}

async fn option_for<S: DataSource + ?Sized>(
    node: &ChainNode,
    direction: Direction,
    source: &S,
) -> EvolutionOption {
    let method = describe(node.primary_condition(), direction);
    let sprite = source.fetch_sprite(&node.species).await;
    EvolutionOption {
        name: title_case(&node.species),
        method,
        sprite,
    }
}
