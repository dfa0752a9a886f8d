
use tracing::debug;

use crate::tree::{PermNode, PermTree};

/// Produces the full ordered list of permutations encoded by `tree`.
///
/// The walk is depth-first and pre-order: a shared path buffer collects the
/// symbols on the way down, each leaf snapshots the buffer as one completed
/// permutation, and the buffer is popped on the way back up.  Because sibling
/// order is ascending at every level, the output is in strict lexicographic
/// ascending order.
///
/// The list is fully materialized; callers that want to stop early should use
/// [LexPermutationIter](crate::LexPermutationIter) instead.
///
/// An empty alphabet yields exactly one empty permutation, matching
/// `tree.factorial() == 1`.
pub fn all_permutations<T>(tree: &PermTree<T>) -> Vec<Vec<T>>
    where
    T: Clone,
{
    //Width 0 has no nodes to walk, but its single empty permutation is still real
    if tree.width() == 0 {
        return vec![Vec::new()];
    }

    let mut out = Vec::new();
    let mut buf = Vec::with_capacity(tree.width());
    for node in tree.branches() {
        dfs(node, &mut buf, &mut out);
    }

    debug!(count = out.len(), "enumerated all permutations");

    out
}

//Push the node's symbol, emit at leaves, pop on the way out
fn dfs<T>(node: &PermNode<T>, buf: &mut Vec<T>, out: &mut Vec<Vec<T>>)
    where
    T: Clone,
{
    buf.push(node.symbol().clone());
    if node.is_leaf() {
        out.push(buf.clone());
    } else {
        for child in node.children() {
            dfs(child, buf, out);
        }
    }
    buf.pop();
}

/// Returns the permutation at 1-based lexicographic `rank`, by enumerating the
/// whole list and indexing into it.
///
/// This is the baseline retrieval strategy: cost is proportional to `n!·n`
/// regardless of the rank, which is exactly what
/// [permutation_by_decoding](crate::permutation_by_decoding) is measured
/// against.  Ranks outside `[1, tree.factorial()]` return `None`.
pub fn permutation_by_enumeration<T>(tree: &PermTree<T>, rank: u128) -> Option<Vec<T>>
    where
    T: Clone,
{
    //Range check comes before any work; rank is 1-based
    if rank < 1 || rank > tree.factorial() {
        return None;
    }
    let idx = usize::try_from(rank - 1).ok()?;

    let mut all = all_permutations(tree);
    Some(all.swap_remove(idx))
}
