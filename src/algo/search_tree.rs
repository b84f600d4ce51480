/*!
# Search-Tree Recording

Optional instrumentation for the clique enumerator: one node per recursive
invocation, including a snapshot of the clique under construction and the
sizes of the candidate and exclusion sets. The recorded tree lets a
downstream visualizer replay the search step by step and contrast the
branches the pivot rule explored with the shadow branches it pruned.
*/

use std::fmt::{Display, Formatter};

use crate::node::{Node, NumNodes};

/// Index of a node within a [`SearchTree`]. Ids are dense and assigned in
/// creation order.
pub type TreeNodeId = usize;

/// A single recorded invocation of the enumerator.
#[derive(Debug, Clone)]
pub struct SearchTreeNode {
    /// Recording node of the invoking call, `None` for outer roots.
    pub parent: Option<TreeNodeId>,
    /// Child invocations in creation order.
    pub children: Vec<TreeNodeId>,
    /// Number of maximal cliques found in this subtree. Filled on return.
    pub cliques_in_subtree: u64,
    /// Size of the clique under construction at entry.
    pub depth: NumNodes,
    /// The vertex whose addition produced this invocation, `None` for outer roots.
    pub candidate: Option<Node>,
    /// Snapshot of the clique under construction at entry.
    pub clique: Vec<Node>,
    /// Number of excluded vertices at entry.
    pub x_size: NumNodes,
    /// Number of candidate vertices at entry.
    pub p_size: NumNodes,
    /// Set when the candidate of this invocation was pruned by the pivot
    /// rule, i.e. this node roots a shadow branch. Everything below such a
    /// node belongs to the shadow and never contributes to the global
    /// clique count.
    pub pruned_by_pivot: bool,
}

impl SearchTreeNode {
    /// Returns *true* if this invocation spawned no further invocations.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The recorded recursion tree of one enumeration run.
///
/// Nodes are append-only; the node at index `i` was the `i`-th invocation.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchTreeNode>,
}

impl SearchTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the entry of an invocation and links it to its parent.
    pub(crate) fn open_node(
        &mut self,
        parent: Option<TreeNodeId>,
        candidate: Option<Node>,
        clique: &[Node],
        x_size: NumNodes,
        p_size: NumNodes,
        pruned_by_pivot: bool,
    ) -> TreeNodeId {
        let id = self.nodes.len();
        self.nodes.push(SearchTreeNode {
            parent,
            children: Vec::new(),
            cliques_in_subtree: 0,
            depth: clique.len() as NumNodes,
            candidate,
            clique: clique.to_vec(),
            x_size,
            p_size,
            pruned_by_pivot,
        });

        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }

        id
    }

    /// Records the return of an invocation.
    pub(crate) fn close_node(&mut self, id: TreeNodeId, cliques_in_subtree: u64) {
        self.nodes[id].cliques_in_subtree = cliques_in_subtree;
    }

    /// Returns the number of recorded invocations.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all recorded nodes in creation order.
    pub fn nodes(&self) -> &[SearchTreeNode] {
        &self.nodes
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: TreeNodeId) -> &SearchTreeNode {
        &self.nodes[id]
    }

    /// Returns the ids of all outer roots in creation order.
    pub fn roots(&self) -> impl Iterator<Item = TreeNodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Returns for every node whether it lies inside a shadow branch, i.e.
    /// below (or at) a node whose candidate the pivot rule pruned.
    ///
    /// Parents are created before their children, so a single forward pass
    /// suffices.
    pub fn shadow_nodes(&self) -> Vec<bool> {
        let mut in_shadow = vec![false; self.nodes.len()];
        for (id, node) in self.nodes.iter().enumerate() {
            in_shadow[id] =
                node.pruned_by_pivot || node.parent.is_some_and(|parent| in_shadow[parent]);
        }
        in_shadow
    }

    /// Aggregates the recorded tree into summary statistics.
    pub fn stats(&self) -> SearchTreeStats {
        let mut stats = SearchTreeStats {
            total_nodes: self.nodes.len(),
            ..Default::default()
        };

        for (node, in_shadow) in self.nodes.iter().zip(self.shadow_nodes()) {
            stats.max_depth = stats.max_depth.max(node.depth);
            if node.is_leaf() {
                stats.leaf_nodes += 1;
            }
            if in_shadow {
                stats.pruned_nodes += 1;
            } else {
                stats.explored_nodes += 1;
            }
        }

        stats
    }
}

/// Summary statistics of a recorded [`SearchTree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchTreeStats {
    /// Number of recorded invocations.
    pub total_nodes: usize,
    /// Invocations on branches the pivot rule explored.
    pub explored_nodes: usize,
    /// Invocations inside shadow branches.
    pub pruned_nodes: usize,
    /// Invocations that spawned no further invocations.
    pub leaf_nodes: usize,
    /// Maximum clique size reached during the search.
    pub max_depth: NumNodes,
}

impl SearchTreeStats {
    /// Fraction of recorded invocations lying inside shadow branches, in percent.
    pub fn pruning_ratio(&self) -> f64 {
        if self.total_nodes == 0 {
            return 0.0;
        }
        self.pruned_nodes as f64 * 100.0 / self.total_nodes as f64
    }
}

impl Display for SearchTreeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Tree Statistics:")?;
        writeln!(f, "  Total nodes: {}", self.total_nodes)?;
        writeln!(f, "  Explored nodes (with pivot): {}", self.explored_nodes)?;
        writeln!(f, "  Pruned nodes (by pivot): {}", self.pruned_nodes)?;
        writeln!(f, "  Pruning ratio: {}%", self.pruning_ratio())?;
        writeln!(f, "  Leaf nodes: {}", self.leaf_nodes)?;
        writeln!(f, "  Max depth: {}", self.max_depth)
    }
}
