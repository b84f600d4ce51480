/*!
# Maximal Clique Enumeration

Pivoted Bron-Kerbosch over a degeneracy ordering.

For every vertex `v` in degeneracy order, one outer subproblem is solved:
find all maximal cliques containing `v` whose remaining vertices rank after
`v`. Earlier-ranked neighbors form the exclusion set X, later-ranked ones the
candidate set P. Inside a subproblem the recursion keeps X and P in a single
shared vertex array, split by index, and a position map locates every placed
vertex in `O(1)`. All set restrictions are performed in place by swapping and
are undone on backtrack, so the recursion itself never copies X or P.

Each adjacency list is kept partitioned so that neighbors currently in P form
a prefix. Scans may therefore stop at the first entry whose position falls
outside the current candidate window, which makes pivot selection and child
construction linear in the sizes of the involved sets.
*/

use itertools::Itertools;
use tracing::debug;

use super::{DegeneracyOrder, DegeneracyOrdering, SearchTree, TreeNodeId};
use crate::{node::*, ops::*};

/// Sentinel for vertices not placed in the shared vertex array.
const UNPLACED: NumNodes = NumNodes::MAX;

/// The outcome of one enumeration run.
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Number of maximal cliques of the graph.
    pub num_cliques: u64,
    /// The recorded recursion tree, if recording was enabled.
    pub search_tree: Option<SearchTree>,
}

/// Configurable maximal-clique enumerator.
///
/// # Examples
/// ```
/// use maxcliques::prelude::*;
/// use maxcliques::algo::MaximalCliques;
///
/// // two triangles sharing vertex 0
/// let mut g = AdjArrayUndir::from_edges(
///     5,
///     [(0, 1), (0, 2), (1, 2), (0, 3), (0, 4), (3, 4)],
/// );
///
/// let result = MaximalCliques::new().run(&mut g);
/// assert_eq!(result.num_cliques, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaximalCliques {
    record_search_tree: bool,
}

impl MaximalCliques {
    /// Creates a new enumerator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables search-tree recording (mutable setter).
    ///
    /// Recording also explores the branches the pivot rule prunes, which can
    /// be substantially slower. The reported clique count is unaffected.
    pub fn set_record_search_tree(&mut self, record: bool) {
        self.record_search_tree = record;
    }

    /// Enables or disables search-tree recording (builder style).
    pub fn record_search_tree(mut self, record: bool) -> Self {
        self.set_record_search_tree(record);
        self
    }

    /// Enumerates all maximal cliques of the graph.
    ///
    /// The graph's adjacency lists are reordered during the run; afterwards
    /// each list is a permutation of its original neighbor set.
    pub fn run<G>(&self, graph: &mut G) -> Enumeration
    where
        G: AdjacencyList + NeighborsSliceMut + Clone,
    {
        let ordering = graph.degeneracy_ordering();
        debug!(
            degeneracy = ordering.degeneracy(),
            "computed degeneracy ordering"
        );

        let n = graph.len();
        let mut search = CliqueSearch {
            graph,
            vl: Vec::new(),
            pos: vec![UNPLACED; n],
            clique: Vec::new(),
            num_cliques: 0,
            tree: self.record_search_tree.then(SearchTree::new),
        };
        search.run(&ordering);

        debug!(num_cliques = search.num_cliques, "enumeration finished");

        Enumeration {
            num_cliques: search.num_cliques,
            search_tree: search.tree,
        }
    }
}

/// Counts maximal cliques with default settings.
///
/// # Examples
/// ```
/// use maxcliques::prelude::*;
/// use maxcliques::algo::EnumerateCliques;
///
/// let mut g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
/// assert_eq!(g.number_of_maximal_cliques(), 1);
/// ```
pub trait EnumerateCliques: AdjacencyList + NeighborsSliceMut + Clone {
    /// Counts all maximal cliques of the graph.
    ///
    /// Reorders adjacency lists during the run; their sets are unchanged.
    fn number_of_maximal_cliques(&mut self) -> u64 {
        MaximalCliques::new().run(self).num_cliques
    }
}

impl<G: AdjacencyList + NeighborsSliceMut + Clone> EnumerateCliques for G {}

/// Recorder context of one recursive call.
#[derive(Debug, Clone, Copy)]
struct TreeLink {
    parent: Option<TreeNodeId>,
    candidate: Option<Node>,
    /// The candidate of this call was pruned by the pivot rule.
    pruned: bool,
    /// This call lies inside a shadow branch; its cliques are not counted.
    shadow: bool,
}

impl TreeLink {
    fn root() -> Self {
        Self {
            parent: None,
            candidate: None,
            pruned: false,
            shadow: false,
        }
    }
}

/// Working state of one enumeration run.
struct CliqueSearch<'a, G> {
    graph: &'a mut G,
    /// Shared vertex array holding X at `[x_begin, p_begin)` and P at
    /// `[p_begin, e_end)` of the current call.
    vl: Vec<Node>,
    /// Index of each vertex in `vl`, or [`UNPLACED`].
    pos: Vec<NumNodes>,
    /// The clique under construction (R).
    clique: Vec<Node>,
    num_cliques: u64,
    tree: Option<SearchTree>,
}

impl<G> CliqueSearch<'_, G>
where
    G: AdjacencyList + NeighborsSliceMut + Clone,
{
    /// Runs one outer subproblem per vertex in degeneracy order.
    fn run(&mut self, ordering: &DegeneracyOrdering) {
        for (i, &v) in ordering.order().iter().enumerate() {
            let rank_v = i as NumNodes;

            // earlier-ranked neighbors are already handled elsewhere and
            // form X, later-ranked ones the candidate set P
            self.vl.clear();
            for &u in self.graph.as_neighbors_slice(v) {
                if ordering.rank_of(u) < rank_v {
                    self.vl.push(u);
                }
            }
            let p_begin = self.vl.len();
            for &u in self.graph.as_neighbors_slice(v) {
                if ordering.rank_of(u) > rank_v {
                    self.vl.push(u);
                }
            }
            let e_end = self.vl.len();

            for j in 0..e_end {
                self.pos[self.vl[j] as usize] = j as NumNodes;
            }

            // establish the candidate-prefix convention on all placed vertices
            for j in 0..e_end {
                let u = self.vl[j];
                let pos = &self.pos;
                let list = self.graph.as_neighbors_slice_mut(u);
                let mut write = 0;
                for read in 0..list.len() {
                    let p = pos[list[read] as usize] as usize;
                    if (p_begin..e_end).contains(&p) {
                        list.swap(write, read);
                        write += 1;
                    }
                }
            }

            self.clique.push(v);
            self.enumerate(0, p_begin, e_end, TreeLink::root());
            self.clique.pop();

            for j in 0..e_end {
                self.pos[self.vl[j] as usize] = UNPLACED;
            }
        }
    }

    /// One recursive call on the window `X = vl[x_begin..p_begin)`,
    /// `P = vl[p_begin..e_end)`. Returns the number of maximal cliques in
    /// this subtree and leaves window, position map and adjacency lists as
    /// it found them (up to permutation within the window regions).
    fn enumerate(
        &mut self,
        x_begin: usize,
        p_begin: usize,
        e_end: usize,
        link: TreeLink,
    ) -> u64 {
        debug_assert!(x_begin <= p_begin && p_begin <= e_end);

        let node_id = match &mut self.tree {
            Some(tree) => Some(tree.open_node(
                link.parent,
                link.candidate,
                &self.clique,
                (p_begin - x_begin) as NumNodes,
                (e_end - p_begin) as NumNodes,
                link.pruned,
            )),
            None => None,
        };

        // R is maximal exactly if X and P are both exhausted; an empty P
        // with a non-empty X extends a clique reported elsewhere
        if x_begin == p_begin && p_begin == e_end {
            if !link.shadow {
                self.num_cliques += 1;
            }
            if let Some(tree) = &mut self.tree {
                tree.close_node(node_id.unwrap(), 1);
            }
            return 1;
        }

        // pivot: the vertex of X ∪ P with the most candidate neighbors
        let pivot = (x_begin..e_end)
            .map(|i| self.vl[i])
            .max_by_key(|&u| self.candidate_degree(u, p_begin, e_end))
            .unwrap();

        // mark the P-offsets of the pivot's candidate neighbors
        let mut pivot_adj = NodeBitSet::new((e_end - p_begin) as NumNodes);
        for &w in self.graph.as_neighbors_slice(pivot) {
            let p = self.pos[w as usize] as usize;
            if !(p_begin..e_end).contains(&p) {
                break;
            }
            pivot_adj.set_bit((p - p_begin) as NumNodes);
        }

        // only candidates not adjacent to the pivot need to be branched on
        let branch_candidates = (p_begin..e_end)
            .filter(|&i| !pivot_adj.get_bit((i - p_begin) as NumNodes))
            .map(|i| self.vl[i])
            .collect_vec();

        // the pruned ones are only of interest when recording
        let pruned_candidates = if self.tree.is_some() {
            (p_begin..e_end)
                .filter(|&i| pivot_adj.get_bit((i - p_begin) as NumNodes))
                .map(|i| self.vl[i])
                .collect_vec()
        } else {
            Vec::new()
        };

        let mut p_begin = p_begin;
        let mut total = 0u64;

        for &c in &branch_candidates {
            let (num_x, num_p) = self.narrow_to(c, x_begin, p_begin, e_end);

            self.clique.push(c);
            total += self.enumerate(
                p_begin - num_x,
                p_begin,
                p_begin + num_p,
                TreeLink {
                    parent: node_id,
                    candidate: Some(c),
                    pruned: false,
                    shadow: link.shadow,
                },
            );
            self.clique.pop();

            self.restore_adjacencies(c, p_begin - num_x, p_begin, p_begin + num_p, e_end);

            // retire c from P into X so later branches exclude it
            let pc = self.pos[c as usize] as usize;
            self.swap_entries(p_begin, pc);
            p_begin += 1;
        }

        // hand the consumed candidates back to P for the caller
        for (i, &c) in branch_candidates.iter().enumerate() {
            let pc = self.pos[c as usize] as usize;
            self.swap_entries(p_begin - i - 1, pc);
        }

        if !pruned_candidates.is_empty() {
            self.explore_shadow_branches(
                x_begin,
                p_begin,
                e_end,
                &pruned_candidates,
                node_id.unwrap(),
            );
        }

        if let Some(tree) = &mut self.tree {
            tree.close_node(node_id.unwrap(), total);
        }

        total
    }

    /// Restricts X and P to the neighbors of `c` by swapping them next to
    /// the split index, then re-establishes the candidate-prefix convention
    /// for the new window. Returns the number of surviving X and P members.
    fn narrow_to(
        &mut self,
        c: Node,
        x_begin: usize,
        p_begin: usize,
        e_end: usize,
    ) -> (usize, usize) {
        // move the X members adjacent to c to the right end of X
        let mut num_x = 0;
        let mut j = p_begin;
        while j > x_begin {
            j -= 1;
            let u = self.vl[j];
            if self.is_adjacent_in_window(u, c, p_begin, e_end) {
                num_x += 1;
                self.swap_entries(j, p_begin - num_x);
            }
        }

        // move the P members adjacent to c to the front of P
        let mut num_p = 0;
        for j in p_begin..e_end {
            let u = self.vl[j];
            if self.is_adjacent_in_window(u, c, p_begin, e_end) {
                self.swap_entries(j, p_begin + num_p);
                num_p += 1;
            }
        }

        // partition each adjacency list of the new window so that surviving
        // candidates come first; entries beyond the enclosing window cannot
        // occur before the break thanks to the caller's convention
        for i in (p_begin - num_x)..(p_begin + num_p) {
            let u = self.vl[i];
            let pos = &self.pos;
            let list = self.graph.as_neighbors_slice_mut(u);
            let mut write = 0;
            for read in 0..list.len() {
                let p = pos[list[read] as usize] as usize;
                if !(p_begin..e_end).contains(&p) {
                    break;
                }
                if p < p_begin + num_p {
                    list.swap(write, read);
                    write += 1;
                }
            }
        }

        (num_x, num_p)
    }

    /// Undoes the list partitioning of [`CliqueSearch::narrow_to`] for the
    /// branching vertex `c`: in every adjacency list of the window, `c` is
    /// rotated to the end of the prefix of entries still inside the
    /// enclosing candidate window, which restores the caller's convention.
    fn restore_adjacencies(
        &mut self,
        c: Node,
        win_begin: usize,
        p_begin: usize,
        win_end: usize,
        e_end: usize,
    ) {
        for i in win_begin..win_end {
            let u = self.vl[i];
            let pos = &self.pos;
            let list = self.graph.as_neighbors_slice_mut(u);

            let mut at = 0;
            while list[at] != c {
                at += 1;
            }
            let mut end = at + 1;
            while end < list.len() && (p_begin..e_end).contains(&(pos[list[end] as usize] as usize))
            {
                end += 1;
            }
            list[at..end].rotate_left(1);
        }
    }

    /// Replays the branches the pivot rule skipped so the recorded tree also
    /// covers the pruned search space. State is snapshotted up front and
    /// restored around every branch; cliques found here never reach the
    /// global count.
    fn explore_shadow_branches(
        &mut self,
        x_begin: usize,
        p_begin: usize,
        e_end: usize,
        pruned_candidates: &[Node],
        parent: TreeNodeId,
    ) {
        let vl_snapshot = self.vl.clone();
        let pos_snapshot = self.pos.clone();
        let graph_snapshot = self.graph.clone();

        for &c in pruned_candidates {
            self.vl.copy_from_slice(&vl_snapshot);
            self.pos.copy_from_slice(&pos_snapshot);
            *self.graph = graph_snapshot.clone();

            let (num_x, num_p) = self.narrow_to(c, x_begin, p_begin, e_end);

            self.clique.push(c);
            self.enumerate(
                p_begin - num_x,
                p_begin,
                p_begin + num_p,
                TreeLink {
                    parent: Some(parent),
                    candidate: Some(c),
                    pruned: true,
                    shadow: true,
                },
            );
            self.clique.pop();
        }

        self.vl.copy_from_slice(&vl_snapshot);
        self.pos.copy_from_slice(&pos_snapshot);
        *self.graph = graph_snapshot;
    }

    /// Swaps two entries of the shared vertex array, keeping the position
    /// map consistent.
    #[inline]
    fn swap_entries(&mut self, i: usize, j: usize) {
        self.vl.swap(i, j);
        self.pos[self.vl[i] as usize] = i as NumNodes;
        self.pos[self.vl[j] as usize] = j as NumNodes;
    }

    /// Number of neighbors of `u` inside the current candidate window,
    /// obtained by walking the prefix of its adjacency list.
    #[inline]
    fn candidate_degree(&self, u: Node, p_begin: usize, e_end: usize) -> usize {
        self.graph
            .as_neighbors_slice(u)
            .iter()
            .take_while(|&&w| {
                let p = self.pos[w as usize] as usize;
                (p_begin..e_end).contains(&p)
            })
            .count()
    }

    /// Checks whether `u` is adjacent to `c`, relying on `c` lying in the
    /// current candidate window and on the prefix convention of `adj[u]`.
    #[inline]
    fn is_adjacent_in_window(&self, u: Node, c: Node, p_begin: usize, e_end: usize) -> bool {
        for &w in self.graph.as_neighbors_slice(u) {
            let p = self.pos[w as usize] as usize;
            if !(p_begin..e_end).contains(&p) {
                return false;
            }
            if w == c {
                return true;
            }
        }
        false
    }
}
