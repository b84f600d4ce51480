//! # Degeneracy Ordering
//!
//! A degeneracy ordering emits vertices one by one, always picking a vertex
//! of minimum residual degree among those not yet emitted. The largest
//! residual degree seen at emission time is the graph's *degeneracy*.
//!
//! Driving a clique search in this order bounds the size of the candidate
//! set of every outer call by the degeneracy, which is small on most real
//! graphs.

use itertools::Itertools;

use crate::{node::*, ops::*};

/// A degeneracy ordering of a graph, together with its inverse permutation
/// and the degeneracy itself.
pub struct DegeneracyOrdering {
    order: Vec<Node>,
    rank: Vec<NumNodes>,
    degeneracy: NumNodes,
}

impl DegeneracyOrdering {
    /// The vertices in emission order.
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// The position of vertex `u` in the ordering.
    ///
    /// Inverse of [`DegeneracyOrdering::order`]: `order()[rank_of(u)] == u`.
    ///
    /// **Panics if `u >= n`.**
    #[inline]
    pub fn rank_of(&self, u: Node) -> NumNodes {
        self.rank[u as usize]
    }

    /// The degeneracy of the graph, i.e. the maximum residual degree any
    /// vertex had when it was emitted.
    pub fn degeneracy(&self) -> NumNodes {
        self.degeneracy
    }

    /// Number of ordered vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns *true* if the ordering covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Computes a degeneracy ordering of a graph.
///
/// # Examples
/// ```
/// use maxcliques::prelude::*;
/// use maxcliques::algo::DegeneracyOrder;
///
/// // a path has degeneracy 1
/// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let ordering = g.degeneracy_ordering();
/// assert_eq!(ordering.degeneracy(), 1);
/// ```
pub trait DegeneracyOrder: AdjacencyList {
    /// Computes a degeneracy ordering using a bucket queue keyed on residual
    /// degree.
    ///
    /// Runs in `O(n + m)`. Tie-breaking among vertices of equal residual
    /// degree is arbitrary but deterministic; it does not affect the
    /// correctness of clique enumeration, only the shape of the search.
    fn degeneracy_ordering(&self) -> DegeneracyOrdering {
        let n = self.len();

        let mut deg = self
            .vertices_range()
            .map(|u| self.degree_of(u))
            .collect_vec();
        let mut buckets: Vec<Vec<Node>> = vec![Vec::new(); self.max_degree() as usize + 1];
        // position of each vertex inside its bucket, for O(1) removal
        let mut slot = vec![0 as NumNodes; n];

        for u in self.vertices() {
            let d = deg[u as usize] as usize;
            slot[u as usize] = buckets[d].len() as NumNodes;
            buckets[d].push(u);
        }

        let mut emitted = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(n);
        let mut rank = vec![0 as NumNodes; n];
        let mut degeneracy = 0;

        // Scan the buckets upwards. A pop at level d can only drop residual
        // degrees to d - 1, so restarting the scan at max(0, d - 1) never
        // skips a non-empty smaller bucket.
        let mut d = 0;
        while order.len() < n {
            let Some(v) = buckets[d].pop() else {
                d += 1;
                continue;
            };

            emitted.set_bit(v);
            rank[v as usize] = order.len() as NumNodes;
            order.push(v);
            degeneracy = degeneracy.max(d as NumNodes);

            for u in self.neighbors_of(v) {
                if emitted.get_bit(u) {
                    continue;
                }

                let du = deg[u as usize] as usize;
                let s = slot[u as usize] as usize;
                buckets[du].swap_remove(s);
                if s < buckets[du].len() {
                    slot[buckets[du][s] as usize] = s as NumNodes;
                }

                deg[u as usize] -= 1;
                slot[u as usize] = buckets[du - 1].len() as NumNodes;
                buckets[du - 1].push(u);
            }

            d = d.saturating_sub(1);
        }

        DegeneracyOrdering {
            order,
            rank,
            degeneracy,
        }
    }
}

impl<G: AdjacencyList> DegeneracyOrder for G {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{ops::GraphFromScratch, repr::AdjArrayUndir, testing::random_edges};

    /// Reference degeneracy by repeatedly peeling a minimum-degree vertex.
    fn naive_degeneracy(graph: &AdjArrayUndir) -> NumNodes {
        let n = graph.len();
        let mut alive = vec![true; n];
        let mut deg = graph.vertices().map(|u| graph.degree_of(u)).collect_vec();

        let mut degeneracy = 0;
        for _ in 0..n {
            let v = (0..n)
                .filter(|&u| alive[u])
                .min_by_key(|&u| deg[u])
                .unwrap();

            degeneracy = degeneracy.max(deg[v]);
            alive[v] = false;
            for u in graph.neighbors_of(v as Node) {
                if alive[u as usize] {
                    deg[u as usize] -= 1;
                }
            }
        }

        degeneracy
    }

    fn assert_valid_ordering(graph: &AdjArrayUndir, ordering: &DegeneracyOrdering) {
        assert_eq!(ordering.len(), graph.len());

        // order and rank are inverse permutations
        for (i, &v) in ordering.order().iter().enumerate() {
            assert_eq!(ordering.rank_of(v), i as NumNodes);
        }

        // no vertex has more later-ranked neighbors than the degeneracy
        for v in graph.vertices() {
            let later = graph
                .neighbors_of(v)
                .filter(|&u| ordering.rank_of(u) > ordering.rank_of(v))
                .count() as NumNodes;
            assert!(later <= ordering.degeneracy());
        }
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArrayUndir::new(0);
        let ordering = graph.degeneracy_ordering();
        assert!(ordering.is_empty());
        assert_eq!(ordering.degeneracy(), 0);
    }

    #[test]
    fn isolated_vertices() {
        let graph = AdjArrayUndir::new(5);
        let ordering = graph.degeneracy_ordering();
        assert_eq!(ordering.len(), 5);
        assert_eq!(ordering.degeneracy(), 0);
    }

    #[test]
    fn known_degeneracies() {
        // path
        let path = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(path.degeneracy_ordering().degeneracy(), 1);

        // star
        let star = AdjArrayUndir::from_edges(6, (1..6).map(|u| (0, u)));
        assert_eq!(star.degeneracy_ordering().degeneracy(), 1);

        // cycle
        let cycle = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert_eq!(cycle.degeneracy_ordering().degeneracy(), 2);

        // complete graph
        let complete =
            AdjArrayUndir::from_edges(5, (0..5).flat_map(|u| (u + 1..5).map(move |v| (u, v))));
        assert_eq!(complete.degeneracy_ordering().degeneracy(), 4);
    }

    #[test]
    fn randomized() {
        let rng = &mut Pcg64Mcg::seed_from_u64(123456);

        for n in [2 as NumNodes, 5, 10, 30, 60] {
            for m_ub in [n, n * 2, n * 4] {
                for _ in 0..10 {
                    let graph = AdjArrayUndir::from_edges(n, random_edges(rng, n, m_ub));
                    let ordering = graph.degeneracy_ordering();

                    assert_valid_ordering(&graph, &ordering);
                    assert_eq!(ordering.degeneracy(), naive_degeneracy(&graph));
                }
            }
        }
    }
}
