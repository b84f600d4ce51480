/*!
# Graph Representation

An undirected graph stored as adjacency arrays (`Vec<Node>` per vertex).

- Flexible, simple representation with fast neighbor iteration.
- Neighbor lists expose slice-level access ([`NeighborsSlice`] /
  [`NeighborsSliceMut`]) so that algorithms may reorder them in place.

The order of neighbors inside each list is **not** a static property: the
clique enumerator permutes lists during its operation and guarantees that
afterwards each list is a permutation of the original neighbor set.
*/

use std::{iter::Copied, ops::Range, slice::Iter};

use crate::{edge::*, node::*, ops::*};

/// Undirected graph using adjacency arrays (`Vec<Node>`).
///
/// Edges are always undirected, i.e., adding `(u, v)` also affects `(v, u)`
/// unless `u == v`.
#[derive(Debug, Clone, Default)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNew for AdjArrayUndir {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for AdjArrayUndir {
    type VertexIter<'a> = Range<Node>;

    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> Self::VertexIter<'_> {
        0..self.number_of_nodes()
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArrayUndir {
    type NeighborIter<'a> = Copied<Iter<'a, Node>>;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphEdgeEditing for AdjArrayUndir {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            return true;
        }

        self.nbs[u as usize].push(v);
        if u != v {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;

        false
    }
}

impl NeighborsSlice for AdjArrayUndir {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl NeighborsSliceMut for AdjArrayUndir {
    fn as_neighbors_slice_mut(&mut self, u: Node) -> &mut [Node] {
        &mut self.nbs[u as usize]
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_edges;

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = AdjArrayUndir::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);

            assert_eq!(graph.vertices_range().len(), n as usize);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn adjacency_list() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5, n * 10] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, m_ub as NumEdges);

                    let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                    for &Edge(u, v) in &edges {
                        adj_matrix[u as usize].set_bit(v);
                        adj_matrix[v as usize].set_bit(u);
                    }

                    let graph = AdjArrayUndir::from_edges(n, edges.iter());

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                    for u in 0..n {
                        assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                        assert_eq!(
                            NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u)),
                            adj_matrix[u as usize]
                        );
                        for v in 0..n {
                            assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn try_add_edge() {
        let mut graph = AdjArrayUndir::new(3);
        assert!(!graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn self_loop_single_entry() {
        let mut graph = AdjArrayUndir::new(2);
        graph.add_edge(1, 1);
        assert_eq!(graph.as_neighbors_slice(1), &[1]);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn slice_reordering_keeps_sets() {
        let mut graph = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        graph.as_neighbors_slice_mut(0).swap(0, 2);
        let mut nbs = graph.as_neighbors_slice(0).to_vec();
        nbs.sort_unstable();
        assert_eq!(nbs, vec![1, 2, 3]);
        assert_eq!(graph.number_of_edges(), 3);
    }
}
