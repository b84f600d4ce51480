//! Shared test helpers: seeded random graphs, a set-based reference
//! enumerator to cross-check the optimized search, and a well-known
//! benchmark instance.

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::Rng;

use crate::{edge::*, node::*, ops::*, repr::AdjArrayUndir};

/// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`,
/// excluding self-loops.
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .filter_map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            (u != v).then(|| Edge(u, v).normalized())
        })
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();

    edges
}

/// Plain set-based Bron-Kerbosch without pivoting or ordering. Quadratic
/// bookkeeping, only suitable as a test oracle on small graphs.
pub(crate) fn reference_maximal_cliques(graph: &AdjArrayUndir) -> Vec<Vec<Node>> {
    fn extend(
        graph: &AdjArrayUndir,
        r: &mut Vec<Node>,
        mut p: Vec<Node>,
        mut x: Vec<Node>,
        out: &mut Vec<Vec<Node>>,
    ) {
        if p.is_empty() && x.is_empty() {
            out.push(r.iter().copied().sorted().collect_vec());
            return;
        }

        while let Some(&v) = p.last() {
            let child_p = p
                .iter()
                .copied()
                .filter(|&u| graph.has_edge(v, u))
                .collect_vec();
            let child_x = x
                .iter()
                .copied()
                .filter(|&u| graph.has_edge(v, u))
                .collect_vec();

            r.push(v);
            extend(graph, r, child_p, child_x, out);
            r.pop();

            p.pop();
            x.push(v);
        }
    }

    let mut out = Vec::new();
    let mut r = Vec::new();
    extend(
        graph,
        &mut r,
        graph.vertices().collect_vec(),
        Vec::new(),
        &mut out,
    );

    // every maximal clique must be reported exactly once
    let unique: FxHashSet<&Vec<Node>> = out.iter().collect();
    assert_eq!(unique.len(), out.len());

    out
}

/// Zachary's karate club (34 vertices, 78 edges). Its 36 maximal cliques
/// make it a handy end-to-end fixture.
pub(crate) const KARATE_CLUB: [(Node, Node); 78] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (0, 6),
    (0, 7),
    (0, 8),
    (0, 10),
    (0, 11),
    (0, 12),
    (0, 13),
    (0, 17),
    (0, 19),
    (0, 21),
    (0, 31),
    (1, 2),
    (1, 3),
    (1, 7),
    (1, 13),
    (1, 17),
    (1, 19),
    (1, 21),
    (1, 30),
    (2, 3),
    (2, 7),
    (2, 8),
    (2, 9),
    (2, 13),
    (2, 27),
    (2, 28),
    (2, 32),
    (3, 7),
    (3, 12),
    (3, 13),
    (4, 6),
    (4, 10),
    (5, 6),
    (5, 10),
    (5, 16),
    (6, 16),
    (8, 30),
    (8, 32),
    (8, 33),
    (9, 33),
    (13, 33),
    (14, 32),
    (14, 33),
    (15, 32),
    (15, 33),
    (18, 32),
    (18, 33),
    (19, 33),
    (20, 32),
    (20, 33),
    (22, 32),
    (22, 33),
    (23, 25),
    (23, 27),
    (23, 29),
    (23, 32),
    (23, 33),
    (24, 25),
    (24, 27),
    (24, 31),
    (25, 31),
    (26, 29),
    (26, 33),
    (27, 33),
    (28, 31),
    (28, 33),
    (29, 32),
    (29, 33),
    (30, 32),
    (30, 33),
    (31, 32),
    (31, 33),
    (32, 33),
];

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn random_edges_are_simple_and_distinct() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for _ in 0..10 {
            let edges = random_edges(rng, 20, 100);
            assert!(edges.iter().all(|e| !e.is_loop() && e.is_normalized()));
            assert!(edges.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn reference_on_bowtie() {
        let graph =
            AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 2), (0, 3), (0, 4), (3, 4)]);
        let mut cliques = reference_maximal_cliques(&graph);
        cliques.sort();
        assert_eq!(cliques, vec![vec![0, 1, 2], vec![0, 3, 4]]);
    }
}
