/*!
`maxcliques` enumerates all **maximal cliques** of an undirected simple graph
and can optionally record the recursion tree the search explores, so that a
downstream visualizer can replay the search step by step.

# Representation

**Nodes** are `u32` in the range `0..n` if `n` is the number of nodes in the
graph. **Edges** are a simple tuple-struct `Edge(Node, Node)`; all graphs are
undirected, so `Edge(u, v)` is treated as equivalent to `Edge(v, u)`. The
graph itself is stored as adjacency arrays ([`repr::AdjArrayUndir`]) whose
neighbor lists the enumerator may reorder in place.

# Algorithm

The enumeration is the Bron-Kerbosch backtracking scheme with two standard
accelerators: a *degeneracy ordering* ([`algo::DegeneracyOrder`]) drives the
outermost level, and inside each recursive call a *pivot* of maximum
candidate-degree prunes branches ([`algo::MaximalCliques`]). The recursion
keeps its three working sets inside a single shared vertex array and undoes
every restriction on backtrack, so the hot path is free of per-level copies.

With recording enabled ([`algo::SearchTree`]), every recursive call becomes a
tree node and the branches the pivot rule skips are replayed as *shadow
branches*, without affecting the reported count. The recorded tree can be
exported as CSV ([`io::SearchTreeCsvWriter`]).

# Usage

```
use maxcliques::prelude::*;
use maxcliques::algo::EnumerateCliques;

// two triangles sharing a vertex
let mut g = AdjArrayUndir::from_edges(
    5,
    [(0, 1), (0, 2), (1, 2), (0, 3), (0, 4), (3, 4)],
);
assert_eq!(g.number_of_maximal_cliques(), 2);
```
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `maxcliques::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
