//! # Nodes
//!
//! Nodes are numbered `0` to `n - 1` if `n` is the number of nodes in the graph.
//! We use `u32` as most common graphs do not exceed `2^32` nodes, which saves
//! space compared to `u64/usize`.

use stream_bitset::bitset::BitSetImpl;

/// A node of a graph, identified by a dense index in `0..n`.
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
