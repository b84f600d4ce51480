//! # Headers
//!
//! A header(-line) for a graph file is usually defined by a series of tokens
//! (separated by whitespace), defining the size of the graph. The plain
//! edge-list format used here starts with "{n} {m}"; other conventions
//! prepend problem identifiers, e.g. "p ds {n} {m}".

use smallvec::{smallvec, SmallVec};

use super::*;
use crate::{edge::NumEdges, node::NumNodes};

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Ignore entry
    Any,
    /// Match entry to str
    Str(String),
    /// Parse number of nodes
    NumNodes,
    /// Parse number of edges
    NumEdges,
}

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format:
/// ```
/// # use maxcliques::io::Header;
/// let format = Header::new().str("p").str("ds").number_of_nodes().number_of_edges();
/// ```
/// Tokens after the defined format are ignored when parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header(SmallVec<[HeaderToken; 4]>);

impl Default for Header {
    /// The plain edge-list convention: number of nodes and edges are the
    /// first and second token of the header.
    fn default() -> Self {
        Self(smallvec![HeaderToken::NumNodes, HeaderToken::NumEdges])
    }
}

impl Header {
    /// Creates a new empty format
    pub fn new() -> Self {
        Self(smallvec![])
    }

    /// Pushes a token that can be ignored onto the stack
    pub fn any(mut self) -> Self {
        self.0.push(HeaderToken::Any);
        self
    }

    /// Pushes a token that should match a string onto the stack
    pub fn str<S: Into<String>>(mut self, s: S) -> Self {
        self.0.push(HeaderToken::Str(s.into()));
        self
    }

    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> Self {
        self.0.push(HeaderToken::NumNodes);
        self
    }

    /// Adds the number of edges token onto the stack
    pub fn number_of_edges(mut self) -> Self {
        self.0.push(HeaderToken::NumEdges);
        self
    }

    /// Tries to parse the header and extract the number of nodes and edges.
    pub fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut number_of_nodes = 0;
        let mut number_of_edges = 0;

        let mut parts = line.split_ascii_whitespace();

        for token in &self.0 {
            match token {
                HeaderToken::Any => {
                    raise_error_unless!(
                        parts.next().is_some(),
                        ErrorKind::InvalidData,
                        "Header is shorter than expected"
                    );
                }
                HeaderToken::Str(p) => {
                    raise_error_unless!(
                        parts.next() == Some(p.as_str()),
                        ErrorKind::InvalidData,
                        "Invalid header found"
                    );
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
                }
                HeaderToken::NumEdges => {
                    number_of_edges = parse_next_value!(parts, "Header>Number of edges");
                }
            };
        }

        Ok((number_of_nodes, number_of_edges))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_header() {
        let (n, m) = Header::default().parse_header("34 78").unwrap();
        assert_eq!((n, m), (34, 78));
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let (n, m) = Header::default().parse_header("  5\t 3  ").unwrap();
        assert_eq!((n, m), (5, 3));
    }

    #[test]
    fn problem_header() {
        let header = Header::new()
            .str("p")
            .str("mc")
            .number_of_nodes()
            .number_of_edges();

        assert_eq!(header.parse_header("p mc 10 20").unwrap(), (10, 20));
        assert!(header.parse_header("p ds 10 20").is_err());
    }

    #[test]
    fn ignored_tokens() {
        let header = Header::new().any().number_of_nodes().number_of_edges();

        assert_eq!(header.parse_header("graph 4 2").unwrap(), (4, 2));
        assert!(header.parse_header("").is_err());
    }

    #[test]
    fn rejects_malformed_counts() {
        assert!(Header::default().parse_header("x y").is_err());
        assert!(Header::default().parse_header("5").is_err());
        assert!(Header::default().parse_header("").is_err());
    }
}
