//! # EdgeList
//!
//! The EdgeList-Format consists of a header, followed by `m` non-comment
//! lines `u v` representing an undirected edge `Edge(u, v)` with
//! `0 <= u, v < n`. Tokens may be separated by arbitrary whitespace.

use std::{
    fs::File,
    io::{BufRead, ErrorKind, Lines},
    path::Path,
};

use super::*;
use crate::{
    edge::{Edge, NumEdges},
    node::NumNodes,
    ops::GraphFromScratch,
};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = EdgeListLines::new(reader, &self.comment_identifier);

        let header_line = lines
            .next_relevant_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (n, m) = self.header.parse_header(&header_line)?;

        let mut edges = Vec::with_capacity(m as usize);
        for _ in 0..m {
            let line = lines.next_relevant_line()?.ok_or(io_error!(
                ErrorKind::InvalidData,
                "Premature end of input while reading edges"
            ))?;
            edges.push(parse_edge_line(&line, n)?);
        }

        Ok(G::from_edges(n, edges))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line source that skips blank and comment lines
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            comment_identifier,
        }
    }

    /// Returns the next non-blank non-comment line if it exists or propagates an error
    fn next_relevant_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) => {}
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Tries to parse an edge from a line
fn parse_edge_line(line: &str, n: NumNodes) -> Result<Edge> {
    let mut parts = line.split_ascii_whitespace();

    let from: NumNodes = parse_next_value!(parts, "Source node");
    let dest: NumNodes = parse_next_value!(parts, "Target node");

    raise_error_unless!(
        from < n && dest < n,
        ErrorKind::InvalidData,
        format!("Edge ({from}, {dest}) out of range for {n} nodes")
    );

    Ok(Edge(from, dest))
}
