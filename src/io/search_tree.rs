//! # Search-Tree CSV
//!
//! Serializes a recorded [`SearchTree`] into the CSV format consumed by the
//! web visualizer: one row per node plus a synthetic root row aggregating
//! all outer roots. List-valued fields (`children_ids`, `current_clique`)
//! are quoted and `;`-separated. Missing parents and candidates are encoded
//! as `-1`; the synthetic root uses `node_id = -1, parent_id = -2`.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Write},
    path::Path,
};

use itertools::Itertools;

use super::*;
use crate::algo::SearchTree;

/// Column names of the exported CSV, in order.
const CSV_HEADER: &str = "node_id,parent_id,children_ids,cliques_in_subtree,creation_order,\
                          depth,candidate_vertex,current_clique,x_size,p_size,pruned_by_pivot";

/// A writer serializing a [`SearchTree`] as CSV.
#[derive(Debug, Clone, Default)]
pub struct SearchTreeCsvWriter;

impl SearchTreeCsvWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Writes the tree to the provided writer.
    pub fn try_write<W: Write>(&self, tree: &SearchTree, mut writer: W) -> Result<()> {
        writeln!(writer, "{CSV_HEADER}")?;

        // synthetic root aggregating all outer roots
        let roots = tree.roots().collect_vec();
        let total: u64 = roots
            .iter()
            .map(|&id| tree.node(id).cliques_in_subtree)
            .sum();
        writeln!(
            writer,
            "-1,-2,\"{}\",{total},-1,-1,-1,\"\",0,0,false",
            roots.iter().map(|id| id.to_string()).join(";")
        )?;

        for (id, node) in tree.nodes().iter().enumerate() {
            let parent = node.parent.map(|p| p as i64).unwrap_or(-1);
            let candidate = node.candidate.map(|c| c as i64).unwrap_or(-1);

            writeln!(
                writer,
                "{id},{parent},\"{}\",{},{id},{},{candidate},\"{}\",{},{},{}",
                node.children.iter().map(|c| c.to_string()).join(";"),
                node.cliques_in_subtree,
                node.depth,
                node.clique.iter().map(|v| v.to_string()).join(";"),
                node.x_size,
                node.p_size,
                node.pruned_by_pivot,
            )?;
        }

        Ok(())
    }

    /// Writes the tree to a file, wrapped in a buffered writer.
    pub fn try_write_file<P: AsRef<Path>>(&self, tree: &SearchTree, path: P) -> Result<()> {
        self.try_write(tree, BufWriter::new(File::create(path)?))
    }
}

/// One parsed CSV row, with sentinels kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTreeCsvRow {
    pub node_id: i64,
    pub parent_id: i64,
    pub children_ids: Vec<i64>,
    pub cliques_in_subtree: u64,
    pub creation_order: i64,
    pub depth: i64,
    pub candidate_vertex: i64,
    pub current_clique: Vec<i64>,
    pub x_size: u64,
    pub p_size: u64,
    pub pruned_by_pivot: bool,
}

impl SearchTreeCsvRow {
    /// Returns *true* for the synthetic root row.
    pub fn is_synthetic_root(&self) -> bool {
        self.node_id == -1
    }
}

/// A reader parsing the CSV produced by [`SearchTreeCsvWriter`].
#[derive(Debug, Clone, Default)]
pub struct SearchTreeCsvReader;

impl SearchTreeCsvReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Parses all rows, including the synthetic root.
    pub fn try_read<R: BufRead>(&self, reader: R) -> Result<Vec<SearchTreeCsvRow>> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or(io_error!(ErrorKind::NotFound, "CSV header not found"))??;
        raise_error_unless!(
            header == CSV_HEADER,
            ErrorKind::InvalidData,
            "Unexpected CSV header"
        );

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            rows.push(parse_row(&line)?);
        }

        Ok(rows)
    }
}

/// Splits a `;`-separated quoted list field into numbers.
fn parse_list(field: &str) -> Result<Vec<i64>> {
    let inner = field.trim_matches('"');
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(';')
        .map(|t| {
            t.parse()
                .map_err(|_| io_error!(ErrorKind::InvalidData, format!("Invalid list entry {t:?}")))
        })
        .collect()
}

fn parse_row(line: &str) -> Result<SearchTreeCsvRow> {
    // list fields contain no commas, so a plain split is sufficient
    let mut fields = line.split(',');

    macro_rules! next_list {
        ($name : expr) => {{
            let field = fields.next().ok_or(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of row when parsing {}.", $name)
            ))?;
            parse_list(field)?
        }};
    }

    Ok(SearchTreeCsvRow {
        node_id: parse_next_value!(fields, "node_id"),
        parent_id: parse_next_value!(fields, "parent_id"),
        children_ids: next_list!("children_ids"),
        cliques_in_subtree: parse_next_value!(fields, "cliques_in_subtree"),
        creation_order: parse_next_value!(fields, "creation_order"),
        depth: parse_next_value!(fields, "depth"),
        candidate_vertex: parse_next_value!(fields, "candidate_vertex"),
        current_clique: next_list!("current_clique"),
        x_size: parse_next_value!(fields, "x_size"),
        p_size: parse_next_value!(fields, "p_size"),
        pruned_by_pivot: parse_next_value!(fields, "pruned_by_pivot"),
    })
}
