//! # Dot
//!
//! The Dot-Format is an extensive format used by [GraphViz](https://graphviz.org/) for
//! detailed visualizations. We only use basic functionality: nodes labeled with their
//! keys, edges, and weight labels on weighted edges.
//!
//! ```
//! use kgraphs::{graph::Graph, io::dot::DotWriter};
//!
//! let mut graph = Graph::directed();
//! graph.add_vertex("a");
//! graph.add_vertex("b");
//! graph.add_edge(&"a", &"b");
//!
//! let mut out = Vec::new();
//! DotWriter::new().try_write_graph(&mut out, &graph).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph {\n  \"a\" -> \"b\";\n}\n"
//! );
//! ```
use std::{
    fmt::Display,
    io::{Result, Write},
};

use crate::{
    graph::{GraphKey, KeyedGraph},
    weight::EdgeWeight,
};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Indentation put before every edge line (default: two spaces)
    indent: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation used for edge lines
    pub fn indent<S: Into<String>>(mut self, indent: S) -> Self {
        self.indent = indent.into();
        self
    }

    /// Writes an unweighted graph. Undirected edges are emitted once, in their
    /// normalized direction; isolated vertices appear as bare node statements
    /// so they are not lost.
    pub fn try_write_graph<W, K>(&self, writer: &mut W, graph: &KeyedGraph<K, ()>) -> Result<()>
    where
        W: Write,
        K: GraphKey + Display,
    {
        self.try_write_with(writer, graph, |_, _| Ok(()))
    }

    /// Writes a weighted graph, attaching every edge's weight as its label.
    pub fn try_write_weighted_graph<W, K, Wt>(
        &self,
        writer: &mut W,
        graph: &KeyedGraph<K, Wt>,
    ) -> Result<()>
    where
        W: Write,
        K: GraphKey + Display,
        Wt: EdgeWeight + Display,
    {
        self.try_write_with(writer, graph, |writer, weight| {
            write!(writer, " [label=\"{weight}\"]")
        })
    }

    /// Shared writer core: `attrs` appends the attribute list of one edge.
    fn try_write_with<W, K, P, F>(
        &self,
        writer: &mut W,
        graph: &KeyedGraph<K, P>,
        attrs: F,
    ) -> Result<()>
    where
        W: Write,
        K: GraphKey + Display,
        P: Copy,
        F: Fn(&mut W, P) -> Result<()>,
    {
        let graph_name = if graph.is_directed() { "digraph" } else { "graph" };
        let edge_dir = if graph.is_directed() { "->" } else { "--" };

        writeln!(writer, "{graph_name} {{")?;

        let mut incident = vec![false; graph.len()];
        for (u, v, _) in graph.edges(false) {
            incident[u as usize] = true;
            incident[v as usize] = true;
        }
        for u in graph.nodes() {
            if !incident[u as usize] {
                writeln!(writer, "{}\"{}\";", self.indent, graph.key_of(u))?;
            }
        }

        for (u, v, payload) in graph.edges(!graph.is_directed()) {
            write!(
                writer,
                "{}\"{}\" {edge_dir} \"{}\"",
                self.indent,
                graph.key_of(u),
                graph.key_of(v)
            )?;
            attrs(writer, payload)?;
            writeln!(writer, ";")?;
        }

        writeln!(writer, "}}")
    }
}
