/*!
# IO

Reading graphs from the plain text format and writing them out as DOT.

## Input format

```text
D
1,2,3,4
(1,2)
(2,4)
(3,4)
```

- The first non-comment line is the graph-type marker: `D` for directed,
  `G` for undirected. Anything else rejects the whole file.
- The second line lists the vertex keys, comma-separated.
- Every further line is one edge tuple: two fields for unweighted graphs,
  three (source, target, weight) for weighted ones.

Malformed edge lines (wrong arity, unparseable weight) are skipped, and edges
referencing unknown keys are dropped by the graph itself; neither aborts the
load. Only an invalid graph-type marker is fatal.

## Output

[`DotWriter`](dot::DotWriter) renders a graph in the
[DOT language](https://graphviz.org/doc/info/lang.html) of GraphViz.
*/

pub mod dot;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Graph, WeightedGraph},
};

/// Reader for the graph text format described in the [module docs](self).
///
/// Lines starting with the comment identifier (default `#`) are skipped.
#[derive(Debug, Clone)]
pub struct GraphTextReader {
    comment_identifier: String,
}

impl Default for GraphTextReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

/// Splits a line into fields on commas, keeping only alphanumeric characters
/// within each field (so `(1,2)` yields `1` and `2`).
fn fields(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(',')
        .map(|token| token.chars().filter(|c| c.is_alphanumeric()).collect())
        .filter(|field: &String| !field.is_empty())
}

/// Like [`fields`], but keeps `.` and `-` so numeric weights survive.
fn weight_field(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '.' || c == '-')
        .collect()
}

impl GraphTextReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Reads an unweighted graph from the given reader.
    ///
    /// # Errors
    /// [`GraphError::InvalidHeader`] if the graph-type marker is neither `D`
    /// nor `G`; [`GraphError::Io`] on underlying read failures.
    pub fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph<String>, GraphError> {
        let mut lines = self.content_lines(reader);

        let mut graph = Graph::new(self.parse_marker(lines.next().transpose()?)?);

        if let Some(line) = lines.next().transpose()? {
            for key in fields(&line) {
                graph.add_vertex(key);
            }
        }

        let mut skipped = 0usize;
        for line in lines {
            let line = line?;
            let mut parts = fields(&line);

            match (parts.next(), parts.next()) {
                (Some(from), Some(to)) => {
                    graph.add_edge(&from, &to);
                }
                _ => skipped += 1,
            }
        }

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            skipped,
            "read unweighted graph"
        );

        Ok(graph)
    }

    /// Reads an unweighted graph from a file.
    pub fn try_read_graph_file<P: AsRef<Path>>(&self, path: P) -> Result<Graph<String>, GraphError> {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }

    /// Reads a weighted graph from the given reader; every edge line carries
    /// a third numeric field. Edge lines with a missing or unparseable
    /// weight are skipped.
    ///
    /// # Errors
    /// [`GraphError::InvalidHeader`] if the graph-type marker is neither `D`
    /// nor `G`; [`GraphError::Io`] on underlying read failures.
    pub fn try_read_weighted_graph<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<WeightedGraph<String, f64>, GraphError> {
        let mut lines = self.content_lines(reader);

        let mut graph = WeightedGraph::new(self.parse_marker(lines.next().transpose()?)?);

        if let Some(line) = lines.next().transpose()? {
            for key in fields(&line) {
                graph.add_vertex(key);
            }
        }

        let mut skipped = 0usize;
        for line in lines {
            let line = line?;
            let mut parts = line.split(',');

            let edge = (|| {
                let from: String = fields(parts.next()?).next()?;
                let to: String = fields(parts.next()?).next()?;
                let weight: f64 = weight_field(parts.next()?).parse().ok()?;
                Some((from, to, weight))
            })();

            match edge {
                Some((from, to, weight)) => {
                    graph.add_edge_with(&from, &to, weight);
                }
                None => skipped += 1,
            }
        }

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            skipped,
            "read weighted graph"
        );

        Ok(graph)
    }

    /// Reads a weighted graph from a file.
    pub fn try_read_weighted_graph_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<WeightedGraph<String, f64>, GraphError> {
        self.try_read_weighted_graph(BufReader::new(File::open(path)?))
    }

    /// Returns an iterator over all non-comment, non-empty lines.
    fn content_lines<'a, R: BufRead + 'a>(
        &'a self,
        reader: R,
    ) -> impl Iterator<Item = std::io::Result<String>> + 'a {
        reader.lines().filter(move |line| match line {
            Ok(line) => {
                let line = line.trim();
                !line.is_empty() && !line.starts_with(&self.comment_identifier)
            }
            Err(_) => true,
        })
    }

    /// Parses the graph-type marker line. A missing or unrecognized marker
    /// rejects the whole file.
    fn parse_marker(&self, line: Option<String>) -> Result<bool, GraphError> {
        match line.as_deref().map(str::trim) {
            Some("D") => Ok(true),
            Some("G") => Ok(false),
            Some(other) => Err(GraphError::InvalidHeader(other.to_string())),
            None => Err(GraphError::InvalidHeader("<empty file>".to_string())),
        }
    }
}
