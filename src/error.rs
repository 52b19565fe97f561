/*!
# Errors

There are only two failure kinds in this crate:
- [`GraphError::UnknownVertex`]: a start/target key passed to a query does not
  exist in the graph. A lookup on a meaningless identity cannot produce a
  meaningful result, so this is a hard failure.
- Malformed input while loading a graph from text: an unrecognized graph-type
  marker rejects the whole file ([`GraphError::InvalidHeader`]); individual
  malformed edge lines are recovered locally by skipping them.

Everything else ("no path", "unreachable target", empty graph) is an expected
outcome of a correct run and is modelled as `None`/empty results, never as an
error.
*/

use thiserror::Error;

/// Error type of all fallible graph operations, generic over the key type.
#[derive(Debug, Error)]
pub enum GraphError<K: std::fmt::Debug = String> {
    /// A referenced start/target vertex key does not exist in the graph.
    #[error("vertex {0:?} is not in the graph")]
    UnknownVertex(K),

    /// The graph-type marker of a text file is neither `D` nor `G`.
    #[error("invalid graph header: {0}")]
    InvalidHeader(String),

    /// An underlying IO failure while reading or writing a graph file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
