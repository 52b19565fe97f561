/*!
# Edge Weights

Weighted graphs attach a numeric payload to every edge. Instead of committing
to one number type, algorithms are generic over anything that is finite,
comparable and summable. The blanket [`EdgeWeight`] trait captures exactly
that; `u32`, `u64`, `i64`, `f64`, ... all qualify.

Dijkstra and both MST algorithms never materialize an "infinity" value:
not-yet-known distances are `Option<W>` with `None` playing the role of
`+inf`, so no `Bounded`-style requirement leaks into the trait.
*/

use std::ops::Add;

use num::Zero;

/// Numeric edge payload usable by the weighted algorithms.
///
/// Dijkstra is only specified for non-negative weights; negative weights
/// produce incorrect results (not a crash). This is a caller precondition
/// and deliberately not encoded in the trait.
pub trait EdgeWeight: Copy + PartialOrd + Add<Output = Self> + Zero {}

impl<W> EdgeWeight for W where W: Copy + PartialOrd + Add<Output = Self> + Zero {}
