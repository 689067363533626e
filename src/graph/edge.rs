use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::{Error, Result, VertexId};

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub source: VertexId,
    pub target: VertexId,
    pub weight: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(source: VertexId, target: VertexId, weight: W) -> Self {
        Edge { source, target, weight }
    }

    /// Dijkstra needs `weight >= 0`. NaN is rejected as well, since
    /// `OrderedFloat` orders it above every number.
    pub(crate) fn check_weight(&self) -> Result<()> {
        if !self.weight.is_nan() && self.weight >= W::zero() {
            Ok(())
        } else {
            Err(Error::NegativeWeight {
                from: self.source,
                to: self.target,
                weight: self.weight.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}
