//! Constant edge probability, independent of graph state.

use kindling_core::errors::GrowthError;
use kindling_core::UserId;

use super::EdgeFormationModel;
use crate::graph::GraphSnapshot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformConstant {
    p: f64,
}

impl UniformConstant {
    /// Fails with `InvalidProbability` unless `p` is in `[0, 1]`.
    pub fn new(p: f64) -> Result<Self, GrowthError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GrowthError::InvalidProbability { value: p });
        }
        Ok(Self { p })
    }
}

impl EdgeFormationModel for UniformConstant {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn probability(&self, _u: UserId, _v: UserId, _current: &GraphSnapshot) -> Result<f64, GrowthError> {
        Ok(self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_probability_for_every_pair() {
        let graph = GraphSnapshot::from_edges(&[(1, 2)]).unwrap();
        let model = UniformConstant::new(0.25).unwrap();
        assert_eq!(model.probability(1, 2, &graph).unwrap(), 0.25);
        assert_eq!(model.probability(7, 8, &graph).unwrap(), 0.25);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(UniformConstant::new(1.5).is_err());
        assert!(UniformConstant::new(-0.1).is_err());
        assert!(UniformConstant::new(f64::NAN).is_err());
        assert!(UniformConstant::new(0.0).is_ok());
        assert!(UniformConstant::new(1.0).is_ok());
    }
}
