//! Histogram lookup keyed by common-neighbour count.

use kindling_core::config::OutOfDomainPolicy;
use kindling_core::errors::GrowthError;
use kindling_core::UserId;
use tracing::trace;

use super::{EdgeFormationModel, PairEstimate};
use crate::graph::GraphSnapshot;
use crate::growth::histogram::Histogram;

/// `P(u ~ v) = histogram[common_neighbors(reference, u, v)]`.
///
/// Common neighbours are counted in the fixed `reference` snapshot, not in
/// the graph being grown. Counts past the calibrated domain follow `policy`:
/// `Zero` answers 0 and flags the answer as a fallback in
/// [`evaluate`](EdgeFormationModel::evaluate), `Error` surfaces `OutOfDomain`.
/// The model holds no per-call state, so one instance can serve parallel runs.
#[derive(Debug)]
pub struct CommonNeighborHistogram {
    histogram: Histogram,
    reference: GraphSnapshot,
    policy: OutOfDomainPolicy,
}

impl CommonNeighborHistogram {
    pub fn new(histogram: Histogram, reference: GraphSnapshot, policy: OutOfDomainPolicy) -> Self {
        Self {
            histogram,
            reference,
            policy,
        }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

impl EdgeFormationModel for CommonNeighborHistogram {
    fn name(&self) -> &'static str {
        "common_neighbor_histogram"
    }

    fn probability(&self, u: UserId, v: UserId, current: &GraphSnapshot) -> Result<f64, GrowthError> {
        self.evaluate(u, v, current).map(|estimate| estimate.probability)
    }

    fn evaluate(&self, u: UserId, v: UserId, _current: &GraphSnapshot) -> Result<PairEstimate, GrowthError> {
        let k = self.reference.common_neighbor_count(u, v);
        match self.histogram.probability(k) {
            Ok(probability) => Ok(PairEstimate {
                probability,
                fallback: false,
            }),
            Err(err @ GrowthError::OutOfDomain { .. }) => match self.policy {
                OutOfDomainPolicy::Zero => {
                    trace!(u, v, common_neighbors = k, "out-of-domain lookup answered with 0");
                    Ok(PairEstimate {
                        probability: 0.0,
                        fallback: true,
                    })
                }
                OutOfDomainPolicy::Error => Err(err),
            },
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::histogram::HistogramCalibrator;

    fn calibrated() -> Histogram {
        let previous = GraphSnapshot::from_edges(&[(1, 2), (2, 3), (4, 5)]).unwrap();
        let current =
            GraphSnapshot::from_edges(&[(1, 2), (2, 3), (4, 5), (1, 3), (3, 4)]).unwrap();
        HistogramCalibrator::build(&current, &previous).unwrap()
    }

    fn wide_reference() -> GraphSnapshot {
        // Users 1 and 2 share three friends, past the calibrated range.
        GraphSnapshot::from_edges(&[(1, 10), (1, 11), (1, 12), (2, 10), (2, 11), (2, 12)])
            .unwrap()
    }

    #[test]
    fn looks_up_reference_common_neighbours() {
        let reference = GraphSnapshot::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let model = CommonNeighborHistogram::new(calibrated(), reference, OutOfDomainPolicy::Zero);
        let grown = GraphSnapshot::from_edges(&[(1, 2), (2, 3), (1, 3)]).unwrap();

        // 1 and 3 share user 2 in the reference; the grown graph is ignored.
        assert_eq!(model.probability(1, 3, &grown).unwrap(), 0.5);
        assert_eq!(model.probability(1, 9, &grown).unwrap(), 0.5);
        assert!(!model.evaluate(1, 3, &grown).unwrap().fallback);
    }

    #[test]
    fn zero_policy_flags_the_fallback() {
        let model =
            CommonNeighborHistogram::new(calibrated(), wide_reference(), OutOfDomainPolicy::Zero);
        let graph = GraphSnapshot::new();
        assert_eq!(model.probability(1, 2, &graph).unwrap(), 0.0);
        let estimate = model.evaluate(2, 1, &graph).unwrap();
        assert_eq!(estimate, PairEstimate { probability: 0.0, fallback: true });
    }

    #[test]
    fn error_policy_surfaces_out_of_domain() {
        let model =
            CommonNeighborHistogram::new(calibrated(), wide_reference(), OutOfDomainPolicy::Error);
        let err = model.probability(1, 2, &GraphSnapshot::new()).unwrap_err();
        assert!(matches!(
            err,
            GrowthError::OutOfDomain { common_neighbors: 3, max_bucket: 2 }
        ));
    }
}
