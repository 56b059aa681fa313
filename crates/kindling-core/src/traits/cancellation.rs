//! Stop signal for seed selection, cascades and campaigns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Something a simulation loop polls to learn it should stop early.
///
/// The greedy selector polls before scoring each candidate user and the
/// cascade simulator before each adoption round. A campaign hands the same
/// signal to both for every item. A stopped loop returns its `Cancelled`
/// error variant.
pub trait Cancellable {
    /// Whether a stop has been requested.
    fn is_cancelled(&self) -> bool;

    /// Ask every loop polling this signal to stop.
    fn cancel(&self);
}

/// Shared stop flag. Clones observe the same flag, so a campaign running
/// items on the rayon pool stops once any holder calls [`cancel`](Cancellable::cancel).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop_requested: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }
}
