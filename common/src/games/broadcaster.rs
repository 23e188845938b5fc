use std::future::Future;

use crate::games::snake::{GameOverSummary, Snapshot};

/// Receives read-only state for rendering.
pub trait SnapshotSink: Send + Sync + Clone + 'static {
    fn publish(&self, snapshot: Snapshot) -> impl Future<Output = ()> + Send;

    fn game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
