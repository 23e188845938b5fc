mod broadcaster;
pub(crate) mod session_rng;

pub mod snake;

pub use broadcaster::SnapshotSink;
pub use session_rng::{RandomSource, SessionRng};
