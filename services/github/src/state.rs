use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::mode::SimulationMode;
use crate::release::ReleaseDescriptor;

/// How long the `timeout` mode holds a request before completing. Longer
/// than any reasonable client-side timeout.
pub const DEFAULT_STALL: Duration = Duration::from_secs(30);

/// Shared application state passed to every handler via axum `State`.
/// Built once in `main` and never mutated afterwards, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub mode: SimulationMode,
    pub release: Arc<ReleaseDescriptor>,
    pub data_dir: Arc<PathBuf>,
    /// Stall applied by the `timeout` mode. `DEFAULT_STALL` in production;
    /// tests shrink it.
    pub stall: Duration,
}
