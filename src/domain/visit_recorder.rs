//! Fire-and-forget persistence of visit records.

use std::sync::Arc;

use metrics::counter;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::entities::NewVisit;
use crate::domain::repositories::VisitRepository;

/// Writes visit records on detached tasks.
///
/// [`VisitRecorder::record`] returns immediately. The write runs on its own
/// tokio task, so it is neither awaited by nor cancelled with the request that
/// triggered it. A failed write is logged and counted, never reported back.
///
/// Tasks still in flight when the process exits are lost.
#[derive(Clone)]
pub struct VisitRecorder {
    visits: Arc<dyn VisitRepository>,
}

impl VisitRecorder {
    pub fn new(visits: Arc<dyn VisitRepository>) -> Self {
        Self { visits }
    }

    /// Dispatches a visit write and returns without waiting for it.
    ///
    /// The returned handle carries no outcome; callers normally drop it,
    /// which detaches the task.
    pub fn record(&self, visit: NewVisit) -> JoinHandle<()> {
        let visits = Arc::clone(&self.visits);

        tokio::spawn(async move {
            let link_id = visit.link_id;

            match visits.insert(visit).await {
                Ok(stored) => {
                    counter!("link_visits_recorded_total").increment(1);
                    debug!(link_id, visit_id = stored.id, "Visit recorded");
                }
                Err(e) => {
                    counter!("link_visits_failed_total").increment(1);
                    warn!(link_id, error = %e, "Failed to record visit");
                }
            }
        })
    }
}
