//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, VisitService};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::domain::visit_recorder::VisitRecorder;

/// Services are reference-counted so the state is cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub visit_service: Arc<VisitService>,
    pub redirect_service: Arc<RedirectService>,
    /// Read client IPs from proxy headers instead of the socket peer.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        visit_repository: Arc<dyn VisitRepository>,
        base_url: impl Into<String>,
        behind_proxy: bool,
    ) -> Self {
        let recorder = VisitRecorder::new(visit_repository.clone());

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone(), base_url)),
            visit_service: Arc::new(VisitService::new(visit_repository)),
            redirect_service: Arc::new(RedirectService::new(link_repository, recorder)),
            behind_proxy,
        }
    }
}
