#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use chrono::Utc;
use shortlink::domain::entities::{Link, LinkUpdate, NewLink, NewVisit, Visit};
use shortlink::domain::repositories::{LinkRepository, VisitRepository};
use shortlink::error::AppError;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tower_http::cors::CorsLayer;

pub const BASE_URL: &str = "http://localhost:8080";
pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Link storage held in memory, enforcing short name uniqueness.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent call fail like an unreachable database.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn seed(&self, original_url: &str, short_name: &str) -> Link {
        self.create(NewLink {
            original_url: original_url.to_string(),
            short_name: short_name.to_string(),
        })
        .await
        .unwrap()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::internal("Database error"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.short_name == new_link.short_name) {
            return Err(AppError::conflict("short_name", "short name already in use"));
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            new_link.original_url,
            new_link.short_name,
            Utc::now(),
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self.links.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_name == short_name)
            .cloned())
    }

    async fn update(&self, id: i64, update: LinkUpdate) -> Result<Option<Link>, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        if links
            .iter()
            .any(|l| l.id != id && l.short_name == update.short_name)
        {
            return Err(AppError::conflict("short_name", "short name already in use"));
        }

        Ok(links.iter_mut().find(|l| l.id == id).map(|link| {
            link.original_url = update.original_url;
            link.short_name = update.short_name;
            link.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.id != id);
        Ok(links.len() < before)
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.check()?;
        Ok(self.links.lock().unwrap().clone())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, AppError> {
        self.check()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

/// Visit storage held in memory.
///
/// Writes can be made to fail, or to block until [`InMemoryVisitRepository::release`]
/// is called.
#[derive(Default)]
pub struct InMemoryVisitRepository {
    visits: Mutex<Vec<Visit>>,
    next_id: AtomicI64,
    attempts: AtomicUsize,
    reads: AtomicUsize,
    failing: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A repository whose inserts all fail.
    pub fn failing() -> Arc<Self> {
        let repo = Self::default();
        repo.failing.store(true, Ordering::SeqCst);
        Arc::new(repo)
    }

    /// A repository whose inserts wait until released.
    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        })
    }

    /// Lets pending gated inserts proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_waiters();
            gate.notify_one();
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Number of list and count calls made.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Visit> {
        self.visits.lock().unwrap().clone()
    }

    pub fn seed(&self, link_id: i64, ip: &str) -> Visit {
        let visit = Visit {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id,
            ip: ip.to_string(),
            user_agent: None,
            referer: None,
            status: 302,
            created_at: Utc::now(),
        };
        self.visits.lock().unwrap().push(visit.clone());
        visit
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn insert(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error"));
        }

        let visit = Visit {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id: new_visit.link_id,
            ip: new_visit.ip,
            user_agent: new_visit.user_agent,
            referer: new_visit.referer,
            status: new_visit.status,
            created_at: Utc::now(),
        };
        self.visits.lock().unwrap().push(visit.clone());
        Ok(visit)
    }

    async fn list_all(&self) -> Result<Vec<Visit>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .stored()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.visits.lock().unwrap().len() as i64)
    }

    async fn list_by_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .stored()
            .into_iter()
            .filter(|v| v.link_id == link_id)
            .collect())
    }
}

pub fn create_test_state(
    links: Arc<InMemoryLinkRepository>,
    visits: Arc<InMemoryVisitRepository>,
    behind_proxy: bool,
) -> AppState {
    AppState::new(links, visits, BASE_URL, behind_proxy)
}

/// Full application router over in-memory storage, as seen from `PEER_ADDR`.
pub fn create_test_server(
    links: Arc<InMemoryLinkRepository>,
    visits: Arc<InMemoryVisitRepository>,
) -> TestServer {
    server_for(create_test_state(links, visits, false))
}

pub fn server_for(state: AppState) -> TestServer {
    let peer: SocketAddr = PEER_ADDR.parse().unwrap();
    let app = app_router(state, CorsLayer::new()).layer(MockConnectInfo(peer));

    TestServer::new(app).unwrap()
}

/// Polls until `count` visits are stored, failing after one second.
pub async fn wait_for_visits(visits: &InMemoryVisitRepository, count: usize) -> Vec<Visit> {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);

    loop {
        let stored = visits.stored();
        if stored.len() >= count {
            return stored;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "expected {count} visits, found {}",
            stored.len()
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Polls until `count` insert attempts were made, failing after one second.
pub async fn wait_for_attempts(visits: &InMemoryVisitRepository, count: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);

    while visits.attempts() < count {
        assert!(
            tokio::time::Instant::now() < deadline,
            "expected {count} insert attempts, found {}",
            visits.attempts()
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
