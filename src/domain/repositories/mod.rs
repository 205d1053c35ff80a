//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link CRUD and token resolution
//! - [`VisitRepository`] - Visit writes and listing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod link_repository;
pub mod visit_repository;

pub use link_repository::LinkRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
