//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements mapped through [`sqlx::FromRow`] row types.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and token resolution
//! - [`PgVisitRepository`] - Visit writes and listing

pub mod pg_link_repository;
pub mod pg_visit_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_visit_repository::PgVisitRepository;
