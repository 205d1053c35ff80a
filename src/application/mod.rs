//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and translate storage outcomes into
//! [`crate::error::AppError`] values that handlers can return directly.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link CRUD and windowed listing
//! - [`services::visit_service::VisitService`] - Visit listing
//! - [`services::redirect_service::RedirectService`] - Token resolution, redirect
//!   and visit dispatch

pub mod services;
