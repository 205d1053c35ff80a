//! Domain layer: entities, repository contracts and the visit pipeline pieces
//! that do not depend on HTTP or storage details.
//!
//! # Architecture
//!
//! - [`entities`] - Links and visit records
//! - [`repositories`] - Storage contracts implemented by the infrastructure layer
//! - [`pagination`] - Range windows and the `Content-Range` disclosure header
//! - [`client_info`] - Visitor metadata captured from a redirect request
//! - [`visit_recorder`] - Fire-and-forget persistence of visit records
//!
//! # Visit Flow
//!
//! 1. The redirect handler resolves a token via [`repositories::LinkRepository`]
//! 2. The redirect response is built
//! 3. [`visit_recorder::VisitRecorder`] spawns a detached task that writes the
//!    visit through [`repositories::VisitRepository`]

pub mod client_info;
pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod visit_recorder;
