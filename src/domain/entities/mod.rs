//! Core domain entities.
//!
//! - [`Link`] - A short token mapped to a target URL
//! - [`Visit`] - One recorded redirect of a link
//!
//! Creation inputs live next to their entity (`NewLink`, `NewVisit`), as does
//! the full replacement payload for links (`LinkUpdate`).

pub mod link;
pub mod visit;

pub use link::{Link, LinkUpdate, NewLink};
pub use visit::{NewVisit, Visit};
