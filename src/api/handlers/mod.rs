//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod link_visits;
pub mod links;
pub mod listing;
pub mod redirect;

pub use health::{health_handler, not_found_handler, ping_handler};
pub use link_visits::list_link_visits_handler;
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
pub use redirect::redirect_handler;
