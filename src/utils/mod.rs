//! Utility functions shared across layers.

pub mod client_ip;
pub mod short_name;
