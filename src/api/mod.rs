//! Shift API module
//!
//! This module handles:
//! - The wire types exchanged with the shift service (types.rs)
//! - The collaborator that performs the create call over HTTP (client.rs)

pub mod client;
pub mod types;
