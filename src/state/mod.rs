//! State management module
//!
//! This module handles all application state, including:
//! - The shift draft being edited and its validation (form.rs)
//! - The tag-keyed query cache shared with the rest of the app (cache.rs)

pub mod cache;
pub mod form;
