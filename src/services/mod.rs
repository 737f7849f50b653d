//! Service layer for business logic.
//!
//! Separates catalog lookups from UI handlers so they can be tested without a window.

pub mod search_service;

pub use search_service::SearchService;
