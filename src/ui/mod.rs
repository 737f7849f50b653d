//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Slint event loop: callbacks, SQL lookups and property updates
//! - `rayon::spawn`: image decoding
//! - `slint::invoke_from_event_loop`: hands decoded images back to the UI thread

pub mod card_viewer;
pub mod handlers;
pub mod image_display;
pub mod image_request;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
