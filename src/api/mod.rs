//! HTTP API module for the worklog engine.
//!
//! This module provides the REST endpoints through which a calendar UI
//! drives the engine: marking days, editing the shift catalog, reading
//! earnings summaries and downloading CSV exports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateShiftTypeRequest, SetDayRequest, UpdateSettingsRequest};
pub use response::ApiError;
pub use state::AppState;
