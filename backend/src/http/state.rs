//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::FixedOffset;

use crate::models::china_standard_time;
use crate::services::{CalendarProvider, GanzhiCalendar};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Calendar collaborator used for every conversion
    pub calendar: Arc<dyn CalendarProvider>,
    /// Offset request timestamps are read in
    pub offset: FixedOffset,
}

impl AppState {
    /// Create a new application state with the given collaborator and offset.
    pub fn new(calendar: Arc<dyn CalendarProvider>, offset: FixedOffset) -> Self {
        Self { calendar, offset }
    }
}

impl Default for AppState {
    /// The `ganzhi-calendar` collaborator in China Standard Time.
    fn default() -> Self {
        Self::new(Arc::new(GanzhiCalendar), china_standard_time())
    }
}
