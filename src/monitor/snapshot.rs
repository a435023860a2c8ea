//! Point-in-time dashboard view.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::{AggregateSummary, FeedItem};
use crate::registry::ServiceDescriptor;
use crate::status::{CheckResult, HistoryLog};

/// One card on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub homepage_url: String,
    /// `None` until the first check finalizes.
    pub result: Option<CheckResult>,
    pub history: HistoryLog,
}

impl ServiceView {
    pub fn new(service: &Arc<ServiceDescriptor>, result: Option<CheckResult>, history: HistoryLog) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            category: service.category.clone(),
            homepage_url: service.homepage_url.clone(),
            result,
            history,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub summary: AggregateSummary,
    pub feed: Vec<FeedItem>,
    pub services: Vec<ServiceView>,
}
