//! Fire-and-forget analytics for preference changes.
//!
//! Sinks never fail the command that emits into them.

use std::sync::Mutex;

use brewguide_core::domain::preferences::WizardPreferences;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub action: String,
    pub experience: &'static str,
    pub roast_level: &'static str,
    pub flavor_notes: Vec<String>,
}

impl AnalyticsEvent {
    pub fn preferences_changed(action: impl Into<String>, preferences: &WizardPreferences) -> Self {
        Self {
            name: "preferences_changed",
            action: action.into(),
            experience: preferences.experience.as_str(),
            roast_level: preferences.roast_level.as_str(),
            flavor_notes: preferences.flavor_notes.tags(),
        }
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn emit(&self, event: AnalyticsEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAnalyticsSink;

impl AnalyticsSink for TracingAnalyticsSink {
    fn emit(&self, event: AnalyticsEvent) {
        tracing::info!(
            event_name = "cli.analytics.event",
            analytics_event = event.name,
            action = %event.action,
            experience = event.experience,
            roast_level = event.roast_level,
            flavor_notes = ?event.flavor_notes,
            "analytics event emitted"
        );
    }
}

/// Keeps events in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryAnalyticsSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalyticsSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl AnalyticsSink for MemoryAnalyticsSink {
    fn emit(&self, event: AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
