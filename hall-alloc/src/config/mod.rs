//! Hall roster and activity workload loading.
//!
//! The expected YAML structure is:
//! ```yaml
//! halls: [billiard, city, concert]
//! activities:
//!   math:
//!     start: "09:00"
//!     finish: "12:00"
//!     description: "Calculus I"
//!   sleep:
//!     start: "19:00"
//!     finish: "10:00"
//! ```
//!
//! Times are `HH:MM` or `HH:MM:SS` on a 24-hour clock.  A finish earlier
//! than the start means the activity runs past midnight.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::activity::Activity;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
///
/// This is kept private – callers work with [`Activity`] /
/// [`HallConfigManager`] instead.
#[derive(Debug, Deserialize)]
struct HallConfigFile {
    #[serde(default)]
    halls: Vec<String>,
    #[serde(default)]
    activities: BTreeMap<String, ActivityEntry>,
}

/// Per-activity fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
struct ActivityEntry {
    start: String,
    finish: String,
    description: Option<String>,
}

/// Parse a 24-hour `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .with_context(|| format!("Invalid time of day '{}' (expected HH:MM or HH:MM:SS)", text))
}

/// Roster used when the file lists no halls: one numbered hall per activity.
pub fn default_roster(hall_count: usize) -> Vec<String> {
    (0..hall_count).map(|i| format!("hall-{}", i)).collect()
}

// ── HallConfigManager ─────────────────────────────────────────────────────────

/// Loads and holds the hall roster and activity workload from a YAML file.
#[derive(Debug, Default)]
pub struct HallConfigManager {
    /// Hall names; a hall's position is its numeric id.
    halls: Vec<String>,

    /// Activities in canonical (name) order.
    activities: Vec<Activity>,

    /// Set to `true` after a successful [`load_from_file`](Self::load_from_file).
    loaded: bool,
}

impl HallConfigManager {
    /// Creates a new, empty `HallConfigManager`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and populates the roster and activity list.
    ///
    /// * If the file lists no halls, a default roster with one `hall-N` per
    ///   activity is used.
    /// * Calling this method a second time replaces all previously loaded data.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, if the YAML is
    /// structurally invalid, or if a time cannot be parsed.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading hall configuration from: {}", path.display());

        // Reset state before (re-)loading
        self.halls.clear();
        self.activities.clear();
        self.loaded = false;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let file: HallConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let mut activities = Vec::with_capacity(file.activities.len());
        for (name, entry) in file.activities {
            let start = parse_time_of_day(&entry.start)
                .with_context(|| format!("Activity '{}': bad start time", name))?;
            let finish = parse_time_of_day(&entry.finish)
                .with_context(|| format!("Activity '{}': bad finish time", name))?;

            let mut activity = Activity::new(name, start, finish);
            activity.description = entry.description.unwrap_or_default();

            debug!(
                "  Activity: {} | {} | {} min | wraps midnight: {}",
                activity.name,
                activity.span,
                activity.span.duration().num_minutes(),
                activity.wraps_midnight(),
            );
            activities.push(activity);
        }

        let mut halls = file.halls;
        if halls.is_empty() {
            warn!(
                "No halls found in configuration file, using one default hall per activity ({})",
                activities.len()
            );
            halls = default_roster(activities.len());
        }

        // Only commit once everything parsed.
        self.halls = halls;
        self.activities = activities;
        self.loaded = true;

        info!(
            "Successfully loaded {} hall(s) and {} activit(ies)",
            self.halls.len(),
            self.activities.len()
        );
        for (id, hall) in self.halls.iter().enumerate() {
            debug!("  Hall {}: {}", id, hall);
        }

        Ok(())
    }

    /// Hall names in id order.
    pub fn get_halls(&self) -> &[String] {
        &self.halls
    }

    /// Number of halls in the roster.
    pub fn hall_count(&self) -> usize {
        self.halls.len()
    }

    /// Loaded activities in canonical (name) order.
    pub fn get_activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Returns the activity called `name`, if loaded.
    pub fn get_activity(&self, name: &str) -> Option<&Activity> {
        self.activities
            .binary_search_by(|a| a.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.activities[i])
    }

    /// Returns `true` after a successful call to [`load_from_file`](Self::load_from_file).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
