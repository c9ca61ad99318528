/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Hall allocation pipeline.
//!
//! ```text
//! &[Activity] ──validate──► ConflictGraph::build ──► walk::assign ──► coverage checks
//!                                                         │
//!                                              Assignment (hall ids)
//!                                                         │
//!                                 HallScheduler: roster names ──► HallSchedule
//! ```
//!
//! Every call builds its own graph and occupancy tables and drops them on
//! return, so [`HallScheduler`] is `Send + Sync` and calls are independent.
//!
//! # Example
//! ```rust
//! use chrono::NaiveTime;
//! use hall_alloc::activity::Activity;
//! use hall_alloc::scheduler::assign_halls;
//!
//! let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
//! let activities = vec![
//!     Activity::new("math", at(9), at(12)),
//!     Activity::new("pe", at(11), at(14)),
//! ];
//!
//! let assignment = assign_halls(&activities, 2).unwrap();
//! assert_eq!(assignment["math"], Some(0));
//! assert_eq!(assignment["pe"], Some(1));
//! ```

pub mod coverage;
pub mod error;
pub mod graph;
pub mod walk;

pub use error::{ScheduleError, Violation};
pub use graph::{ConflictGraph, VertexId};

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::activity::{name_halls, Activity, Assignment, HallSchedule};
use crate::config::HallConfigManager;

// ─────────────────────────────────────────────────────────────────────────────
// Free entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Check the caller-side preconditions, stopping at the first breach.
///
/// Activities are checked in canonical (name) order so the reported activity
/// does not depend on input order.
pub fn validate(activities: &[Activity]) -> Result<(), ScheduleError> {
    let mut ordered: Vec<&Activity> = activities.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for activity in ordered {
        if !seen.insert(activity.name.as_str()) {
            return Err(ScheduleError::InvalidActivity {
                activity: activity.name.clone(),
                violation: Violation::DuplicateName,
            });
        }
        if activity.span.is_empty() {
            return Err(ScheduleError::InvalidActivity {
                activity: activity.name.clone(),
                violation: Violation::ZeroLength {
                    at: activity.start(),
                },
            });
        }
    }
    Ok(())
}

/// Allocate up to `hall_count` numbered halls to `activities`.
///
/// Activities that cannot get a hall map to `None`; that is a normal outcome,
/// not an error.
///
/// # Errors
/// [`ScheduleError::InvalidActivity`] if a name is duplicated or a span has
/// zero length.
pub fn assign_halls(activities: &[Activity], hall_count: usize) -> Result<Assignment, ScheduleError> {
    validate(activities)?;

    info!(
        activity_count = activities.len(),
        hall_count = hall_count,
        "=== assign_halls() ==="
    );

    let graph = ConflictGraph::build(activities);
    let assignment = walk::assign(&graph, hall_count);

    run_coverage_checks(&graph, &assignment);

    Ok(assignment)
}

/// Log the post-allocation audit and coverage summary.
fn run_coverage_checks(graph: &ConflictGraph<'_>, assignment: &Assignment) {
    for clash in coverage::audit(graph, assignment) {
        tracing::error!(
            first = %clash.first,
            second = %clash.second,
            hall = clash.hall,
            "conflicting activities share a hall"
        );
    }

    let rep = coverage::report(graph, assignment);
    if !rep.isolated_unassigned.is_empty() {
        warn!(
            activities = ?rep.isolated_unassigned,
            "activities without conflicts were never reached by the walk and have no hall"
        );
    }
    info!(
        halls_used = rep.halls_used,
        unassigned = rep.unassigned.len(),
        total = graph.len(),
        "=== Allocation complete ==="
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// HallScheduler
// ─────────────────────────────────────────────────────────────────────────────

/// Allocates activities to the named halls of a loaded roster.
///
/// Holds a shared reference to the configuration; all per-run state lives
/// inside [`schedule()`](Self::schedule).
pub struct HallScheduler {
    config: Arc<HallConfigManager>,
}

impl HallScheduler {
    pub fn new(config: Arc<HallConfigManager>) -> Self {
        Self { config }
    }

    /// Allocate `activities` to the roster's halls and return hall names.
    ///
    /// # Errors
    /// * [`ScheduleError::ConfigNotLoaded`] if no roster has been loaded.
    /// * [`ScheduleError::InvalidActivity`] on a precondition breach.
    pub fn schedule(&self, activities: &[Activity]) -> Result<HallSchedule, ScheduleError> {
        if !self.config.is_loaded() {
            return Err(ScheduleError::ConfigNotLoaded);
        }

        let roster = self.config.get_halls();
        let assignment = assign_halls(activities, roster.len())?;
        let schedule = name_halls(&assignment, roster);

        for (activity, hall) in &schedule {
            match hall {
                Some(hall) => info!(activity = %activity, hall = %hall, "✓ allocated"),
                None => info!(activity = %activity, "✗ no hall"),
            }
        }

        Ok(schedule)
    }

    /// Allocate the activities stored in the loaded configuration.
    pub fn schedule_loaded(&self) -> Result<HallSchedule, ScheduleError> {
        self.schedule(self.config.get_activities())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HallConfigManager;
    use chrono::NaiveTime;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn act(name: &str, start: &str, finish: &str) -> Activity {
        Activity::new(
            name,
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            NaiveTime::parse_from_str(finish, "%H:%M").unwrap(),
        )
    }

    fn crown() -> Vec<Activity> {
        vec![
            act("math", "09:00", "12:00"),
            act("pe", "11:00", "14:00"),
            act("phys", "13:00", "16:00"),
            act("dance", "15:00", "18:00"),
            act("draw", "17:00", "20:00"),
            act("sleep", "19:00", "10:00"),
        ]
    }

    fn scheduler_with(yaml: &str) -> HallScheduler {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(yaml.as_bytes()).unwrap();
        let mut mgr = HallConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();
        HallScheduler::new(Arc::new(mgr))
    }

    // ── validate ──────────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_well_formed_input() {
        assert!(validate(&crown()).is_ok());
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let acts = vec![act("math", "09:00", "12:00"), act("math", "13:00", "14:00")];
        let err = validate(&acts).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidActivity {
                ref activity,
                violation: Violation::DuplicateName,
            } if activity == "math"
        ));
    }

    #[test]
    fn validate_rejects_zero_length_span() {
        let acts = vec![act("nap", "13:00", "13:00")];
        let err = validate(&acts).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidActivity {
                violation: Violation::ZeroLength { .. },
                ..
            }
        ));
    }

    #[test]
    fn validate_reports_canonically_first_breach() {
        let acts = vec![act("zeta", "10:00", "10:00"), act("alpha", "11:00", "11:00")];
        match validate(&acts).unwrap_err() {
            ScheduleError::InvalidActivity { activity, .. } => assert_eq!(activity, "alpha"),
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── assign_halls ──────────────────────────────────────────────────────────

    #[test]
    fn assign_halls_rejects_invalid_input() {
        let acts = vec![act("nap", "13:00", "13:00")];
        assert!(assign_halls(&acts, 3).is_err());
    }

    #[test]
    fn assign_halls_empty_input_is_empty_assignment() {
        assert!(assign_halls(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn assign_halls_root_seeded_with_no_halls() {
        let result = assign_halls(&crown(), 0).unwrap();
        assert_eq!(result["dance"], Some(0));
        assert_eq!(result.values().filter(|h| h.is_some()).count(), 1);
    }

    // ── HallScheduler ─────────────────────────────────────────────────────────

    #[test]
    fn crown_schedule_uses_roster_names() {
        let sched = scheduler_with(
            r#"
halls: [billiard, city, concert, dance, dining, great]
activities: {}
"#,
        );
        let schedule = sched.schedule(&crown()).unwrap();
        let expected: HallSchedule = [
            ("dance", Some("billiard")),
            ("draw", Some("city")),
            ("math", Some("city")),
            ("pe", Some("dance")),
            ("phys", Some("concert")),
            ("sleep", Some("billiard")),
        ]
        .into_iter()
        .map(|(a, h)| (a.to_string(), h.map(str::to_string)))
        .collect();
        assert_eq!(schedule, expected);
    }

    #[test]
    fn too_few_halls_schedule_leaves_one_unassigned() {
        let sched = scheduler_with(
            r#"
halls: [dining, dance]
activities:
  math:  { start: "09:00", finish: "12:00" }
  draw:  { start: "11:00", finish: "14:00" }
  sleep: { start: "13:00", finish: "10:00" }
"#,
        );
        let schedule = sched.schedule_loaded().unwrap();
        assert_eq!(schedule["draw"].as_deref(), Some("dining"));
        assert_eq!(schedule["math"].as_deref(), Some("dance"));
        assert_eq!(schedule["sleep"], None);
    }

    #[test]
    fn config_not_loaded_returns_error() {
        let sched = HallScheduler::new(Arc::new(HallConfigManager::new()));
        let err = sched.schedule(&crown()).unwrap_err();
        assert!(matches!(err, ScheduleError::ConfigNotLoaded));
    }

    #[test]
    fn scheduler_is_deterministic() {
        let sched = scheduler_with("halls: [h0, h1, h2]\nactivities: {}\n");
        let reference = sched.schedule(&crown()).unwrap();
        for _ in 0..49 {
            let mut shuffled = crown();
            shuffled.rotate_left(2);
            assert_eq!(
                sched.schedule(&shuffled).unwrap(),
                reference,
                "scheduler produced different output on reordered identical input"
            );
        }
    }
}
