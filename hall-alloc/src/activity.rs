/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core activity data structures for hall allocation.
//!
//! Two result types model the two sides of the allocation pipeline:
//!
//! ```text
//! YAML / caller  ──►  Activity  ──(walk)──►  Assignment  ──(roster)──►  HallSchedule
//!                     ↑ input                ↑ numeric hall ids         ↑ hall names
//!                     immutable              None = unassigned          None = unassigned
//! ```
//!
//! # Ownership model
//! `Activity` values are **borrowed** by the conflict graph for the duration
//! of one allocation run and never mutated.  The hall chosen for each
//! activity lives in a side table owned by the walk, and only leaves it as
//! the final [`Assignment`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveTime;

use crate::interval::Span;

/// Index of a hall in the roster, `0..hall_count`.
pub type HallId = usize;

// ── Activity ──────────────────────────────────────────────────────────────────

/// A named time interval on a 24-hour clock.
///
/// Names are unique within one allocation run and their lexicographic order
/// is the canonical order that drives both graph construction and the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique activity name.
    pub name: String,

    /// Occupied time of day.
    pub span: Span,

    /// Free-form note carried through from the configuration file.
    pub description: String,
}

impl Activity {
    pub fn new(name: impl Into<String>, start: NaiveTime, finish: NaiveTime) -> Self {
        Self {
            name: name.into(),
            span: Span::new(start, finish),
            description: String::new(),
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.span.start
    }

    pub fn finish(&self) -> NaiveTime {
        self.span.finish
    }

    /// Returns `true` if the activity runs past midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.span.wraps_midnight()
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Numeric allocation result: activity name → hall id, or `None` when no hall
/// was left for it.
///
/// `BTreeMap` so iteration follows the canonical (name) order.
pub type Assignment = BTreeMap<String, Option<HallId>>;

/// Named allocation result: activity name → hall name, or `None`.
pub type HallSchedule = BTreeMap<String, Option<String>>;

/// Translate hall ids into roster names.
///
/// An id with no roster entry (only the seeded root when the roster is empty)
/// maps to `None`.
pub fn name_halls(assignment: &Assignment, roster: &[String]) -> HallSchedule {
    assignment
        .iter()
        .map(|(activity, hall)| {
            let name = hall.and_then(|id| roster.get(id).cloned());
            (activity.clone(), name)
        })
        .collect()
}

/// Number of distinct halls in use.
pub fn halls_used(assignment: &Assignment) -> usize {
    assignment.values().flatten().collect::<BTreeSet<_>>().len()
}

/// Number of distinct named halls in use.
pub fn named_halls_used(schedule: &HallSchedule) -> usize {
    schedule.values().flatten().collect::<BTreeSet<_>>().len()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn activity_accessors_reflect_span() {
        let sleep = Activity::new("sleep", at(19, 0), at(10, 0));
        assert_eq!(sleep.start(), at(19, 0));
        assert_eq!(sleep.finish(), at(10, 0));
        assert!(sleep.wraps_midnight());
        assert!(sleep.description.is_empty());
    }

    #[test]
    fn name_halls_maps_ids_to_roster() {
        let roster = vec!["dining".to_string(), "dance".to_string()];
        let assignment: Assignment = [
            ("draw".to_string(), Some(0)),
            ("math".to_string(), Some(1)),
            ("sleep".to_string(), None),
        ]
        .into_iter()
        .collect();

        let named = name_halls(&assignment, &roster);
        assert_eq!(named["draw"].as_deref(), Some("dining"));
        assert_eq!(named["math"].as_deref(), Some("dance"));
        assert_eq!(named["sleep"], None);
    }

    #[test]
    fn name_halls_drops_ids_outside_roster() {
        let assignment: Assignment = [("solo".to_string(), Some(0))].into_iter().collect();
        let named = name_halls(&assignment, &[]);
        assert_eq!(named["solo"], None);
    }

    #[test]
    fn halls_used_counts_distinct_ids() {
        let assignment: Assignment = [
            ("a".to_string(), Some(0)),
            ("b".to_string(), Some(1)),
            ("c".to_string(), Some(0)),
            ("d".to_string(), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(halls_used(&assignment), 2);
    }

    #[test]
    fn named_halls_used_counts_distinct_names() {
        let schedule: HallSchedule = [
            ("dance".to_string(), Some("billiard".to_string())),
            ("sleep".to_string(), Some("billiard".to_string())),
            ("draw".to_string(), Some("city".to_string())),
            ("nap".to_string(), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(named_halls_used(&schedule), 2);
    }

    #[test]
    fn halls_used_empty_assignment_is_zero() {
        assert_eq!(halls_used(&Assignment::new()), 0);
    }
}
