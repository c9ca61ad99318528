/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-allocation checks.
//!
//! Run after every walk.  Neither check changes the assignment; the
//! scheduler only logs what they find.
//!
//! * [`audit`] re-verifies that no two conflicting activities share a hall.
//!   The walk's occupancy horizon guarantees this, so a non-empty result
//!   means a bug in the walk.
//! * [`report`] summarises hall usage and lists unassigned activities,
//!   separating the ones that were simply never reached because they have
//!   no conflicts at all.

use crate::activity::{halls_used, Assignment, HallId};

use super::graph::ConflictGraph;

/// Two conflicting activities found in the same hall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedHallConflict {
    pub first: String,
    pub second: String,
    pub hall: HallId,
}

/// Summary of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Distinct halls holding at least one activity.
    pub halls_used: usize,

    /// Every activity without a hall, in canonical order.
    pub unassigned: Vec<String>,

    /// Subset of `unassigned` with no conflicts: these would fit any hall but
    /// are never visited by the walk.
    pub isolated_unassigned: Vec<String>,
}

impl CoverageReport {
    /// Returns `true` if every activity received a hall.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// List every edge of `graph` whose endpoints hold the same hall.
///
/// Each pair is reported once, with `first` before `second` in canonical
/// order.
pub fn audit(graph: &ConflictGraph<'_>, assignment: &Assignment) -> Vec<SharedHallConflict> {
    let hall_of = |id| assignment.get(&graph.activity(id).name).copied().flatten();

    let mut found = Vec::new();
    for id in graph.ids() {
        let Some(hall) = hall_of(id) else {
            continue;
        };
        for &n in graph.neighbors(id) {
            if n > id && hall_of(n) == Some(hall) {
                found.push(SharedHallConflict {
                    first: graph.activity(id).name.clone(),
                    second: graph.activity(n).name.clone(),
                    hall,
                });
            }
        }
    }
    found
}

/// Build the [`CoverageReport`] for `assignment`.
pub fn report(graph: &ConflictGraph<'_>, assignment: &Assignment) -> CoverageReport {
    let mut out = CoverageReport {
        halls_used: halls_used(assignment),
        ..Default::default()
    };

    for id in graph.ids() {
        let name = &graph.activity(id).name;
        if assignment.get(name).copied().flatten().is_some() {
            continue;
        }
        out.unassigned.push(name.clone());
        if graph.degree(id) == 0 {
            out.isolated_unassigned.push(name.clone());
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
