/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for hall allocation.
//!
//! Two types model the two failure layers:
//!
//! * [`Violation`] — what exactly is wrong with a single activity
//!   (low-level, carries the offending value).
//! * [`ScheduleError`] — top-level failure returned from
//!   [`assign_halls()`](super::assign_halls) and
//!   [`HallScheduler::schedule()`](super::HallScheduler::schedule).
//!
//! Running out of halls is **not** an error: exhausted activities come back
//! as `None` in the assignment.  Only caller-side precondition breaches end up
//! here.

use chrono::NaiveTime;
use thiserror::Error;

// ── Precondition violations ───────────────────────────────────────────────────

/// Detailed reason why an activity was refused before graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Another activity in the same run already uses this name.
    DuplicateName,

    /// Start and finish coincide, so the span is neither a plain interval nor
    /// a midnight-wrapping one.
    ZeroLength { at: NaiveTime },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DuplicateName => write!(f, "name is used by more than one activity"),
            Violation::ZeroLength { at } => write!(
                f,
                "start and finish are both {} (zero-length span)",
                at.format("%H:%M")
            ),
        }
    }
}

// ── Top-level scheduling errors ───────────────────────────────────────────────

/// Top-level error type of the allocation entry points.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// [`HallConfigManager`] has not been loaded (no YAML file parsed yet).
    ///
    /// [`HallConfigManager`]: crate::config::HallConfigManager
    #[error("hall configuration is not loaded")]
    ConfigNotLoaded,

    /// An activity broke a precondition of the allocator.
    #[error("activity '{activity}' is invalid: {violation}")]
    InvalidActivity {
        activity: String,
        violation: Violation,
    },
}
