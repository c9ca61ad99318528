/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Time-of-day spans on a 24-hour clock and the pairwise conflict test.
//!
//! A [`Span`] whose finish lies before its start wraps past midnight and
//! occupies `[start, 24:00) ∪ [00:00, finish)`.
//!
//! ```text
//!  00:00                                   24:00
//!    |=====finish        start==============|     wrapping   (19:00 → 10:00)
//!    |          start=========finish        |     plain      (09:00 → 12:00)
//! ```

use chrono::{Duration, NaiveTime};

/// Start / finish pair of an activity.
///
/// `start == finish` is not a valid span; the scheduler rejects it before a
/// graph is built (see [`Violation::ZeroLength`]).
///
/// [`Violation::ZeroLength`]: crate::scheduler::Violation::ZeroLength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: NaiveTime,
    pub finish: NaiveTime,
}

impl Span {
    pub fn new(start: NaiveTime, finish: NaiveTime) -> Self {
        Self { start, finish }
    }

    /// Returns `true` if the span crosses midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.finish < self.start
    }

    /// Returns `true` for the degenerate `start == finish` span.
    pub fn is_empty(&self) -> bool {
        self.start == self.finish
    }

    /// Occupied length, counting the part after midnight for wrapping spans.
    pub fn duration(&self) -> Duration {
        let raw = self.finish - self.start;
        if self.wraps_midnight() {
            raw + Duration::days(1)
        } else {
            raw
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.finish.format("%H:%M")
        )
    }
}

/// Decide whether two spans must not share a hall.
///
/// The pair is ordered by start time into `early` / `late` and is cleanly
/// separated in exactly two situations:
///
/// 1. neither wraps and `early` finishes at or before `late` starts;
/// 2. `late` wraps and `early` sits strictly inside its idle gap:
///    `late.finish < early.start < early.finish < late.start`.
///
/// Everything else conflicts, including every pair of wrapping spans (both
/// occupy midnight). Equal starts always conflict.
pub fn conflicts(a: &Span, b: &Span) -> bool {
    let (early, late) = if a.start < b.start { (a, b) } else { (b, a) };

    let both_plain = !early.wraps_midnight() && !late.wraps_midnight();
    if both_plain && early.finish <= late.start {
        return false;
    }

    if late.finish < early.start && early.start < early.finish && early.finish < late.start {
        return false;
    }

    true
}

// ── Tests ─────────────────────────────────────────────────────────────────────
