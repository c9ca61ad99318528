/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Greedy sequential coloring walk over a [`ConflictGraph`].
//!
//! Halls are colors.  The walk starts at the canonical root, hands out the
//! lowest free halls to the root's uncolored neighbours, then moves on to the
//! last of those neighbours and repeats.  It is a frontier-chasing heuristic
//! for interval graphs, **not** a minimum coloring.
//!
//! # Occupancy horizon
//! Before coloring a root's neighbours the walk marks as occupied:
//! * the root's own hall,
//! * every hall held by a neighbour of the root,
//! * every hall held by a neighbour of such a neighbour.
//!
//! The last rule covers the neighbours of each vertex about to be colored,
//! because those vertices are themselves neighbours of the root.
//!
//! # Preserved quirks
//! * The root is seeded with hall `0` even when `hall_count == 0`.
//! * An activity with no conflicts is never reached unless it is the root, so
//!   it stays unassigned although hall `0` would fit.

use tracing::{debug, warn};

use crate::activity::{Assignment, HallId};

use super::graph::{ConflictGraph, VertexId};

/// Per-step "which halls are taken" table, one slot per hall that can be
/// handed out.
struct Occupancy {
    taken: Vec<bool>,
}

impl Occupancy {
    fn new(hall_count: usize) -> Self {
        Self {
            taken: vec![false; hall_count],
        }
    }

    /// Marks `hall` as taken.  Ids at or past the hall count are ignored; only
    /// the seeded root can hold one.
    fn mark(&mut self, hall: Option<HallId>) {
        if let Some(slot) = hall.and_then(|h| self.taken.get_mut(h)) {
            *slot = true;
        }
    }

    /// Lowest free hall at or above `*cursor`, advancing the cursor past
    /// taken halls.  `None` once the halls run out.
    fn next_free(&self, cursor: &mut HallId) -> Option<HallId> {
        while *cursor < self.taken.len() && self.taken[*cursor] {
            *cursor += 1;
        }
        (*cursor < self.taken.len()).then_some(*cursor)
    }
}

/// Color `graph` with at most `hall_count` halls.
///
/// Activities left without a hall map to `None`.  Deterministic: the result
/// depends only on the graph's canonical order and `hall_count`.
pub fn assign(graph: &ConflictGraph<'_>, hall_count: usize) -> Assignment {
    let mut halls: Vec<Option<HallId>> = vec![None; graph.len()];
    // Colored-vertex count at the time each vertex last served as root.
    let mut visited_at: Vec<Option<usize>> = vec![None; graph.len()];
    let mut colored = 0usize;

    let mut root = graph.root();
    if let Some(r) = root {
        halls[r] = Some(0);
        colored += 1;
        if hall_count == 0 {
            warn!(
                activity = %graph.activity(r).name,
                "no halls available — root still seeded with hall 0"
            );
        }
    }

    while let Some(r) = root {
        // The walk only depends on (root, colored set) and the colored set
        // only grows, so an unchanged count at a revisited root is a cycle.
        if visited_at[r] == Some(colored) {
            debug!(
                root = %graph.activity(r).name,
                colored = colored,
                "walk revisits a root with no progress — stopping"
            );
            break;
        }
        visited_at[r] = Some(colored);

        // The lowest free hall never exceeds the number of other vertices, so
        // ids at or past graph.len() cannot be handed out.
        let mut occupied = Occupancy::new(hall_count.min(graph.len()));
        occupied.mark(halls[r]);
        for &n in graph.neighbors(r) {
            occupied.mark(halls[n]);
            for &nn in graph.neighbors(n) {
                occupied.mark(halls[nn]);
            }
        }

        let mut cursor: HallId = 0;
        let mut next: Option<VertexId> = None;
        for &n in graph.neighbors(r) {
            if halls[n].is_some() {
                continue;
            }
            match occupied.next_free(&mut cursor) {
                Some(hall) => {
                    halls[n] = Some(hall);
                    occupied.mark(Some(hall));
                    colored += 1;
                    debug!(
                        root = %graph.activity(r).name,
                        activity = %graph.activity(n).name,
                        hall = hall,
                        "hall assigned"
                    );
                }
                None => {
                    warn!(
                        root = %graph.activity(r).name,
                        activity = %graph.activity(n).name,
                        hall_count = hall_count,
                        "halls exhausted — activity left unassigned"
                    );
                }
            }
            next = Some(n);
        }

        root = next;
    }

    graph
        .ids()
        .map(|id| (graph.activity(id).name.clone(), halls[id]))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
