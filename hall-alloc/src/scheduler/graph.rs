/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Conflict graph over a set of activities.
//!
//! Vertices live in an arena indexed by [`VertexId`]; each vertex keeps its
//! neighbours as indices, so there is no cyclic ownership between vertices.
//!
//! # Canonical order
//! Vertices are numbered in ascending activity-name order, and every neighbour
//! list is filled in that same order.  The walk in [`walk`](super::walk)
//! picks its next root as the *last* uncolored neighbour in the list, so the
//! construction order here directly decides the final assignment.  Changing
//! the scan below (e.g. iterating in input order) changes allocation results.

use tracing::debug;

use crate::activity::Activity;
use crate::interval::conflicts;

/// Index of a vertex in the arena; equal to the activity's canonical rank.
pub type VertexId = usize;

#[derive(Debug)]
struct Vertex<'a> {
    activity: &'a Activity,
    neighbors: Vec<VertexId>,
}

/// Undirected graph where an edge means "these two activities cannot share a
/// hall".
///
/// Borrows the activities it was built from; one graph is built per
/// allocation run and dropped afterwards.
#[derive(Debug)]
pub struct ConflictGraph<'a> {
    vertices: Vec<Vertex<'a>>,
}

impl<'a> ConflictGraph<'a> {
    /// Build the graph with an O(N²) pairwise scan in canonical order.
    ///
    /// Activity names must be unique; the scheduler checks this before
    /// calling (see [`validate`](super::validate)).
    pub fn build(activities: &'a [Activity]) -> Self {
        let mut ordered: Vec<&'a Activity> = activities.iter().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name));
        debug_assert!(
            ordered.windows(2).all(|w| w[0].name != w[1].name),
            "ConflictGraph::build called with duplicate activity names"
        );

        let mut vertices: Vec<Vertex<'a>> = ordered
            .into_iter()
            .map(|activity| Vertex {
                activity,
                neighbors: Vec::new(),
            })
            .collect();

        // i ascending in the outer loop, j ascending in the inner loop: every
        // neighbour list ends up sorted by canonical rank.
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if conflicts(&vertices[i].activity.span, &vertices[j].activity.span) {
                    vertices[i].neighbors.push(j);
                    vertices[j].neighbors.push(i);
                }
            }
        }

        let graph = Self { vertices };
        debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            "conflict graph built"
        );
        graph
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The canonically first vertex, where the walk starts.
    pub fn root(&self) -> Option<VertexId> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn activity(&self, id: VertexId) -> &'a Activity {
        self.vertices[id].activity
    }

    /// Conflicting vertices in discovery (canonical) order.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.vertices[id].neighbors
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices[id].neighbors.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum::<usize>() / 2
    }

    /// Vertex id of the activity called `name`.
    pub fn position(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .binary_search_by(|v| v.activity.name.as_str().cmp(name))
            .ok()
    }

    /// All vertex ids in canonical order.
    pub fn ids(&self) -> std::ops::Range<VertexId> {
        0..self.vertices.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
