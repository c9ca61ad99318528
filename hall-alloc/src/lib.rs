/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! hall-alloc – lecture hall allocation
//!
//! Assigns time-of-day activities (possibly running past midnight) to a
//! limited pool of interchangeable halls so that no two activities in one
//! hall overlap.
//!
//! ```text
//! lib.rs
//! ├── interval        – Span, midnight wrap, pairwise conflict test
//! ├── activity        – Activity, Assignment / HallSchedule result types
//! ├── config/         – YAML hall roster + activity workload
//! └── scheduler/      – validation, conflict graph, greedy walk, coverage
//! ```

pub mod activity;
pub mod config;
pub mod interval;
pub mod scheduler;
