/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use hall_alloc::activity::{named_halls_used, Activity, HallSchedule};
use hall_alloc::config::HallConfigManager;
use hall_alloc::scheduler::{assign_halls, HallScheduler};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Lecture hall allocator.
///
/// Example:
///   hall-alloc --config demos/crown.yaml
///   hall-alloc --config demos/crown.yaml --halls 2
#[derive(Debug, Parser)]
#[command(
    name = "hall-alloc",
    about = "Allocate activities to lecture halls without overlaps",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML file with the hall roster and activities.
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Ignore the roster names and allocate this many numbered halls instead.
    #[arg(short = 'n', long = "halls")]
    hall_count: Option<usize>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        config     = %cli.config.display(),
        hall_count = ?cli.hall_count,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = HallConfigManager::new();
    config.load_from_file(&cli.config)?;
    let config = Arc::new(config);

    let activities = config.get_activities();
    let schedule: HallSchedule = match cli.hall_count {
        Some(n) => assign_halls(activities, n)?
            .into_iter()
            .map(|(name, hall)| (name, hall.map(|h| h.to_string())))
            .collect(),
        None => HallScheduler::new(Arc::clone(&config)).schedule(activities)?,
    };

    print_schedule(activities, &schedule);
    Ok(())
}

fn print_schedule(activities: &[Activity], schedule: &HallSchedule) {
    let width = activities.iter().map(|a| a.name.len()).max().unwrap_or(0);

    for activity in activities {
        let hall = schedule
            .get(&activity.name)
            .cloned()
            .flatten()
            .unwrap_or_else(|| "unassigned".to_string());
        println!(
            "{name:<width$}  {span}  -> {hall}",
            name = activity.name,
            span = activity.span,
        );
    }

    let unassigned: Vec<&str> = schedule
        .iter()
        .filter(|(_, hall)| hall.is_none())
        .map(|(name, _)| name.as_str())
        .collect();

    println!();
    println!("halls used: {}", named_halls_used(schedule));
    if unassigned.is_empty() {
        println!("unassigned: none");
    } else {
        println!("unassigned: {}", unassigned.join(", "));
    }
}
