//! `weekplan`: replay a scenario file and print the resulting plan.
//!
//! Usage: `weekplan <scenario.toml>`
//!
//! Diagnostics go to stderr (`RUST_LOG` controls the level, default
//! `info`); the overview and schedule go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use u_weekplan::scheduler::ScheduleKpi;
use u_weekplan::{render_resources, PlannerError, Scenario};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: weekplan <scenario.toml>");
        return ExitCode::from(2);
    };

    let planner = Scenario::from_file(&path)
        .map_err(PlannerError::from)
        .and_then(Scenario::into_planner);
    let planner = match planner {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "cannot load scenario");
            return ExitCode::FAILURE;
        }
    };

    if let Err(issues) = planner.audit() {
        for issue in &issues {
            tracing::warn!("{}", issue.message);
        }
    }

    print!("{}", planner.render_overview());
    println!();

    let code = match planner.generate_schedule() {
        Ok(schedule) => {
            println!("Schedule:\n");
            for line in schedule.render_lines() {
                println!("{line}");
            }
            println!("\nWeek view:\n");
            for entry in schedule.chronological() {
                let end = entry.end_min();
                println!(
                    "{} {}-{:02}:{:02}  {}",
                    entry.day,
                    entry.start,
                    end / 60,
                    end % 60,
                    entry.task.name
                );
            }
            let kpi = ScheduleKpi::calculate(&schedule);
            println!("\nBusy minutes: {}", kpi.total_busy_minutes);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Cannot generate schedule: {e}");
            ExitCode::FAILURE
        }
    };

    println!("\nAvailable resources:");
    print!("{}", render_resources(&planner.resource_snapshot()));
    code
}
