//! Launch orchestration.
//!
//! Runs the full bootstrap: acquire the runtime context, parse arguments,
//! hand off to the solver once, release the context, and map every failure
//! to a process exit code. Usage errors and teardown failures exit 1; help
//! and a clean run exit 0.

use std::process::ExitCode;

use super::args::Invocation;
use super::output::{print_config_review, print_help};
use crate::config::{GridSpec, LaunchConfig};
use crate::runtime::{ProcessRuntime, RuntimeGuard};
use crate::solver::Solver;

/// Main CLI entry point.
///
/// The runtime context is acquired before any argument-dependent logic and
/// released on every path by the guard, including the usage-error exits.
#[must_use]
pub fn run_cli<I, S, R, K>(args: I, runtime: &mut R, solver: &mut K) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: ProcessRuntime + ?Sized,
    K: Solver + ?Sized,
{
    let guard = match RuntimeGuard::acquire(runtime) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let invocation = match Invocation::parse_from(args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            // Guard drop releases the context before the usage exit.
            return ExitCode::from(1);
        }
    };

    match invocation {
        Invocation::Help => {
            // The context is released before the banner is printed; help
            // always exits 0, so a teardown failure here is only logged.
            if let Err(e) = guard.release() {
                log::warn!("{e}");
            }
            print_help();
            ExitCode::SUCCESS
        }
        Invocation::Launch { config, grid } => launch(&config, grid, guard, solver),
    }
}

fn launch<R, K>(
    config: &LaunchConfig,
    grid: Option<GridSpec>,
    guard: RuntimeGuard<'_, R>,
    solver: &mut K,
) -> ExitCode
where
    R: ProcessRuntime + ?Sized,
    K: Solver + ?Sized,
{
    if config.debug {
        print_config_review(config, grid);
    }

    if let Err(e) = solver.run(config, grid) {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    match guard.release() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
