//! ionosim CLI - bootstrap for the distributed simulation kernel.
//!
//! ```sh
//! ionosim ~/data/my_sim -debug -dryrun
//! ionosim ~/data/my_sim -manual_grid 4 8
//! ```

use std::process::ExitCode;

use ionosim::cli::run_cli;
use ionosim::runtime::LocalRuntime;
use ionosim::solver::SimulationKernel;

fn main() -> ExitCode {
    init_logging();
    let mut runtime = LocalRuntime::default();
    let mut kernel = SimulationKernel;
    run_cli(std::env::args(), &mut runtime, &mut kernel)
}

/// Configure the log filter before any log call.
///
/// `env_logger` is process-global, so the debug flag is pre-scanned from
/// argv here; full argument validation happens later in the bootstrap.
fn init_logging() {
    let debug = std::env::args()
        .skip(2)
        .any(|a| a == "-d" || a == "-debug");
    let filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
