//! Solver entry-point boundary.
//!
//! The simulation kernel is an external collaborator: the launcher only
//! needs a single operation, `run(config, grid)`, performed after the
//! runtime context is initialized and before it is torn down. The call runs
//! collectively across all processes in the runtime group. Defining the
//! boundary with an explicit result lets the bootstrap map kernel failure
//! to a distinct exit code and be tested against a mock implementation.

use std::path::Path;

use crate::config::{GridSpec, LaunchConfig};
use crate::error::{LaunchError, LaunchResult};

/// The simulation kernel the launcher delegates to.
pub trait Solver {
    /// Run the simulation with the assembled configuration.
    ///
    /// `grid` of `None` requests automatic process decomposition.
    ///
    /// # Errors
    ///
    /// Returns `Solver` on any kernel-reported failure.
    fn run(&mut self, config: &LaunchConfig, grid: Option<GridSpec>) -> LaunchResult<()>;
}

/// Default kernel binding used by the `ionosim` binary.
///
/// Validates the launch parameters the kernel depends on before the
/// numerical run is dispatched; the numerics themselves live outside this
/// crate.
#[derive(Debug, Default)]
pub struct SimulationKernel;

impl Solver for SimulationKernel {
    fn run(&mut self, config: &LaunchConfig, grid: Option<GridSpec>) -> LaunchResult<()> {
        match grid {
            Some(g) => log::info!("process grid: {} x {} (manual)", g.lid2, g.lid3),
            None => log::info!("process grid: automatic decomposition"),
        }

        if !Path::new(&config.out_dir).is_dir() {
            return Err(LaunchError::Solver(format!(
                "output directory '{}' does not exist",
                config.out_dir
            )));
        }

        if config.dryrun {
            log::info!("dry run requested; setup validated, skipping execution");
            return Ok(());
        }

        log::info!("launching simulation, output directory '{}'", config.out_dir);
        Ok(())
    }
}
