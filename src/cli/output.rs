//! CLI output formatting.

use crate::config::{GridSpec, LaunchConfig};

/// Print the program banner and usage to standard output.
pub fn print_help() {
    println!(
        r"ionosim {} - launcher for distributed ionospheric 3D simulation

USAGE:
    ionosim <output_directory> [options]

ARGS:
    <output_directory>      simulation output directory, e.g. ~/data/my_sim

OPTIONS:
    -d, -debug              enable debug mode
    -dryrun                 validate/setup only, do not execute
    -h, -help               print this help and exit
    -manual_grid <n2> <n3>  manually specify the 2-axis process decomposition
",
        env!("CARGO_PKG_VERSION")
    );
}

/// Print the assembled configuration before handoff (debug mode only).
pub fn print_config_review(config: &LaunchConfig, grid: Option<GridSpec>) {
    match config.to_yaml() {
        Ok(yaml) => {
            println!("Assembled configuration:");
            print!("{yaml}");
        }
        Err(e) => log::warn!("could not render configuration: {e}"),
    }
    match grid {
        Some(g) => println!("Process grid override: {} x {}", g.lid2, g.lid3),
        None => println!("Process grid: automatic decomposition"),
    }
}
