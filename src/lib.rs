//! # ionosim
//!
//! Command-line bootstrap for a distributed ionospheric 3D simulation.
//!
//! The launcher turns `argv` into a validated [`config::LaunchConfig`],
//! manages the distributed-runtime lifecycle around a single call into the
//! simulation kernel, and maps every failure to a process exit code. The
//! kernel itself sits behind the [`solver::Solver`] trait; its numerics are
//! not part of this crate.
//!
//! ## Example
//!
//! ```rust
//! use ionosim::cli::Invocation;
//!
//! let inv = Invocation::parse_from(["ionosim", "/data/my_sim", "-dryrun"]);
//! assert!(inv.is_ok());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod solver;

/// Re-export for public API
pub use error::{LaunchError, LaunchResult};
