//! Launch configuration assembled from the command line.
//!
//! The configuration is built exactly once per process, before the solver
//! is invoked, and never mutated afterwards. The fixed-size path buffer of
//! the legacy frontend is replaced by an owned `String` guarded by an
//! explicit length-bound check, so an over-length path is a validation
//! failure rather than a truncation or an overrun.

use serde::Serialize;

use crate::error::{LaunchError, LaunchResult};

/// Maximum accepted output-directory length in bytes.
///
/// Matches the `LMAX` bound of the legacy frontend; paths of this length or
/// longer are rejected before the configuration is constructed.
pub const MAX_OUT_DIR_LEN: usize = 1000;

/// Configuration handed to the solver entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfig {
    /// Simulation output directory.
    pub out_dir: String,
    /// Reserved for the alternate Fortran-driven invocation mode; always
    /// false on this entry path.
    pub fortran_cli: bool,
    /// Enable verbose/debug behavior in the launcher and the solver.
    pub debug: bool,
    /// Validate and set up without executing the full run.
    pub dryrun: bool,
}

impl LaunchConfig {
    /// Create a configuration for the given output directory.
    ///
    /// # Errors
    ///
    /// Returns a usage error if the path is empty or its length reaches
    /// [`MAX_OUT_DIR_LEN`].
    pub fn new(out_dir: impl Into<String>) -> LaunchResult<Self> {
        let out_dir = out_dir.into();
        validate_out_dir(&out_dir)?;
        Ok(Self {
            out_dir,
            fortran_cli: false,
            debug: false,
            dryrun: false,
        })
    }

    /// Render the configuration as YAML for the debug-mode review print.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> LaunchResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Validate an output-directory path against the launcher's bounds.
///
/// # Errors
///
/// Returns a usage error for an empty path or one whose byte length is
/// `>= MAX_OUT_DIR_LEN`.
pub fn validate_out_dir(path: &str) -> LaunchResult<()> {
    if path.is_empty() {
        return Err(LaunchError::usage(
            "simulation output directory must not be empty",
        ));
    }
    if path.len() >= MAX_OUT_DIR_LEN {
        return Err(LaunchError::usage(format!(
            "simulation output directory: path length >= {MAX_OUT_DIR_LEN}"
        )));
    }
    Ok(())
}

/// Manual 2-axis process decomposition.
///
/// Absence (`Option::None` at the call site) means the solver chooses its
/// own decomposition; when present, both axes are always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    /// Number of processes along the second decomposition axis.
    pub lid2: u32,
    /// Number of processes along the third decomposition axis.
    pub lid3: u32,
}

impl GridSpec {
    /// Parse the two tokens following `-manual_grid`.
    ///
    /// # Errors
    ///
    /// Returns a usage error if either token is not a positive integer.
    pub fn parse(n2: &str, n3: &str) -> LaunchResult<Self> {
        Ok(Self {
            lid2: parse_axis(n2)?,
            lid3: parse_axis(n3)?,
        })
    }
}

fn parse_axis(token: &str) -> LaunchResult<u32> {
    match token.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LaunchError::usage(format!(
            "-manual_grid lid2in lid3in: '{token}' is not a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_stores_path_exactly() {
        let config = LaunchConfig::new("/data/my_sim").ok();
        assert!(config.is_some());
        let config = config.as_ref();
        assert_eq!(config.map(|c| c.out_dir.as_str()), Some("/data/my_sim"));
        assert_eq!(config.map(|c| c.fortran_cli), Some(false));
        assert_eq!(config.map(|c| c.debug), Some(false));
        assert_eq!(config.map(|c| c.dryrun), Some(false));
    }

    #[test]
    fn test_empty_out_dir_rejected() {
        let result = LaunchConfig::new("");
        assert!(result.is_err());
        assert!(result.err().is_some_and(|e| e.is_usage()));
    }

    #[test]
    fn test_out_dir_at_limit_rejected() {
        let path = "x".repeat(MAX_OUT_DIR_LEN);
        assert!(LaunchConfig::new(path).is_err());
    }

    #[test]
    fn test_out_dir_over_limit_rejected_with_limit_named() {
        let path = "x".repeat(MAX_OUT_DIR_LEN + 50);
        let err = LaunchConfig::new(path).err();
        let msg = err.map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("1000"));
    }

    #[test]
    fn test_out_dir_just_under_limit_accepted() {
        let path = "x".repeat(MAX_OUT_DIR_LEN - 1);
        let config = LaunchConfig::new(path.clone()).ok();
        assert_eq!(config.map(|c| c.out_dir), Some(path));
    }

    #[test]
    fn test_grid_spec_parse_valid() {
        let grid = GridSpec::parse("4", "8").ok();
        assert_eq!(grid, Some(GridSpec { lid2: 4, lid3: 8 }));
    }

    #[test]
    fn test_grid_spec_parse_rejects_non_integer() {
        assert!(GridSpec::parse("four", "8").is_err());
        assert!(GridSpec::parse("4", "eight").is_err());
    }

    #[test]
    fn test_grid_spec_parse_rejects_zero_and_negative() {
        assert!(GridSpec::parse("0", "8").is_err());
        assert!(GridSpec::parse("4", "-8").is_err());
    }

    #[test]
    fn test_config_yaml_dump_names_fields() {
        let config = LaunchConfig::new("/data/my_sim").ok();
        let yaml = config.and_then(|c| c.to_yaml().ok()).unwrap_or_default();
        assert!(yaml.contains("out_dir: /data/my_sim"));
        assert!(yaml.contains("dryrun: false"));
        assert!(yaml.contains("fortran_cli: false"));
    }
}
