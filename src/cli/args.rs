//! CLI argument parsing.
//!
//! The launcher's surface predates this implementation: single-dash long
//! options, a positional output directory, and unknown tokens that are
//! silently ignored. A derive-based parser cannot express that, so parsing
//! is done by hand over an argument iterator, which also makes it fully
//! testable.

use crate::config::{GridSpec, LaunchConfig};
use crate::error::{LaunchError, LaunchResult};

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the help banner and exit successfully.
    Help,
    /// Launch the solver with the assembled configuration.
    Launch {
        /// Configuration handed to the solver.
        config: LaunchConfig,
        /// Manual process decomposition, `None` for automatic.
        grid: Option<GridSpec>,
    },
}

impl Invocation {
    /// Parse command-line arguments from an iterator.
    ///
    /// Accepts any iterator of strings, not just `std::env::args()`, to
    /// keep the parser testable.
    ///
    /// # Errors
    ///
    /// Returns a usage error for a missing or invalid output directory and
    /// for a malformed `-manual_grid` flag.
    pub fn parse_from<I, S>(args: I) -> LaunchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    ///
    /// # Errors
    ///
    /// See [`Invocation::parse_from`].
    pub fn parse() -> LaunchResult<Self> {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> LaunchResult<Self> {
        if args.len() < 2 {
            return Err(LaunchError::usage(
                "please give simulation output directory e.g. ~/data/my_sim",
            ));
        }

        // Help is honored even in the positional slot.
        if is_help(&args[1]) {
            return Ok(Self::Help);
        }

        let mut config = LaunchConfig::new(args[1].as_str())?;
        let mut grid = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "-d" | "-debug" => {
                    config.debug = true;
                    i += 1;
                }
                "-dryrun" => {
                    config.dryrun = true;
                    i += 1;
                }
                "-h" | "-help" => return Ok(Self::Help),
                "-manual_grid" => {
                    // Consumes the next two tokens as decomposition axes.
                    if i + 2 >= args.len() {
                        return Err(LaunchError::usage("-manual_grid lid2in lid3in"));
                    }
                    grid = Some(GridSpec::parse(&args[i + 1], &args[i + 2])?);
                    i += 3;
                }
                // Unrecognized tokens are ignored.
                _ => i += 1,
            }
        }

        Ok(Self::Launch { config, grid })
    }
}

fn is_help(token: &str) -> bool {
    matches!(token, "-h" | "-help")
}
