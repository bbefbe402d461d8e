use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use abacus_solvers::newton;

/// Largest accepted `precision`; 17 decimal places distinguish any two `f64`
/// values in `[1, 2)`.
pub const MAX_PRECISION: usize = 17;

/// Settings for a shell session.
///
/// Every key is optional in TOML; missing keys take their [`Default`] values.
///
/// ```toml
/// precision = 4
/// trace = true
///
/// [solver]
/// max_iters = 200
/// x_rel_tol = 1e-12
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Decimal places used when printing a result, at most [`MAX_PRECISION`].
    pub precision: usize,

    /// Whether root-finding iterations are written to the log stream.
    pub trace: bool,

    /// Newton solver settings for the root operations.
    pub solver: SolverSettings,
}

/// Unvalidated Newton solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    /// Newton updates allowed before a root reports no convergence.
    pub max_iters: usize,

    /// Absolute step size at which iteration stops.
    pub x_abs_tol: f64,

    /// Step size, relative to the current iterate, at which iteration stops.
    pub x_rel_tol: f64,
}

/// Errors that can occur when loading a shell config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("precision {0} exceeds the maximum of {MAX_PRECISION}")]
    Precision(usize),

    #[error("invalid solver settings: {0}")]
    Solver(#[from] newton::ConfigError),
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            trace: false,
            solver: SolverSettings::default(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        let config = newton::Config::default();
        Self {
            max_iters: config.max_iters(),
            x_abs_tol: config.x_abs_tol(),
            x_rel_tol: config.x_rel_tol(),
        }
    }
}

impl SolverSettings {
    /// Validates the settings into a solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite.
    pub fn to_config(&self) -> Result<newton::Config, ConfigError> {
        Ok(newton::Config::new(
            self.max_iters,
            self.x_abs_tol,
            self.x_rel_tol,
        )?)
    }
}

impl ShellConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this config, the
    /// precision is above [`MAX_PRECISION`], or the solver settings are
    /// invalid.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.precision > MAX_PRECISION {
            return Err(ConfigError::Precision(config.precision));
        }
        config.solver.to_config()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Returns the validated Newton solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver settings are invalid.
    pub fn solver_config(&self) -> Result<newton::Config, ConfigError> {
        self.solver.to_config()
    }
}
