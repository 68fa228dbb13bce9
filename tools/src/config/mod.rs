//! Run parameters: the validated settings a provisioning run starts from.

use std::path::PathBuf;

mod args;
mod dotenv;

pub use args::{ParamSpec, RunArgs, CONFIGS_DIR_ENV, EXE_ENV, NUM_FEDERATORS_ENV};
pub use dotenv::DotEnv;

/// Smallest supported number of federators.
pub const MIN_FEDERATORS: usize = 1;
/// Largest supported number of federators.
pub const MAX_FEDERATORS: usize = 8;

/// Configuration errors. All of them are fatal and reported before any
/// network is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunParamsError {
    /// No executable path was given.
    #[error(
        "missing exe location: either set the RIPPLED_MAINCHAIN_EXE environment variable \
         or use the --exe command line switch"
    )]
    MissingExe,
    /// No configs directory was given.
    #[error(
        "missing configs directory location: either set the RIPPLED_SIDECHAIN_CFG_DIR \
         environment variable or use the --cfgs-dir command line switch"
    )]
    MissingConfigsDir,
    /// No federator count was given.
    #[error(
        "missing number of federators: either set the NUM_FEDERATORS environment variable \
         or use the --num-federators command line switch"
    )]
    MissingNumFederators,
    /// The federator count is not an integer.
    #[error("invalid number of federators: {0:?} is not an integer")]
    UnparsableNumFederators(String),
    /// The federator count is outside of `[MIN_FEDERATORS, MAX_FEDERATORS]`.
    #[error(
        "invalid number of federators: expected a value in [1, 8] (inclusive), \
         received {received}"
    )]
    NumFederatorsOutOfRange {
        /// The rejected value.
        received: i64,
    },
}

/// Validated run parameters. Only [`RunParamsBuilder::build`] creates them,
/// so holding one means every field is present and in range.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RunParams {
    /// Path to the rippled executable the nodes are launched with.
    pub exe: PathBuf,
    /// Directory the generated config files are written to.
    pub configs_dir: PathBuf,
    /// Number of federators, in `[MIN_FEDERATORS, MAX_FEDERATORS]`.
    pub num_federators: usize,
    /// Include a USD/root IOU asset for cross chain transfers.
    pub usd: bool,
}

impl RunParams {
    /// Starts an empty builder.
    pub fn builder() -> RunParamsBuilder {
        RunParamsBuilder::default()
    }

    /// Resolves the parameters from command line arguments and environment
    /// variables. A command line switch overrides the environment variable.
    #[tracing::instrument(level = "trace", skip(env), ret)]
    pub fn resolve(
        args: &RunArgs,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, RunParamsError> {
        let env: &dyn Fn(&str) -> Option<String> = &env;
        let mut builder = Self::builder().usd(args.usd);
        if let Some(exe) = ParamSpec::EXE.resolve(args.exe.clone(), env) {
            builder = builder.exe(exe);
        }
        if let Some(dir) = ParamSpec::CONFIGS_DIR.resolve(args.cfgs_dir.clone(), env) {
            builder = builder.configs_dir(dir);
        }
        if let Some(raw) =
            ParamSpec::NUM_FEDERATORS.resolve::<String>(args.num_federators.clone(), env)
        {
            let n = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| RunParamsError::UnparsableNumFederators(raw.clone()))?;
            builder = builder.num_federators(n);
        }
        builder.build()
    }

    /// Resolves the parameters against the process environment, with `dotenv`
    /// filling in the variables the process leaves unset.
    pub fn from_env(args: &RunArgs, dotenv: &DotEnv) -> Result<Self, RunParamsError> {
        Self::resolve(args, dotenv.layered(|name| std::env::var(name).ok()))
    }
}

/// Collects run parameters. Fields may be set in any order; validation
/// happens once, in [`RunParamsBuilder::build`].
#[derive(Debug, Default, Clone)]
pub struct RunParamsBuilder {
    exe: Option<PathBuf>,
    configs_dir: Option<PathBuf>,
    num_federators: Option<i64>,
    usd: bool,
}

impl RunParamsBuilder {
    /// Sets the executable path.
    pub fn exe(mut self, exe: impl Into<PathBuf>) -> Self {
        self.exe = Some(exe.into());
        self
    }

    /// Sets the configs directory.
    pub fn configs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.configs_dir = Some(dir.into());
        self
    }

    /// Sets the number of federators.
    pub fn num_federators(mut self, n: i64) -> Self {
        self.num_federators = Some(n);
        self
    }

    /// Sets the USD asset flag.
    pub fn usd(mut self, usd: bool) -> Self {
        self.usd = usd;
        self
    }

    /// Validates the collected fields. Empty paths count as missing.
    pub fn build(self) -> Result<RunParams, RunParamsError> {
        let exe = self
            .exe
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(RunParamsError::MissingExe)?;
        let configs_dir = self
            .configs_dir
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(RunParamsError::MissingConfigsDir)?;
        let received = self
            .num_federators
            .ok_or(RunParamsError::MissingNumFederators)?;
        let num_federators = usize::try_from(received)
            .ok()
            .filter(|n| (MIN_FEDERATORS..=MAX_FEDERATORS).contains(n))
            .ok_or(RunParamsError::NumFederatorsOutOfRange { received })?;
        Ok(RunParams {
            exe,
            configs_dir,
            num_federators,
            usd: self.usd,
        })
    }
}
