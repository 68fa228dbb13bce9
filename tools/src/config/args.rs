use std::{ffi::OsStr, path::PathBuf};
use tracing::instrument;

/// Environment variable holding the executable path.
pub const EXE_ENV: &str = "RIPPLED_MAINCHAIN_EXE";
/// Environment variable holding the configs directory.
pub const CONFIGS_DIR_ENV: &str = "RIPPLED_SIDECHAIN_CFG_DIR";
/// Environment variable holding the number of federators.
pub const NUM_FEDERATORS_ENV: &str = "NUM_FEDERATORS";

/// Command line switches for the run parameters. Every switch may be
/// replaced by an environment variable, see [`ParamSpec`].
#[derive(Debug, Default, Clone, clap::Args)]
pub struct RunArgs {
    /// Path to the rippled executable.
    #[arg(long, short = 'e')]
    pub exe: Option<PathBuf>,
    /// Include a USD/root IOU asset for cross chain transfers.
    #[arg(long, short = 'u')]
    pub usd: bool,
    /// Path to the configuration file directory (where the output config files will be located).
    #[arg(long, short = 'c', visible_alias = "cfgs_dir")]
    pub cfgs_dir: Option<PathBuf>,
    /// How many federators to create config files for. Must be between 1 and 8.
    #[arg(long, short = 'n', visible_alias = "num_federators")]
    pub num_federators: Option<String>,
}

/// Where a single parameter can be found.
#[derive(Debug)]
pub struct ParamSpec<'a> {
    name: &'a str,
    flag: &'a str,
    env: &'a str,
}

impl<'a> ParamSpec<'a> {
    pub(crate) const EXE: Self = Self::new("Executable", "--exe", EXE_ENV);
    pub(crate) const CONFIGS_DIR: Self =
        Self::new("Configs directory", "--cfgs-dir", CONFIGS_DIR_ENV);
    pub(crate) const NUM_FEDERATORS: Self =
        Self::new("Number of federators", "--num-federators", NUM_FEDERATORS_ENV);

    /// Describes a parameter set by `flag` or by the `env` environment variable.
    pub const fn new(name: &'a str, flag: &'a str, env: &'a str) -> Self {
        Self { name, flag, env }
    }

    /// Picks the command line value if present, and falls back to the environment.
    /// An empty command line value counts as absent.
    #[instrument(level = "trace", skip(flag_value, env))]
    pub fn resolve<T: From<String> + AsRef<OsStr>>(
        &self,
        flag_value: Option<T>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Option<T> {
        if let Some(value) = flag_value.filter(|v| !v.as_ref().is_empty()) {
            tracing::debug!("{} found in command line switch {}.", self.name, self.flag);
            return Some(value);
        }

        if let Some(value) = env(self.env) {
            tracing::debug!("{} found in environment variable {}.", self.name, self.env);
            return Some(value.into());
        }

        tracing::debug!("{} is not set.", self.name);
        None
    }
}
