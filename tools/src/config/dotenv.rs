//! Variables of a `.env` file. They fill in whatever the process environment leaves unset.
use anyhow::Context as _;
use std::{collections::HashMap, path::Path};

/// Variables read from a `.env` file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DotEnv(HashMap<String, String>);

impl DotEnv {
    /// Reads the `.env` file of the current directory, or of the closest
    /// ancestor that has one. A missing file yields no variables.
    pub fn find() -> anyhow::Result<Self> {
        match dotenvy::dotenv_iter() {
            Ok(iter) => Self::collect(iter),
            Err(err) if err.not_found() => {
                tracing::debug!("No .env file found.");
                Ok(Self::default())
            }
            Err(err) => Err(err).context("dotenvy::dotenv_iter()"),
        }
    }

    /// Reads the `.env` file at `path`. A missing file yields no variables.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        match dotenvy::from_path_iter(path) {
            Ok(iter) => Self::collect(iter),
            Err(err) if err.not_found() => Ok(Self::default()),
            Err(err) => Err(err).with_context(|| format!("{path:?}")),
        }
    }

    fn collect(
        iter: impl Iterator<Item = dotenvy::Result<(String, String)>>,
    ) -> anyhow::Result<Self> {
        let vars = iter
            .collect::<Result<HashMap<_, _>, _>>()
            .context("malformed .env file")?;
        tracing::debug!("Loaded {} variables from .env.", vars.len());
        Ok(Self(vars))
    }

    /// Value of `name`, if the file sets it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Looks variables up in `process` first, and falls back to this file.
    /// Variables that are already set are never overridden by the file.
    pub fn layered<'a>(
        &'a self,
        process: impl Fn(&str) -> Option<String> + 'a,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| process(name).or_else(|| self.get(name).map(str::to_owned))
    }
}
