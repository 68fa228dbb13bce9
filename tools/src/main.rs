//! Provisions the topology of a sidechain test run. It resolves the run parameters,
//! generates the identities and ports of every node, and prints the launch plan as JSON.
#![allow(clippy::print_stdout)]
use anyhow::Context as _;
use clap::Parser;
use slk_roles::OsBackend;
use slk_tools::{
    config::{DotEnv, ParamSpec},
    ExternalMainchain, LaunchPlan, PlanOptions, PortAllocator, RunArgs, RunParams,
};
use std::io::IsTerminal as _;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{prelude::*, EnvFilter, Registry};

/// Environment variable holding the seed of the mainchain door account.
const MAIN_DOOR_SEED_ENV: &str = "MAIN_DOOR_SEED";
/// Where the seed of the mainchain door account can be found.
const MAIN_DOOR_SEED: ParamSpec<'static> =
    ParamSpec::new("Main door seed", "--main-door-seed", MAIN_DOOR_SEED_ENV);

/// Command line application printing the launch plan of a sidechain test run.
#[derive(Debug, Parser)]
struct Args {
    /// Run parameters.
    #[command(flatten)]
    run: RunArgs,
    /// Host of an already running mainchain. Requires `--mainchain-ws-port`.
    #[arg(long, requires = "mainchain_ws_port")]
    mainchain_url: Option<String>,
    /// Public WebSocket port of an already running mainchain.
    #[arg(long, requires = "mainchain_url")]
    mainchain_ws_port: Option<u16>,
    /// Number of sidechain nodes. Defaults to one node per federator.
    #[arg(long)]
    sidechain_nodes: Option<usize>,
    /// Seed of the mainchain door account. A fresh account is created if unset.
    #[arg(long)]
    main_door_seed: Option<String>,
    /// First port of the first node.
    #[arg(long, default_value_t = slk_tools::ports::DEFAULT_BASE_PORT)]
    base_port: u16,
}

impl Args {
    /// Extracts the plan options from these args, looking the door seed up in
    /// the environment and `dotenv` when no switch sets it.
    fn plan_options(&self, dotenv: &DotEnv) -> PlanOptions {
        let env = dotenv.layered(|name| std::env::var(name).ok());
        PlanOptions {
            external_mainchain: self
                .mainchain_url
                .clone()
                .zip(self.mainchain_ws_port)
                .map(|(url, ws_port)| ExternalMainchain { url, ws_port }),
            sidechain_nodes: self.sidechain_nodes,
            main_door_seed: MAIN_DOOR_SEED.resolve(self.main_door_seed.clone(), &env),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    // Logs go to stderr, so that stdout carries only the plan.
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var("NO_COLOR").is_err() && std::io::stderr().is_terminal())
        .with_file(false)
        .with_line_number(false)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );
    let subscriber = Registry::default().with(stderr_log);
    tracing::subscriber::set_global_default(subscriber).context("set_global_default()")?;

    let dotenv = DotEnv::find().context("DotEnv::find()")?;
    let params = RunParams::from_env(&args.run, &dotenv).context("RunParams::from_env()")?;
    tracing::debug!(?params, "Run parameters resolved.");

    let plan = LaunchPlan::new(
        &OsBackend,
        &PortAllocator::new(args.base_port),
        params,
        args.plan_options(&dotenv),
    )
    .context("LaunchPlan::new()")?;

    let summary = serde_json::to_string_pretty(&plan).context("serde_json::to_string_pretty()")?;
    println!("{summary}");
    Ok(())
}
