mod args;
mod output;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use rigctl_core::client;
use rigctl_core::config::{RawSettings, Settings, DEFAULT_API_URL};

#[derive(Parser)]
#[command(
    name = "rigctl",
    about = "Start, stop, or change the power mode of a NiceHash mining rig",
    version
)]
struct Cli {
    /// Action to be taken: START, STOP, POWER_MODE
    #[arg(long, env = "NICEHASH_ACTION", default_value = "START")]
    action: String,

    /// API key from https://www.nicehash.com/my/settings/keys
    #[arg(long, env = "NICEHASH_API_KEY")]
    api_key: Option<String>,

    /// API secret from https://www.nicehash.com/my/settings/keys
    #[arg(long, env = "NICEHASH_API_SECRET", hide_env_values = true)]
    api_secret: Option<String>,

    /// Organization id from https://www.nicehash.com/my/settings/keys
    #[arg(long, env = "NICEHASH_ORG_ID")]
    org_id: Option<String>,

    /// Rig id to act on, from https://www.nicehash.com/my/mining/rigs/
    #[arg(long, env = "NICEHASH_RIG_ID")]
    rig_id: Option<String>,

    /// API base URL
    #[arg(long, env = "NICEHASH_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

impl Cli {
    fn raw_settings(&self) -> RawSettings {
        RawSettings {
            action: Some(self.action.clone()),
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            org_id: self.org_id.clone(),
            rig_id: self.rig_id.clone(),
            api_url: Some(self.api_url.clone()),
        }
    }
}

fn main() {
    let argv = args::normalize(std::env::args_os(), &Cli::command());
    let cli = Cli::parse_from(argv);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::from_raw(cli.raw_settings())?;
    tracing::debug!(api_url = %settings.api_url, action = %settings.action, "settings validated");

    let outcome = client::run(&settings)
        .with_context(|| format!("{} on rig {} failed", settings.action, settings.rig_id))?;
    output::print_outcome(&outcome, cli.json)
}
