//! End-to-end scenarios the runner can execute against a live dashboard.

use anyhow::Result;
use clap::Subcommand;

use dash_e2e_ci_utils::{E2eConfig, PageNavigator};
use dash_e2e_pages::{HostsPageHelper, LoginPageHelper};

/// Label added and removed again by the lifecycle scenario.
pub const LIFECYCLE_LABEL: &str = "e2e";

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// The host table lists hosts and every service link of the first one works
    Smoke,

    /// Add a host, edit its labels and remove it again
    Lifecycle {
        /// Host to add; must be reachable by the orchestrator
        #[arg(long)]
        hostname: String,

        /// Predefined labels to pick in the add form
        #[arg(long, value_delimiter = ',')]
        labels: Vec<String>,

        /// Also cycle the host through maintenance before removing it
        #[arg(long)]
        maintenance: bool,
    },

    /// Drain a host and wait until it runs no daemons
    Drain {
        #[arg(long)]
        hostname: String,
    },
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Smoke => "smoke",
            Scenario::Lifecycle { .. } => "lifecycle",
            Scenario::Drain { .. } => "drain",
        }
    }
}

/// Log in with the configured credentials, then run `scenario`.
pub async fn run<N: PageNavigator>(
    scenario: &Scenario,
    config: &E2eConfig,
    hosts: &HostsPageHelper<N>,
) -> Result<()> {
    log::info!("🧪 Running scenario '{}'", scenario.name());
    LoginPageHelper::new(hosts.navigator())
        .login(&config.username, &config.password)
        .await?;

    match scenario {
        Scenario::Smoke => smoke(hosts).await?,
        Scenario::Lifecycle {
            hostname,
            labels,
            maintenance,
        } => {
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            lifecycle(hosts, hostname, &labels, *maintenance).await?
        }
        Scenario::Drain { hostname } => {
            hosts.navigate_to().await?;
            hosts.drain(hostname).await?
        }
    }

    log::info!("✅ Scenario '{}' passed", scenario.name());
    Ok(())
}

async fn smoke<N: PageNavigator>(hosts: &HostsPageHelper<N>) -> Result<()> {
    hosts.navigate_to().await?;
    hosts.check_for_hosts().await?;
    hosts.check_services_links().await
}

async fn lifecycle<N: PageNavigator>(
    hosts: &HostsPageHelper<N>,
    hostname: &str,
    labels: &[&str],
    maintenance: bool,
) -> Result<()> {
    hosts.navigate_to().await?;
    hosts.add(hostname, false, false, labels).await?;
    hosts.check_exist(hostname, true).await?;
    if !labels.is_empty() {
        hosts.check_label_exists(hostname, labels, true).await?;
    }

    // a second add of the same host must be refused by the form
    hosts.add(hostname, true, false, &[]).await?;

    hosts.edit_labels(hostname, &[LIFECYCLE_LABEL], true).await?;
    hosts.edit_labels(hostname, &[LIFECYCLE_LABEL], false).await?;

    if maintenance {
        hosts.maintenance(hostname, false, false).await?;
        hosts.maintenance(hostname, true, false).await?;
    }

    hosts.remove(hostname).await?;
    hosts.check_exist(hostname, false).await
}
