//! `dash-e2e`: run browser scenarios against the dashboard Hosts page.
//!
//! Configuration comes from an optional TOML file, then `DASHBOARD_*` /
//! `WEBDRIVER_URL` environment variables, then command line flags. A
//! WebDriver server (geckodriver, chromedriver) must already be listening.

mod scenarios;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use std::path::{Path, PathBuf};

use dash_e2e_ci_utils::{Browser, E2eConfig, PageHelper, WebDriverBrowser};
use dash_e2e_pages::HostsPageHelper;
use scenarios::Scenario;

/// Browser E2E scenarios for the dashboard Hosts page
#[derive(Parser, Debug)]
#[command(name = "dash-e2e")]
#[command(about = "Browser E2E scenarios for the dashboard Hosts page", long_about = None)]
struct Args {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dashboard root URL, e.g. https://ceph-node1:8443/
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// WebDriver endpoint
    #[arg(long, global = true)]
    webdriver_url: Option<String>,

    /// Run the browser headless
    #[arg(long, global = true, conflicts_with = "headed")]
    headless: bool,

    /// Run the browser with a visible window
    #[arg(long, global = true)]
    headed: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    scenario: Scenario,
}

impl Args {
    fn resolve_config(&self) -> Result<E2eConfig> {
        let mut config = E2eConfig::load(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }
        if self.headless {
            config.headless = true;
        }
        if self.headed {
            config.headless = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn screenshot_name(scenario: &str, at: NaiveDateTime) -> String {
    format!("{scenario}-{}.png", at.format("%Y%m%d-%H%M%S"))
}

async fn save_screenshot<B: Browser>(browser: &B, dir: &Path, scenario: &str) -> Result<PathBuf> {
    let png = browser.screenshot().await?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create screenshot dir {}", dir.display()))?;
    let path = dir.join(screenshot_name(scenario, chrono::Local::now().naive_local()));
    std::fs::write(&path, png)
        .with_context(|| format!("Failed to write screenshot {}", path.display()))?;
    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let config = args.resolve_config()?;
    log::info!("📍 Dashboard at {}", config.base_url);

    let browser = WebDriverBrowser::connect(&config).await?;
    let hosts = HostsPageHelper::new(PageHelper::new(browser, config.waiter()))
        .with_drain_timeout(config.drain_timeout());

    let outcome = scenarios::run(&args.scenario, &config, &hosts).await;
    let browser = hosts.into_navigator().into_browser();

    if let Err(err) = &outcome {
        log::error!("❌ Scenario '{}' failed: {err:#}", args.scenario.name());
        if let Some(dir) = &config.screenshot_dir {
            match save_screenshot(&browser, dir, args.scenario.name()).await {
                Ok(path) => log::info!("📸 Screenshot saved to {}", path.display()),
                Err(shot_err) => log::warn!("⚠️ Could not save screenshot: {shot_err:#}"),
            }
        }
    }

    if let Err(err) = browser.close().await {
        log::warn!("⚠️ {err:#}");
    }
    outcome
}
