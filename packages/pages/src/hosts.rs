//! Page object for the cluster "Hosts" screen.

use anyhow::Result;
use std::time::Duration;

use dash_e2e_ci_utils::selectors::{row_cell, row_cell_badges, MODAL_BUTTON, TABLE_ROW};
use dash_e2e_ci_utils::{
    assertion_kind, table_cell_query, AssertionError, Browser, CountSpan, ElementOf,
    PageNavigator, PageRoute, Query,
};

/// Host index and the add-host modal route.
pub const INDEX: PageRoute = PageRoute {
    url: "#/hosts",
    id: "cd-hosts",
};
pub const ADD: PageRoute = PageRoute {
    url: "#/hosts/(modal:add)",
    id: "cd-host-form",
};

/// 1-based column positions of the hosts table.
pub mod columns {
    pub const HOSTNAME: usize = 2;
    pub const SERVICES: usize = 3;
    pub const LABELS: usize = 4;
    pub const STATUS: usize = 5;
}

pub mod selectors {
    pub const SERVICE_LINK: &str = "a.service-link";
    pub const HOSTS_SERVICE_LINK: &str = "cd-hosts a.service-link";

    pub const HOSTNAME_INPUT: &str = "#hostname";
    pub const MAINTENANCE_TOGGLE: &str = "label[for=maintenance]";
    pub const BACK_BUTTON: &str = "cd-back-button";
    pub const SUBMIT_BUTTON: &str = "cd-submit-button";
    pub const SELECT_MENU_EDIT: &str = "a[data-testid=select-menu-edit]";
    pub const SELECT_MENU_ITEM: &str = ".popover-body div.select-menu-item-content";

    pub const MODAL_LABEL_EDIT: &str = "cd-modal .select-menu-edit";
    pub const MODAL_BADGE: &str = "cd-modal .badge";
    pub const BADGE_REMOVE: &str = ".badge-remove";
    pub const POPOVER_INPUT: &str = ".popover-body input";
    pub const MODAL_SUBMIT: &str = "cd-modal cd-submit-button";

    pub const HOST_DETAILS: &str = "cd-host-details";
}

pub const INVALID_CLASS: &str = "ng-invalid";
pub const MAINTENANCE: &str = "maintenance";
pub const NO_SCHEDULE_LABEL: &str = "_no_schedule";
pub const PERFORMANCE_COUNTERS: &str = "Performance Counters";
pub const DAEMONS_TAB: &str = "Daemons";

pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(120);

/// Trimmed texts of the `column` cell(s) in the row whose hostname cell
/// matches `hostname_cell`. Re-located on every call.
async fn row_texts<B: Browser>(
    browser: &B,
    hostname_cell: &Query,
    column: &Query,
) -> Result<Vec<String>> {
    let cells = browser.find_all(None, hostname_cell).await?;
    let cell = cells.first().ok_or_else(|| AssertionError::NotFound {
        query: hostname_cell.to_string(),
    })?;
    let row = browser.parent(cell).await?;

    let mut texts = Vec::new();
    for element in browser.find_all(Some(&row), column).await? {
        texts.push(browser.text(&element).await?.trim().to_string());
    }
    Ok(texts)
}

pub struct HostsPageHelper<N> {
    nav: N,
    drain_timeout: Duration,
}

impl<N: PageNavigator> HostsPageHelper<N> {
    pub fn new(nav: N) -> Self {
        Self {
            nav,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
        }
    }

    /// How long `drain` waits for the Daemons tab to empty.
    pub fn with_drain_timeout(mut self, drain_timeout: Duration) -> Self {
        self.drain_timeout = drain_timeout;
        self
    }

    pub fn navigator(&self) -> &N {
        &self.nav
    }

    pub fn into_navigator(self) -> N {
        self.nav
    }

    fn browser(&self) -> &N::Browser {
        self.nav.browser()
    }

    pub async fn navigate_to(&self) -> Result<()> {
        self.nav.navigate_to(&INDEX).await
    }

    async fn click_first(&self, scope: Option<&ElementOf<N>>, query: &Query) -> Result<()> {
        let element = self.nav.get_first(scope, query).await?;
        self.browser().click(&element).await
    }

    async fn select_host(&self, hostname: &str) -> Result<()> {
        let cell = self.nav.get_table_cell(columns::HOSTNAME, hostname, false).await?;
        self.browser().click(&cell).await
    }

    pub async fn check_for_hosts(&self) -> Result<()> {
        let nav = &self.nav;
        let total = nav
            .waiter()
            .retry("a non-empty host table", move || async move {
                let total = nav.get_table_count(None, CountSpan::Total).await?;
                if total == 0 {
                    Err(AssertionError::postcondition("host table reports 0 total").into())
                } else {
                    Ok(total)
                }
            })
            .await?;
        log::info!("✅ Host table lists {total} host(s)");
        Ok(())
    }

    /// Click every service link of the first host row and come back.
    pub async fn check_services_links(&self) -> Result<()> {
        let nav = &self.nav;
        let browser = self.browser();
        let row = nav.get_first(None, &Query::css(TABLE_ROW)).await?;
        let row = &row;
        let links_query = &Query::css(selectors::SERVICE_LINK);

        let names = nav
            .waiter()
            .retry("service links", move || async move {
                let links = browser.find_all(Some(row), links_query).await?;
                if links.is_empty() {
                    return Err(AssertionError::empty("service link in the first host row").into());
                }
                let mut names = Vec::with_capacity(links.len());
                for link in &links {
                    names.push(browser.text(link).await?.trim().to_string());
                }
                Ok(names)
            })
            .await?;

        let mut links_tested = 0usize;
        for name in &names {
            // links go stale after navigating away, so find each one again
            self.click_first(None, &Query::css(selectors::HOSTS_SERVICE_LINK).exact(name))
                .await?;
            nav.expect_breadcrumb_text(PERFORMANCE_COUNTERS).await?;
            self.navigate_to().await?;
            links_tested += 1;
            log::debug!("🔗 Service link '{name}' works");
        }

        if links_tested == 0 {
            return Err(AssertionError::empty("tested service link").into());
        }
        log::info!("✅ Checked {links_tested} service link(s)");
        Ok(())
    }

    /// Fill in the add-host form.
    ///
    /// With `exist` set this only checks that the form rejects the hostname
    /// and backs out; nothing is submitted.
    pub async fn add(
        &self,
        hostname: &str,
        exist: bool,
        maintenance: bool,
        labels: &[&str],
    ) -> Result<()> {
        log::info!("➕ Adding host '{hostname}' (exist: {exist}, maintenance: {maintenance})");
        let nav = &self.nav;
        let browser = self.browser();

        nav.navigate_to(&ADD).await?;
        let form = nav.get_first(None, &Query::css(ADD.id)).await?;
        let input = nav
            .get_first(Some(&form), &Query::css(selectors::HOSTNAME_INPUT))
            .await?;
        browser.type_text(&input, hostname).await?;

        if maintenance {
            self.click_first(Some(&form), &Query::css(selectors::MAINTENANCE_TOGGLE))
                .await?;
        }

        if exist {
            let input = &input;
            nav.waiter()
                .retry("hostname to be rejected", move || async move {
                    let classes = browser.classes(input).await?;
                    if classes.iter().any(|class| class == INVALID_CLASS) {
                        Ok(())
                    } else {
                        Err(AssertionError::precondition(format!(
                            "hostname field accepted existing host '{hostname}'"
                        ))
                        .into())
                    }
                })
                .await?;
            self.click_first(Some(&form), &Query::css(selectors::BACK_BUTTON)).await?;
            nav.ensure_absent(None, &Query::css(ADD.id)).await?;
            nav.get(None, &Query::css(INDEX.id)).await?;
            return Ok(());
        }

        if !labels.is_empty() {
            self.select_predefined_labels(labels).await?;
        }

        self.click_first(None, &Query::css(selectors::SUBMIT_BUTTON)).await?;
        nav.ensure_absent(None, &Query::css(ADD.id)).await?;
        nav.get(None, &Query::css(INDEX.id)).await?;
        Ok(())
    }

    /// Pick labels from the predefined label menu of the add form.
    pub async fn select_predefined_labels(&self, labels: &[&str]) -> Result<()> {
        self.click_first(None, &Query::css(selectors::SELECT_MENU_EDIT)).await?;
        for label in labels {
            self.click_first(None, &Query::css(selectors::SELECT_MENU_ITEM).exact(*label))
                .await?;
        }
        Ok(())
    }

    pub async fn check_exist(&self, hostname: &str, exist: bool) -> Result<()> {
        let nav = &self.nav;
        let browser = self.browser();
        nav.waiter()
            .retry(&format!("host '{hostname}' exist={exist}"), move || async move {
                let mut hosts = Vec::new();
                for cell in nav.get_table_cells(columns::HOSTNAME, hostname).await? {
                    hosts.push(browser.text(&cell).await?.trim().to_string());
                }
                let present = hosts.iter().any(|host| host == hostname);
                if present == exist {
                    Ok(())
                } else if exist {
                    Err(AssertionError::postcondition(format!(
                        "host '{hostname}' is not listed"
                    ))
                    .into())
                } else {
                    Err(AssertionError::postcondition(format!(
                        "host '{hostname}' is still listed"
                    ))
                    .into())
                }
            })
            .await
    }

    /// Remove exactly `hostname`; hosts sharing its prefix are left alone.
    pub async fn remove(&self, hostname: &str) -> Result<()> {
        self.nav
            .delete(hostname, Some(columns::HOSTNAME), Some("hosts"), false)
            .await
    }

    /// Add or remove labels through the edit modal, then verify the table.
    pub async fn edit_labels(&self, hostname: &str, labels: &[&str], add: bool) -> Result<()> {
        log::info!(
            "🏷️ {} labels {labels:?} on '{hostname}'",
            if add { "Adding" } else { "Removing" }
        );
        let nav = &self.nav;
        let browser = self.browser();

        self.select_host(hostname).await?;
        nav.click_action_button("edit").await?;

        if add {
            self.click_first(None, &Query::css(selectors::MODAL_LABEL_EDIT)).await?;
            for label in labels {
                let badge = Query::css(selectors::MODAL_BADGE).exact(*label);
                if let Err(err) = nav.ensure_absent(None, &badge).await {
                    return Err(match assertion_kind(&err) {
                        Some(AssertionError::Postcondition { .. }) => {
                            AssertionError::precondition(format!(
                                "label '{label}' is already set on '{hostname}'"
                            ))
                            .into()
                        }
                        _ => err,
                    });
                }
                let input = nav
                    .get_first(None, &Query::css(selectors::POPOVER_INPUT))
                    .await?;
                browser.type_text(&input, label).await?;
                browser.press_enter(&input).await?;
            }
        } else {
            for label in labels {
                let badge = nav
                    .get_first(None, &Query::css(selectors::MODAL_BADGE).exact(*label))
                    .await?;
                self.click_first(Some(&badge), &Query::css(selectors::BADGE_REMOVE)).await?;
            }
        }

        self.click_first(None, &Query::css(selectors::MODAL_SUBMIT)).await?;
        self.check_label_exists(hostname, labels, add).await
    }

    /// Verify the labels column of `hostname` has (or lacks) every label.
    pub async fn check_label_exists(
        &self,
        hostname: &str,
        labels: &[&str],
        add: bool,
    ) -> Result<()> {
        let nav = &self.nav;
        let browser = self.browser();
        nav.get_table_cell(columns::HOSTNAME, hostname, false).await?;

        let hostname_cell = &table_cell_query(columns::HOSTNAME, hostname, false);
        let badges = &Query::css(row_cell_badges(columns::LABELS));
        nav.waiter()
            .retry(&format!("labels of '{hostname}'"), move || async move {
                let current = row_texts(browser, hostname_cell, badges).await?;
                for label in labels {
                    let present = current.iter().any(|existing| existing == label);
                    if present != add {
                        return Err(AssertionError::postcondition(format!(
                            "label '{label}' {} on '{hostname}' (labels: {current:?})",
                            if add { "is missing" } else { "is still present" }
                        ))
                        .into());
                    }
                }
                Ok(())
            })
            .await
    }

    async fn status_text(&self, hostname: &str) -> Result<String> {
        let hostname_cell = table_cell_query(columns::HOSTNAME, hostname, false);
        let status = Query::css(row_cell(columns::STATUS));
        Ok(row_texts(self.browser(), &hostname_cell, &status).await?.join(" "))
    }

    async fn expect_maintenance(&self, hostname: &str, in_maintenance: bool) -> Result<()> {
        let what = format!("'{hostname}' maintenance={in_maintenance}");
        self.nav
            .waiter()
            .retry(&what, move || async move {
                let status = self.status_text(hostname).await?;
                if status.contains(MAINTENANCE) == in_maintenance {
                    Ok(())
                } else {
                    Err(AssertionError::postcondition(format!(
                        "status of '{hostname}' is {status:?}"
                    ))
                    .into())
                }
            })
            .await
    }

    /// Move `hostname` into maintenance, or out of it with `exit`.
    ///
    /// `force` confirms the warning dialog the dashboard shows when entering
    /// maintenance would stop services; it always enters, `exit` is ignored.
    pub async fn maintenance(&self, hostname: &str, exit: bool, force: bool) -> Result<()> {
        self.nav
            .restrict_to(INDEX.url, "HostsPageHelper::maintenance")
            .await?;
        self.nav.clear_table_search_input().await?;

        if force {
            log::info!("🛠️ Forcing '{hostname}' into maintenance");
            self.select_host(hostname).await?;
            self.nav.click_action_button("enter-maintenance").await?;
            self.click_first(None, &Query::css(MODAL_BUTTON).contains("Continue")).await?;
            return self.expect_maintenance(hostname, true).await;
        }

        if exit {
            log::info!("🛠️ Taking '{hostname}' out of maintenance");
            self.select_host(hostname).await?;
            if self.status_text(hostname).await?.contains(MAINTENANCE) {
                self.nav.click_action_button("exit-maintenance").await?;
            } else {
                log::debug!("'{hostname}' is not in maintenance, nothing to exit");
            }
            return self.expect_maintenance(hostname, false).await;
        }

        log::info!("🛠️ Putting '{hostname}' into maintenance");
        self.select_host(hostname).await?;
        self.nav.click_action_button("enter-maintenance").await?;
        self.expect_maintenance(hostname, true).await
    }

    /// Start draining `hostname` and wait until its Daemons tab is empty.
    pub async fn drain(&self, hostname: &str) -> Result<()> {
        let nav = &self.nav;
        nav.restrict_to(INDEX.url, "HostsPageHelper::drain").await?;

        log::info!("🚰 Draining '{hostname}'");
        self.select_host(hostname).await?;
        nav.click_action_button("start-drain").await?;
        self.check_label_exists(hostname, &[NO_SCHEDULE_LABEL], true).await?;

        nav.click_tab(selectors::HOST_DETAILS, hostname, DAEMONS_TAB).await?;
        let details = nav
            .get_first(None, &Query::css(selectors::HOST_DETAILS))
            .await?;
        let details = &details;

        nav.waiter()
            .with_timeout(self.drain_timeout)
            .retry(&format!("daemons of '{hostname}' to drain"), move || async move {
                let remaining = nav.get_table_count(Some(details), CountSpan::Total).await?;
                if remaining == 0 {
                    Ok(())
                } else {
                    Err(AssertionError::postcondition(format!(
                        "{remaining} daemon(s) still running on '{hostname}'"
                    ))
                    .into())
                }
            })
            .await?;
        log::info!("✅ '{hostname}' drained");
        Ok(())
    }
}
