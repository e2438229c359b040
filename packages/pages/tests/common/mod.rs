//! In-memory stand-in for the dashboard DOM, driven through `Browser`.
#![allow(dead_code)] // each test binary uses a different subset of the fixture

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use dash_e2e_ci_utils::selectors as table;
use dash_e2e_ci_utils::{Browser, PageHelper, Query, Waiter};
use dash_e2e_pages::hosts::{selectors as hosts, ADD, INDEX};
use dash_e2e_pages::login::{self, LOGIN};
use dash_e2e_pages::HostsPageHelper;

pub const ACTIONS: &[&str] = &[
    "add",
    "edit",
    "remove",
    "enter-maintenance",
    "exit-maintenance",
    "start-drain",
];
pub const DETAIL_TABS: &[&str] = &["Devices", "Inventory", "Daemons", "Performance Details"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeHost {
    pub hostname: String,
    pub services: Vec<String>,
    pub labels: Vec<String>,
    pub status: String,
    pub daemons: usize,
    /// Entering maintenance shows a "Continue" warning first.
    pub requires_force: bool,
    pub draining: bool,
    /// Draining never evicts anything.
    pub stuck: bool,
    /// Lookups the Daemons tab answers with a placeholder before loading.
    pub load_polls: usize,
}

pub fn host(hostname: &str, services: &[&str], labels: &[&str]) -> FakeHost {
    FakeHost {
        hostname: hostname.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        status: "available".to_string(),
        daemons: services.len(),
        requires_force: false,
        draining: false,
        stuck: false,
        load_polls: 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    EditHost {
        host: String,
        labels: Vec<String>,
        popover_open: bool,
        typed: String,
    },
    ConfirmMaintenance {
        host: String,
    },
    Remove {
        host: String,
        confirmed: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub hostname: String,
    pub maintenance: bool,
    pub labels: Vec<String>,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub hosts: Vec<FakeHost>,
    pub route: String,
    pub breadcrumb: String,
    pub search: String,
    pub selected: Option<String>,
    pub dropdown_open: bool,
    pub modal: Option<Modal>,
    pub form: Option<AddForm>,
    pub expanded: Option<String>,
    pub details_tab: Option<String>,
    /// Remaining load checks before the opened details table renders.
    pub details_loading: usize,
    pub predefined_labels: Vec<String>,
    /// A service whose link lands somewhere other than the counters page.
    pub broken_service: Option<String>,
    pub credentials: (String, String),
    pub login_input: (String, String),
    /// Every click and keystroke, in order.
    pub events: Vec<String>,
}

impl DashboardState {
    fn on_hosts_route(&self) -> bool {
        self.route.starts_with(INDEX.url)
    }

    fn host(&self, hostname: &str) -> Option<&FakeHost> {
        self.hosts.iter().find(|h| h.hostname == hostname)
    }

    fn host_mut(&mut self, hostname: &str) -> Option<&mut FakeHost> {
        self.hosts.iter_mut().find(|h| h.hostname == hostname)
    }

    fn visible_hosts(&self) -> Vec<&FakeHost> {
        if !self.on_hosts_route() {
            return Vec::new();
        }
        self.hosts
            .iter()
            .filter(|h| row_text(h).contains(self.search.as_str()))
            .collect()
    }

    fn form_rejects(&self, hostname: &str) -> bool {
        hostname.is_empty() || self.host(hostname).is_some()
    }
}

fn cell_text(host: &FakeHost, column: usize) -> String {
    match column {
        2 => host.hostname.clone(),
        3 => host.services.join(", "),
        4 => host.labels.join(" "),
        5 => host.status.clone(),
        _ => String::new(),
    }
}

fn row_text(host: &FakeHost) -> String {
    (2..=5)
        .map(|column| cell_text(host, column))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_nth_child(css: &str, prefix: &str, suffix: &str) -> Option<usize> {
    css.strip_prefix(prefix)?
        .strip_suffix(suffix)?
        .parse()
        .ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum El {
    /// Singleton element identified by the selector that finds it.
    Page(&'static str),
    Cell { host: String, column: usize },
    Row(String),
    ExpandToggle(String),
    ServiceLink { host: String, service: String },
    LabelBadge { host: String, label: String },
    ActionButton(String),
    ModalButton(&'static str),
    MenuItem(String),
    ModalBadge(String),
    BadgeRemove(String),
    CountSpan { details: bool, span: &'static str },
    Tab(String),
}

#[derive(Clone, Default)]
pub struct FakeDashboard {
    state: Arc<Mutex<DashboardState>>,
}

impl FakeDashboard {
    pub fn new(hosts: Vec<FakeHost>) -> Self {
        let state = DashboardState {
            hosts,
            route: "#/dashboard".to_string(),
            breadcrumb: "Dashboard".to_string(),
            predefined_labels: ["mon", "mgr", "osd", "foo", "bar"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            credentials: ("admin".to_string(), "admin".to_string()),
            ..DashboardState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut self.state.lock())
    }

    pub fn host(&self, hostname: &str) -> Option<FakeHost> {
        self.state.lock().host(hostname).cloned()
    }

    pub fn hostnames(&self) -> Vec<String> {
        self.state
            .lock()
            .hosts
            .iter()
            .map(|h| h.hostname.clone())
            .collect()
    }

    pub fn events(&self) -> Vec<String> {
        self.state.lock().events.clone()
    }

    pub fn route(&self) -> String {
        self.state.lock().route.clone()
    }

    fn lookup(state: &DashboardState, scope: Option<&El>, css: &str) -> Vec<El> {
        let page = |present: bool, id: &'static str| {
            if present {
                vec![El::Page(id)]
            } else {
                Vec::new()
            }
        };

        if let Some(column) = parse_nth_child(
            css,
            "datatable-body-row datatable-body-cell:nth-child(",
            ")",
        ) {
            return state
                .visible_hosts()
                .into_iter()
                .map(|h| El::Cell {
                    host: h.hostname.clone(),
                    column,
                })
                .collect();
        }
        if let Some(El::Row(hostname)) = scope {
            let Some(row_host) = state.host(hostname) else {
                return Vec::new();
            };
            if let Some(column) = parse_nth_child(css, "datatable-body-cell:nth-child(", ") .badge")
            {
                if column != 4 {
                    return Vec::new();
                }
                return row_host
                    .labels
                    .iter()
                    .map(|label| El::LabelBadge {
                        host: hostname.clone(),
                        label: label.clone(),
                    })
                    .collect();
            }
            if let Some(column) = parse_nth_child(css, "datatable-body-cell:nth-child(", ")") {
                return vec![El::Cell {
                    host: hostname.clone(),
                    column,
                }];
            }
            if css == table::ROW_EXPAND_TOGGLE {
                return vec![El::ExpandToggle(hostname.clone())];
            }
            if css == hosts::SERVICE_LINK {
                return row_host
                    .services
                    .iter()
                    .map(|service| El::ServiceLink {
                        host: hostname.clone(),
                        service: service.clone(),
                    })
                    .collect();
            }
            return Vec::new();
        }
        if matches!(scope, Some(El::Page(id)) if *id == hosts::HOST_DETAILS) {
            let daemons_tab = state.details_tab.as_deref() == Some("Daemons");
            match css {
                table::TABLE => return page(daemons_tab, table::TABLE),
                table::TABLE_LOADED => {
                    return page(
                        daemons_tab && state.details_loading == 0,
                        table::TABLE_LOADED,
                    )
                }
                _ => {}
            }
        }
        if let Some(action) = css.strip_prefix("button.") {
            if state.dropdown_open && ACTIONS.contains(&action) {
                return vec![El::ActionButton(action.to_string())];
            }
            return Vec::new();
        }

        let hosts_route = state.on_hosts_route();
        let edit = match &state.modal {
            Some(Modal::EditHost {
                labels,
                popover_open,
                ..
            }) => Some((labels, *popover_open)),
            _ => None,
        };
        let details_open = state.expanded.is_some() && hosts_route;

        match css {
            c if c == INDEX.id => page(hosts_route, INDEX.id),
            table::TABLE => page(hosts_route, table::TABLE),
            table::TABLE_LOADED => page(hosts_route, table::TABLE_LOADED),
            table::TABLE_SEARCH_INPUT => page(hosts_route, table::TABLE_SEARCH_INPUT),
            table::ACTION_DROPDOWN_TOGGLE => page(hosts_route, table::ACTION_DROPDOWN_TOGGLE),
            table::BREADCRUMB_ACTIVE => page(true, table::BREADCRUMB_ACTIVE),
            table::TABLE_ROW => state
                .visible_hosts()
                .into_iter()
                .map(|h| El::Row(h.hostname.clone()))
                .collect(),
            table::TABLE_COUNT_SPANS => {
                let details = matches!(scope, Some(El::Page(id)) if *id == hosts::HOST_DETAILS);
                if details && state.details_tab.as_deref() != Some("Daemons") {
                    return Vec::new();
                }
                if !details && !hosts_route {
                    return Vec::new();
                }
                ["selected", "found", "total"]
                    .into_iter()
                    .map(|span| El::CountSpan { details, span })
                    .collect()
            }
            table::MODAL => page(state.modal.is_some(), table::MODAL),
            table::MODAL_CONFIRM_CHECKBOX => page(
                matches!(state.modal, Some(Modal::Remove { .. })),
                table::MODAL_CONFIRM_CHECKBOX,
            ),
            table::MODAL_BUTTON => match &state.modal {
                Some(Modal::Remove { .. }) => {
                    vec![El::ModalButton("Cancel"), El::ModalButton("Remove")]
                }
                Some(Modal::ConfirmMaintenance { .. }) => {
                    vec![El::ModalButton("Cancel"), El::ModalButton("Continue")]
                }
                _ => Vec::new(),
            },
            hosts::HOST_DETAILS => page(details_open, hosts::HOST_DETAILS),
            table::TAB if details_open => DETAIL_TABS
                .iter()
                .map(|tab| El::Tab(tab.to_string()))
                .collect(),
            hosts::HOSTS_SERVICE_LINK => state
                .visible_hosts()
                .into_iter()
                .flat_map(|h| {
                    h.services.iter().map(move |service| El::ServiceLink {
                        host: h.hostname.clone(),
                        service: service.clone(),
                    })
                })
                .collect(),

            c if c == ADD.id => page(state.form.is_some(), ADD.id),
            hosts::HOSTNAME_INPUT => page(state.form.is_some(), hosts::HOSTNAME_INPUT),
            hosts::MAINTENANCE_TOGGLE => page(state.form.is_some(), hosts::MAINTENANCE_TOGGLE),
            hosts::BACK_BUTTON => page(state.form.is_some(), hosts::BACK_BUTTON),
            hosts::SUBMIT_BUTTON => page(state.form.is_some(), hosts::SUBMIT_BUTTON),
            hosts::SELECT_MENU_EDIT => page(state.form.is_some(), hosts::SELECT_MENU_EDIT),
            hosts::SELECT_MENU_ITEM => match &state.form {
                Some(form) if form.menu_open => state
                    .predefined_labels
                    .iter()
                    .map(|label| El::MenuItem(label.clone()))
                    .collect(),
                _ => Vec::new(),
            },

            hosts::MODAL_LABEL_EDIT => page(edit.is_some(), hosts::MODAL_LABEL_EDIT),
            hosts::MODAL_BADGE => edit
                .map(|(labels, _)| {
                    labels
                        .iter()
                        .map(|l| El::ModalBadge(l.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            hosts::BADGE_REMOVE => match scope {
                Some(El::ModalBadge(label)) => vec![El::BadgeRemove(label.clone())],
                _ => Vec::new(),
            },
            hosts::POPOVER_INPUT => page(
                matches!(edit, Some((_, true))),
                hosts::POPOVER_INPUT,
            ),
            hosts::MODAL_SUBMIT => page(edit.is_some(), hosts::MODAL_SUBMIT),

            c if c == LOGIN.id => page(state.route == LOGIN.url, LOGIN.id),
            login::USERNAME_INPUT => page(state.route == LOGIN.url, login::USERNAME_INPUT),
            login::PASSWORD_INPUT => page(state.route == LOGIN.url, login::PASSWORD_INPUT),
            login::SUBMIT => page(state.route == LOGIN.url, login::SUBMIT),
            _ => Vec::new(),
        }
    }

    fn render_text(state: &mut DashboardState, element: &El) -> String {
        match element {
            El::Page(id) if *id == table::BREADCRUMB_ACTIVE => state.breadcrumb.clone(),
            El::Page(_) => String::new(),
            El::Cell { host, column } => state
                .host(host)
                .map(|h| cell_text(h, *column))
                .unwrap_or_default(),
            El::Row(host) => state.host(host).map(row_text).unwrap_or_default(),
            El::ExpandToggle(_) => String::new(),
            El::ServiceLink { service, .. } => service.clone(),
            El::LabelBadge { label, .. } => label.clone(),
            El::ActionButton(action) => action.clone(),
            El::ModalButton(text) => text.to_string(),
            El::MenuItem(label) | El::ModalBadge(label) => label.clone(),
            El::BadgeRemove(_) => "×".to_string(),
            El::Tab(tab) => tab.clone(),
            El::CountSpan { details: false, span } => {
                let n = match *span {
                    "selected" => usize::from(state.selected.is_some()),
                    "found" => state.visible_hosts().len(),
                    _ => state.hosts.len(),
                };
                format!("{n} {span}")
            }
            El::CountSpan { details: true, span } => {
                let Some(expanded) = state.expanded.clone() else {
                    return String::new();
                };
                if state.details_loading > 0 {
                    return format!("0 {span}");
                }
                let Some(host) = state.host_mut(&expanded) else {
                    return String::new();
                };
                let n = if *span == "selected" { 0 } else { host.daemons };
                // every poll of the counter sees one more daemon evicted
                if *span == "total" && host.draining && !host.stuck && host.daemons > 0 {
                    host.daemons -= 1;
                }
                format!("{n} {span}")
            }
        }
    }

    fn apply_action(state: &mut DashboardState, action: &str) -> Result<()> {
        let hostname = state
            .selected
            .clone()
            .ok_or_else(|| anyhow!("action '{action}' with no row selected"))?;
        let host = state
            .host_mut(&hostname)
            .ok_or_else(|| anyhow!("selected host '{hostname}' vanished"))?;
        match action {
            "edit" => {
                let labels = host.labels.clone();
                state.modal = Some(Modal::EditHost {
                    host: hostname,
                    labels,
                    popover_open: false,
                    typed: String::new(),
                });
            }
            "enter-maintenance" => {
                if host.requires_force {
                    state.modal = Some(Modal::ConfirmMaintenance { host: hostname });
                } else {
                    host.status = "maintenance".to_string();
                }
            }
            "exit-maintenance" => host.status = "available".to_string(),
            "start-drain" => {
                if !host.labels.iter().any(|l| l == "_no_schedule") {
                    host.labels.push("_no_schedule".to_string());
                }
                host.draining = true;
            }
            "remove" => {
                state.modal = Some(Modal::Remove {
                    host: hostname,
                    confirmed: false,
                });
            }
            other => bail!("unsupported action '{other}'"),
        }
        Ok(())
    }

    fn apply_click(state: &mut DashboardState, element: &El) -> Result<()> {
        match element {
            El::Cell { host, .. } => state.selected = Some(host.clone()),
            El::Page(id) if *id == table::ACTION_DROPDOWN_TOGGLE => state.dropdown_open = true,
            El::ActionButton(action) => {
                state.dropdown_open = false;
                Self::apply_action(state, action)?;
            }
            El::Page(id) if *id == table::MODAL_CONFIRM_CHECKBOX => {
                if let Some(Modal::Remove { confirmed, .. }) = &mut state.modal {
                    *confirmed = true;
                }
            }
            El::ModalButton("Cancel") => state.modal = None,
            El::ModalButton("Remove") => {
                if let Some(Modal::Remove {
                    host,
                    confirmed: true,
                }) = state.modal.clone()
                {
                    state.hosts.retain(|h| h.hostname != host);
                    state.modal = None;
                    state.selected = None;
                }
            }
            El::ModalButton("Continue") => {
                if let Some(Modal::ConfirmMaintenance { host }) = state.modal.clone() {
                    if let Some(h) = state.host_mut(&host) {
                        h.status = "maintenance".to_string();
                    }
                    state.modal = None;
                }
            }
            El::Page(id) if *id == hosts::MODAL_LABEL_EDIT => {
                if let Some(Modal::EditHost { popover_open, .. }) = &mut state.modal {
                    *popover_open = true;
                }
            }
            El::BadgeRemove(label) => {
                if let Some(Modal::EditHost { labels, .. }) = &mut state.modal {
                    labels.retain(|l| l != label);
                }
            }
            El::Page(id) if *id == hosts::MODAL_SUBMIT => {
                if let Some(Modal::EditHost { host, labels, .. }) = state.modal.clone() {
                    if let Some(h) = state.host_mut(&host) {
                        h.labels = labels;
                    }
                    state.modal = None;
                }
            }
            El::Page(id) if *id == hosts::MAINTENANCE_TOGGLE => {
                if let Some(form) = &mut state.form {
                    form.maintenance = !form.maintenance;
                }
            }
            El::Page(id) if *id == hosts::SELECT_MENU_EDIT => {
                if let Some(form) = &mut state.form {
                    form.menu_open = true;
                }
            }
            El::MenuItem(label) => {
                if let Some(form) = &mut state.form {
                    if let Some(pos) = form.labels.iter().position(|l| l == label) {
                        form.labels.remove(pos);
                    } else {
                        form.labels.push(label.clone());
                    }
                }
            }
            El::Page(id) if *id == hosts::BACK_BUTTON => {
                state.form = None;
                state.route = INDEX.url.to_string();
            }
            El::Page(id) if *id == hosts::SUBMIT_BUTTON => {
                let Some(form) = state.form.clone() else {
                    return Ok(());
                };
                if state.form_rejects(&form.hostname) {
                    return Ok(());
                }
                let mut new_host = host(&form.hostname, &[], &[]);
                new_host.labels = form.labels;
                if form.maintenance {
                    new_host.status = "maintenance".to_string();
                }
                state.hosts.push(new_host);
                state.form = None;
                state.route = INDEX.url.to_string();
            }
            El::ExpandToggle(host) => {
                state.expanded = Some(host.clone());
                state.details_tab = None;
                state.details_loading = 0;
            }
            El::Tab(tab) => {
                state.details_tab = Some(tab.clone());
                state.details_loading = state
                    .expanded
                    .as_deref()
                    .and_then(|expanded| state.host(expanded))
                    .map_or(0, |h| h.load_polls);
            }
            El::ServiceLink { host, service } => {
                state.route = format!("#/perf_counters/{service}/{host}");
                state.breadcrumb = if state.broken_service.as_deref() == Some(service.as_str()) {
                    "Overview".to_string()
                } else {
                    "Performance Counters".to_string()
                };
            }
            El::Page(id) if *id == login::SUBMIT => {
                if state.login_input == state.credentials {
                    state.route = "#/dashboard".to_string();
                    state.breadcrumb = "Dashboard".to_string();
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl Browser for FakeDashboard {
    type Element = El;

    async fn visit(&self, fragment: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(format!("visit {fragment}"));
        state.route = fragment.to_string();
        state.breadcrumb = if fragment.starts_with(INDEX.url) {
            "Hosts".to_string()
        } else {
            "Dashboard".to_string()
        };
        state.search.clear();
        state.selected = None;
        state.dropdown_open = false;
        state.modal = None;
        state.expanded = None;
        state.details_tab = None;
        state.details_loading = 0;
        state.form = (fragment == ADD.url).then(AddForm::default);
        Ok(())
    }

    async fn location_hash(&self) -> Result<String> {
        Ok(self.state.lock().route.clone())
    }

    async fn find_all(&self, scope: Option<&El>, query: &Query) -> Result<Vec<El>> {
        let mut state = self.state.lock();
        let candidates = Self::lookup(&state, scope, &query.css);
        let details = matches!(scope, Some(El::Page(id)) if *id == hosts::HOST_DETAILS);
        if details && query.css == table::TABLE_LOADED && state.details_loading > 0 {
            state.details_loading -= 1;
        }
        Ok(candidates
            .into_iter()
            .filter(|element| query.accepts(&Self::render_text(&mut state, element)))
            .collect())
    }

    async fn parent(&self, element: &El) -> Result<El> {
        match element {
            El::Cell { host, .. } => Ok(El::Row(host.clone())),
            other => Err(anyhow!("{other:?} has no modelled parent")),
        }
    }

    async fn click(&self, element: &El) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(format!("click {element:?}"));
        Self::apply_click(&mut state, element)
    }

    async fn type_text(&self, element: &El, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(format!("type {text:?} into {element:?}"));
        match element {
            El::Page(id) if *id == table::TABLE_SEARCH_INPUT => state.search.push_str(text),
            El::Page(id) if *id == hosts::HOSTNAME_INPUT => {
                if let Some(form) = &mut state.form {
                    form.hostname.push_str(text);
                }
            }
            El::Page(id) if *id == hosts::POPOVER_INPUT => {
                if let Some(Modal::EditHost { typed, .. }) = &mut state.modal {
                    typed.push_str(text);
                }
            }
            El::Page(id) if *id == login::USERNAME_INPUT => state.login_input.0.push_str(text),
            El::Page(id) if *id == login::PASSWORD_INPUT => state.login_input.1.push_str(text),
            other => bail!("cannot type into {other:?}"),
        }
        Ok(())
    }

    async fn press_enter(&self, element: &El) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(format!("enter on {element:?}"));
        if let Some(Modal::EditHost { labels, typed, .. }) = &mut state.modal {
            let label = std::mem::take(typed);
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }
        Ok(())
    }

    async fn clear(&self, element: &El) -> Result<()> {
        let mut state = self.state.lock();
        match element {
            El::Page(id) if *id == table::TABLE_SEARCH_INPUT => state.search.clear(),
            El::Page(id) if *id == login::USERNAME_INPUT => state.login_input.0.clear(),
            El::Page(id) if *id == login::PASSWORD_INPUT => state.login_input.1.clear(),
            _ => {}
        }
        Ok(())
    }

    async fn text(&self, element: &El) -> Result<String> {
        let mut state = self.state.lock();
        Ok(Self::render_text(&mut state, element))
    }

    async fn classes(&self, element: &El) -> Result<Vec<String>> {
        let state = self.state.lock();
        match element {
            El::Page(id) if *id == hosts::HOSTNAME_INPUT => {
                let hostname = state
                    .form
                    .as_ref()
                    .map(|form| form.hostname.clone())
                    .unwrap_or_default();
                let validity = if state.form_rejects(&hostname) {
                    "ng-invalid"
                } else {
                    "ng-valid"
                };
                Ok(vec!["form-control".to_string(), validity.to_string()])
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(b"\x89PNG fake".to_vec())
    }
}

pub fn fast_waiter() -> Waiter {
    Waiter::new(Duration::from_millis(150), Duration::from_millis(1))
}

pub fn hosts_page(dashboard: &FakeDashboard) -> HostsPageHelper<PageHelper<FakeDashboard>> {
    HostsPageHelper::new(PageHelper::new(dashboard.clone(), fast_waiter()))
        .with_drain_timeout(Duration::from_millis(300))
}

/// Three hosts: two plain ones and one carrying services and labels.
pub fn sample_cluster() -> FakeDashboard {
    FakeDashboard::new(vec![
        host("ceph-node1", &["mon.ceph-node1", "mgr.ceph-node1"], &["mon", "mgr"]),
        host("ceph-node2", &["osd.0"], &[]),
        host("ceph-node5", &["osd.1", "osd.2", "crash.ceph-node5"], &["osd"]),
    ])
}
