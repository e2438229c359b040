//! Generic navigation and `cd-table` primitives shared by all page objects.

use anyhow::Result;
use async_trait::async_trait;

use crate::selectors::{
    action_button, table_cell, ACTION_DROPDOWN_TOGGLE, BREADCRUMB_ACTIVE, MODAL, MODAL_BUTTON,
    MODAL_CONFIRM_CHECKBOX, ROW_EXPAND_TOGGLE, TAB, TABLE, TABLE_COUNT_SPANS, TABLE_LOADED,
    TABLE_ROW, TABLE_SEARCH_INPUT,
};
use crate::{parse_count, AssertionError, Browser, CountSpan, Query, Waiter};

/// A fragment route and the root element that proves it rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub url: &'static str,
    pub id: &'static str,
}

/// Element handle type of a navigator's browser.
pub type ElementOf<N> = <<N as PageNavigator>::Browser as Browser>::Element;

/// Navigation and table utilities a page object composes with.
#[async_trait]
pub trait PageNavigator: Send + Sync {
    type Browser: Browser;

    fn browser(&self) -> &Self::Browser;

    fn waiter(&self) -> Waiter;

    /// Visit `route.url` and wait for `route.id` to render.
    async fn navigate_to(&self, route: &PageRoute) -> Result<()>;

    /// Fail with `WrongPage` unless the location hash settles on `url`.
    async fn restrict_to(&self, url: &str, operation: &str) -> Result<()>;

    /// Wait until at least one element matches.
    async fn get(
        &self,
        scope: Option<&<Self::Browser as Browser>::Element>,
        query: &Query,
    ) -> Result<Vec<<Self::Browser as Browser>::Element>>;

    /// First element of [`PageNavigator::get`].
    async fn get_first(
        &self,
        scope: Option<&<Self::Browser as Browser>::Element>,
        query: &Query,
    ) -> Result<<Self::Browser as Browser>::Element>;

    /// Single lookup; an empty result is not an error.
    async fn find_all(
        &self,
        scope: Option<&<Self::Browser as Browser>::Element>,
        query: &Query,
    ) -> Result<Vec<<Self::Browser as Browser>::Element>>;

    /// Wait until no element matches.
    async fn ensure_absent(
        &self,
        scope: Option<&<Self::Browser as Browser>::Element>,
        query: &Query,
    ) -> Result<()>;

    async fn wait_data_table_to_load(&self) -> Result<()>;

    async fn clear_table_search_input(&self) -> Result<()>;

    async fn search_table(&self, text: &str) -> Result<()>;

    /// Filter the table by `content` and return the matching cell of
    /// `column`. Text must match exactly unless `partial`.
    async fn get_table_cell(
        &self,
        column: usize,
        content: &str,
        partial: bool,
    ) -> Result<<Self::Browser as Browser>::Element>;

    /// Filter the table by `content` and return every exact match in
    /// `column`, possibly none.
    async fn get_table_cells(
        &self,
        column: usize,
        content: &str,
    ) -> Result<Vec<<Self::Browser as Browser>::Element>>;

    /// Read a footer counter once the table under `scope` has loaded.
    async fn get_table_count(
        &self,
        scope: Option<&<Self::Browser as Browser>::Element>,
        span: CountSpan,
    ) -> Result<usize>;

    async fn expect_table_count(
        &self,
        scope: Option<&<Self::Browser as Browser>::Element>,
        span: CountSpan,
        count: usize,
    ) -> Result<()>;

    /// Open the table action dropdown and click `action`.
    async fn click_action_button(&self, action: &str) -> Result<()>;

    async fn expect_breadcrumb_text(&self, text: &str) -> Result<()>;

    /// Expand the row containing `entity` and open `tab` inside `tabset`.
    async fn click_tab(&self, tabset: &str, entity: &str, tab: &str) -> Result<()>;

    /// Remove the row matching `name` through the action menu and its
    /// confirmation modal. The "hosts" section names the action "remove".
    /// With `partial` the cell only has to contain `name`.
    async fn delete(
        &self,
        name: &str,
        column: Option<usize>,
        section: Option<&str>,
        partial: bool,
    ) -> Result<()>;
}

/// Query for the body cells of `column` matching `content`.
pub fn table_cell_query(column: usize, content: &str, partial: bool) -> Query {
    let query = Query::css(table_cell(column));
    if partial {
        query.contains(content)
    } else {
        query.exact(content)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Standard [`PageNavigator`] over any [`Browser`].
pub struct PageHelper<B> {
    browser: B,
    waiter: Waiter,
}

impl<B: Browser> PageHelper<B> {
    pub fn new(browser: B, waiter: Waiter) -> Self {
        Self { browser, waiter }
    }

    pub fn into_browser(self) -> B {
        self.browser
    }

    /// Wait for the table under `scope` (or the page) to finish loading.
    async fn wait_table_loaded(&self, scope: Option<&B::Element>) -> Result<()> {
        self.get(scope, &Query::css(TABLE)).await?;
        self.get(scope, &Query::css(TABLE_LOADED)).await?;
        Ok(())
    }

    async fn read_count(&self, scope: Option<&B::Element>, span: CountSpan) -> Result<usize> {
        let query = Query::css(TABLE_COUNT_SPANS).contains(span.name());
        let spans = self.browser.find_all(scope, &query).await?;
        let counter = spans.first().ok_or_else(|| AssertionError::NotFound {
            query: query.to_string(),
        })?;
        parse_count(&self.browser.text(counter).await?)
    }
}

#[async_trait]
impl<B: Browser> PageNavigator for PageHelper<B> {
    type Browser = B;

    fn browser(&self) -> &B {
        &self.browser
    }

    fn waiter(&self) -> Waiter {
        self.waiter
    }

    async fn navigate_to(&self, route: &PageRoute) -> Result<()> {
        log::debug!("🧭 Navigating to {}", route.url);
        self.browser.visit(route.url).await?;
        self.get(None, &Query::css(route.id)).await?;
        Ok(())
    }

    async fn restrict_to(&self, url: &str, operation: &str) -> Result<()> {
        let browser = &self.browser;
        self.waiter
            .retry(&format!("route {url}"), move || async move {
                let actual = browser.location_hash().await?;
                if actual == url {
                    Ok(())
                } else {
                    Err(AssertionError::WrongPage {
                        operation: operation.to_string(),
                        expected: url.to_string(),
                        actual,
                    }
                    .into())
                }
            })
            .await
    }

    async fn get(&self, scope: Option<&B::Element>, query: &Query) -> Result<Vec<B::Element>> {
        let browser = &self.browser;
        self.waiter
            .retry(&query.to_string(), move || async move {
                let found = browser.find_all(scope, query).await?;
                if found.is_empty() {
                    Err(AssertionError::NotFound {
                        query: query.to_string(),
                    }
                    .into())
                } else {
                    Ok(found)
                }
            })
            .await
    }

    async fn get_first(&self, scope: Option<&B::Element>, query: &Query) -> Result<B::Element> {
        let found = self.get(scope, query).await?;
        found.into_iter().next().ok_or_else(|| {
            AssertionError::NotFound {
                query: query.to_string(),
            }
            .into()
        })
    }

    async fn find_all(&self, scope: Option<&B::Element>, query: &Query) -> Result<Vec<B::Element>> {
        self.browser.find_all(scope, query).await
    }

    async fn ensure_absent(&self, scope: Option<&B::Element>, query: &Query) -> Result<()> {
        let browser = &self.browser;
        self.waiter
            .retry(&format!("{query} to disappear"), move || async move {
                let found = browser.find_all(scope, query).await?;
                if found.is_empty() {
                    Ok(())
                } else {
                    Err(AssertionError::postcondition(format!(
                        "{} element(s) still match {query}",
                        found.len()
                    ))
                    .into())
                }
            })
            .await
    }

    async fn wait_data_table_to_load(&self) -> Result<()> {
        self.wait_table_loaded(None).await
    }

    async fn clear_table_search_input(&self) -> Result<()> {
        let input = self.get_first(None, &Query::css(TABLE_SEARCH_INPUT)).await?;
        self.browser.clear(&input).await
    }

    async fn search_table(&self, text: &str) -> Result<()> {
        let input = self.get_first(None, &Query::css(TABLE_SEARCH_INPUT)).await?;
        self.browser.clear(&input).await?;
        self.browser.type_text(&input, text).await
    }

    async fn get_table_cell(
        &self,
        column: usize,
        content: &str,
        partial: bool,
    ) -> Result<B::Element> {
        self.wait_data_table_to_load().await?;
        self.search_table(content).await?;
        self.get_first(None, &table_cell_query(column, content, partial))
            .await
    }

    async fn get_table_cells(&self, column: usize, content: &str) -> Result<Vec<B::Element>> {
        self.wait_data_table_to_load().await?;
        self.search_table(content).await?;
        self.browser
            .find_all(None, &table_cell_query(column, content, false))
            .await
    }

    async fn get_table_count(&self, scope: Option<&B::Element>, span: CountSpan) -> Result<usize> {
        // a nested table renders placeholder counters until it has loaded
        self.wait_table_loaded(scope).await?;
        self.waiter
            .retry(&format!("table counter '{span}'"), move || {
                self.read_count(scope, span)
            })
            .await
    }

    async fn expect_table_count(
        &self,
        scope: Option<&B::Element>,
        span: CountSpan,
        count: usize,
    ) -> Result<()> {
        self.wait_table_loaded(scope).await?;
        self.waiter
            .retry(&format!("{count} {span}"), move || async move {
                let actual = self.read_count(scope, span).await?;
                if actual == count {
                    Ok(())
                } else {
                    Err(AssertionError::postcondition(format!(
                        "table shows {actual} {span}, expected {count}"
                    ))
                    .into())
                }
            })
            .await
    }

    async fn click_action_button(&self, action: &str) -> Result<()> {
        log::debug!("🖱️ Table action '{action}'");
        let toggle = self
            .get_first(None, &Query::css(ACTION_DROPDOWN_TOGGLE))
            .await?;
        self.browser.click(&toggle).await?;
        let button = self
            .get_first(None, &Query::css(action_button(action)))
            .await?;
        self.browser.click(&button).await
    }

    async fn expect_breadcrumb_text(&self, text: &str) -> Result<()> {
        let browser = &self.browser;
        let query = &Query::css(BREADCRUMB_ACTIVE);
        self.waiter
            .retry(&format!("breadcrumb '{text}'"), move || async move {
                let crumbs = browser.find_all(None, query).await?;
                let crumb = crumbs.first().ok_or_else(|| AssertionError::NotFound {
                    query: query.to_string(),
                })?;
                let actual = browser.text(crumb).await?;
                if actual.trim() == text {
                    Ok(())
                } else {
                    Err(AssertionError::postcondition(format!(
                        "breadcrumb reads {actual:?}, expected {text:?}"
                    ))
                    .into())
                }
            })
            .await
    }

    async fn click_tab(&self, tabset: &str, entity: &str, tab: &str) -> Result<()> {
        self.wait_data_table_to_load().await?;
        let row = self
            .get_first(None, &Query::css(TABLE_ROW).contains(entity))
            .await?;
        let toggle = self
            .get_first(Some(&row), &Query::css(ROW_EXPAND_TOGGLE))
            .await?;
        self.browser.click(&toggle).await?;

        let tabset = self.get_first(None, &Query::css(tabset)).await?;
        let tab = self
            .get_first(Some(&tabset), &Query::css(TAB).contains(tab))
            .await?;
        self.browser.click(&tab).await
    }

    async fn delete(
        &self,
        name: &str,
        column: Option<usize>,
        section: Option<&str>,
        partial: bool,
    ) -> Result<()> {
        let column = column.unwrap_or(1);
        let cell = self.get_table_cell(column, name, partial).await?;
        self.browser.click(&cell).await?;

        let action = if section == Some("hosts") {
            "remove"
        } else {
            "delete"
        };
        self.click_action_button(action).await?;

        let confirm = self
            .get_first(None, &Query::css(MODAL_CONFIRM_CHECKBOX))
            .await?;
        self.browser.click(&confirm).await?;
        let submit = self
            .get_first(None, &Query::css(MODAL_BUTTON).contains(capitalize(action)))
            .await?;
        self.browser.click(&submit).await?;

        self.ensure_absent(None, &Query::css(MODAL)).await?;
        self.ensure_absent(None, &table_cell_query(column, name, partial))
            .await?;
        log::info!("🗑️ Removed '{name}'");
        Ok(())
    }
}
