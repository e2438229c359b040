//! Browser E2E helpers for the cluster dashboard (hidden from docs)
#![doc(hidden)]

pub mod browser;
pub mod config;
pub mod error;
pub mod page_helper;
pub mod query;
pub mod selectors;
pub mod wait;
pub mod webdriver;

pub use browser::Browser;
pub use config::E2eConfig;
pub use error::{assertion_kind, AssertionError};
pub use page_helper::{table_cell_query, ElementOf, PageHelper, PageNavigator, PageRoute};
pub use query::{parse_count, CountSpan, Query, TextMatch};
pub use wait::Waiter;
pub use webdriver::WebDriverBrowser;
