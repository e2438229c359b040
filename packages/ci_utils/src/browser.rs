//! DOM-driving primitives the page helpers are written against.
//!
//! Every call goes to the live page; implementations never cache elements
//! across calls beyond the handles they hand out.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

use crate::Query;

#[async_trait]
pub trait Browser: Send + Sync {
    /// Opaque handle to a rendered element.
    type Element: Clone + Debug + Send + Sync;

    /// Load a fragment route such as `#/hosts` relative to the dashboard root.
    async fn visit(&self, fragment: &str) -> Result<()>;

    /// The current fragment route, including the leading `#`.
    async fn location_hash(&self) -> Result<String>;

    /// All elements matching `query`, searched under `scope` when given.
    /// An empty vector is not an error.
    async fn find_all(
        &self,
        scope: Option<&Self::Element>,
        query: &Query,
    ) -> Result<Vec<Self::Element>>;

    async fn parent(&self, element: &Self::Element) -> Result<Self::Element>;

    async fn click(&self, element: &Self::Element) -> Result<()>;

    /// Append `text` to an input.
    async fn type_text(&self, element: &Self::Element, text: &str) -> Result<()>;

    async fn press_enter(&self, element: &Self::Element) -> Result<()>;

    async fn clear(&self, element: &Self::Element) -> Result<()>;

    /// Rendered (visible) text of an element.
    async fn text(&self, element: &Self::Element) -> Result<String>;

    async fn classes(&self, element: &Self::Element) -> Result<Vec<String>>;

    /// PNG bytes of the current viewport.
    async fn screenshot(&self) -> Result<Vec<u8>>;
}
