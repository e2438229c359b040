use std::fmt;

use anyhow::{anyhow, Result};

/// How an element's visible text must relate to a query's expected text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// Text contains the needle anywhere.
    Contains(String),
    /// Trimmed text equals the needle.
    Exact(String),
}

impl TextMatch {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Contains(needle) => text.contains(needle.as_str()),
            TextMatch::Exact(needle) => text.trim() == needle,
        }
    }
}

/// A CSS lookup with an optional text filter.
///
/// `Query::css("a").contains("x")` matches `a` elements whose visible text
/// contains `x`; text filtering always happens after the CSS match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub css: String,
    pub text: Option<TextMatch>,
}

impl Query {
    pub fn css(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            text: None,
        }
    }

    pub fn contains(mut self, text: impl Into<String>) -> Self {
        self.text = Some(TextMatch::Contains(text.into()));
        self
    }

    pub fn exact(mut self, text: impl Into<String>) -> Self {
        self.text = Some(TextMatch::Exact(text.into()));
        self
    }

    /// Whether an element's text passes this query's text filter.
    pub fn accepts(&self, text: &str) -> bool {
        self.text.as_ref().map_or(true, |m| m.matches(text))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            None => write!(f, "`{}`", self.css),
            Some(TextMatch::Contains(text)) => write!(f, "`{}` containing {text:?}", self.css),
            Some(TextMatch::Exact(text)) => write!(f, "`{}` with text {text:?}", self.css),
        }
    }
}

/// Footer counters rendered under every data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSpan {
    Selected,
    Found,
    Total,
}

impl CountSpan {
    pub fn name(self) -> &'static str {
        match self {
            CountSpan::Selected => "selected",
            CountSpan::Found => "found",
            CountSpan::Total => "total",
        }
    }
}

impl fmt::Display for CountSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a footer counter such as `"12 total"` into its number.
pub fn parse_count(text: &str) -> Result<usize> {
    let digits = text
        .split_whitespace()
        .next()
        .ok_or_else(|| anyhow!("Empty table counter"))?;
    digits
        .parse::<usize>()
        .map_err(|err| anyhow!("Invalid table counter {text:?}: {err}"))
}
