//! Browser session traits
//!
//! This module defines the abstract capabilities the step helpers consume: a
//! browser session, the page it currently shows, and the elements on that page.
//! Implementations live outside this crate (a WebDriver or CDP client); the
//! `mock` module provides an in-memory one for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::Result;

/// Selector strategy used to locate elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    #[default]
    Css,
    #[serde(rename = "xpath")]
    XPath,
}

impl SelectorKind {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Css => "css",
            SelectorKind::XPath => "xpath",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser session trait
///
/// Represents a live connection to a browser. The session is owned by the host
/// test context; helpers only read its current page and invoke actions on it.
#[async_trait]
pub trait Session: Send + Sync {
    /// Navigate to URL
    async fn visit(&self, url: &str) -> Result<()>;

    /// Get the currently loaded page
    async fn page(&self) -> Result<Arc<dyn Page>>;

    /// Execute JavaScript in the current page, discarding its result
    async fn execute_script(&self, script: &str) -> Result<()>;

    /// Wait up to `timeout_ms`.
    ///
    /// Without a condition this is a plain delay. With one, the driver polls the
    /// JavaScript expression and stops early once it is truthy. Returns the last
    /// value of the condition (`true` when there is none).
    async fn wait(&self, timeout_ms: u64, condition: Option<&str>) -> Result<bool>;

    /// Get current URL
    async fn current_url(&self) -> Result<String>;
}

/// Page trait
///
/// Represents the document currently loaded in a session.
#[async_trait]
pub trait Page: Send + Sync {
    /// Find the first element matching a selector
    async fn find(&self, kind: SelectorKind, selector: &str) -> Result<Option<Arc<dyn Element>>>;

    /// Find every element matching a selector, in document order
    async fn find_all(&self, kind: SelectorKind, selector: &str) -> Result<Vec<Arc<dyn Element>>>;
}

/// Element trait
///
/// Represents a DOM node matched on a page.
#[async_trait]
pub trait Element: Send + Sync {
    /// Click element
    async fn click(&self) -> Result<()>;

    /// Get element attribute
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Check whether the element carries an attribute
    async fn has_attribute(&self, name: &str) -> Result<bool> {
        Ok(self.attribute(name).await?.is_some())
    }

    /// Get element text
    async fn text(&self) -> Result<String>;

    /// Check if element is visible
    async fn is_visible(&self) -> Result<bool>;
}
