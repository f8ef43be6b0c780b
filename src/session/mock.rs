//! Mock session implementation for testing
//!
//! This module provides in-memory implementations of the session traits. Pages
//! are plain selector-to-elements tables, and every call made through the traits
//! is recorded so tests can check what the helpers asked the browser to do.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::traits::{Element, Page, SelectorKind, Session};
use crate::{Error, Result};

/// A `Session::wait` call as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWait {
    pub timeout_ms: u64,
    pub condition: Option<String>,
}

/// Mock browser session
///
/// Serves a default page, or the page routed to the last visited URL.
#[derive(Debug)]
pub struct MockSession {
    default_page: Arc<MockPage>,
    routes: RwLock<HashMap<String, Arc<MockPage>>>,
    current_url: RwLock<String>,
    visits: RwLock<Vec<String>>,
    scripts: RwLock<Vec<String>>,
    waits: RwLock<Vec<RecordedWait>>,
    page_requests: AtomicUsize,
    fail_scripts: AtomicBool,
    fail_waits: AtomicBool,
    condition_outcome: AtomicBool,
}

impl MockSession {
    /// Create a new mock session showing an empty page
    pub fn new() -> Self {
        Self {
            default_page: Arc::new(MockPage::new()),
            routes: RwLock::new(HashMap::new()),
            current_url: RwLock::new("about:blank".to_string()),
            visits: RwLock::new(Vec::new()),
            scripts: RwLock::new(Vec::new()),
            waits: RwLock::new(Vec::new()),
            page_requests: AtomicUsize::new(0),
            fail_scripts: AtomicBool::new(false),
            fail_waits: AtomicBool::new(false),
            condition_outcome: AtomicBool::new(true),
        }
    }

    /// Replace the page served when no route matches
    pub fn with_page(mut self, page: impl Into<Arc<MockPage>>) -> Self {
        self.default_page = page.into();
        self
    }

    /// Serve `page` after a visit to exactly `url`
    pub fn with_route(mut self, url: impl Into<String>, page: impl Into<Arc<MockPage>>) -> Self {
        self.routes.get_mut().insert(url.into(), page.into());
        self
    }

    /// Make every `execute_script` call fail at the driver level
    pub fn failing_scripts(self) -> Self {
        self.fail_scripts.store(true, Ordering::SeqCst);
        self
    }

    /// Make every `wait` call fail at the driver level
    pub fn failing_waits(self) -> Self {
        self.fail_waits.store(true, Ordering::SeqCst);
        self
    }

    /// Value reported for conditional waits (defaults to `true`)
    pub fn with_condition_outcome(self, outcome: bool) -> Self {
        self.condition_outcome.store(outcome, Ordering::SeqCst);
        self
    }

    /// URLs visited so far, in order
    pub async fn visits(&self) -> Vec<String> {
        self.visits.read().await.clone()
    }

    /// Scripts executed so far, in order
    pub async fn scripts(&self) -> Vec<String> {
        self.scripts.read().await.clone()
    }

    /// Waits requested so far, in order
    pub async fn waits(&self) -> Vec<RecordedWait> {
        self.waits.read().await.clone()
    }

    /// Number of times the current page was requested
    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    async fn current_page(&self) -> Arc<MockPage> {
        let url = self.current_url.read().await;
        self.routes
            .read()
            .await
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| self.default_page.clone())
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Session for MockSession {
    async fn visit(&self, url: &str) -> Result<()> {
        self.visits.write().await.push(url.to_string());
        *self.current_url.write().await = url.to_string();
        Ok(())
    }

    async fn page(&self) -> Result<Arc<dyn Page>> {
        self.page_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.current_page().await as Arc<dyn Page>)
    }

    async fn execute_script(&self, script: &str) -> Result<()> {
        self.scripts.write().await.push(script.to_string());
        if self.fail_scripts.load(Ordering::SeqCst) {
            return Err(Error::script_execution_failed("mock driver rejected script"));
        }
        Ok(())
    }

    async fn wait(&self, timeout_ms: u64, condition: Option<&str>) -> Result<bool> {
        self.waits.write().await.push(RecordedWait {
            timeout_ms,
            condition: condition.map(str::to_string),
        });
        if self.fail_waits.load(Ordering::SeqCst) {
            return Err(Error::timeout(format!("mock wait of {}ms failed", timeout_ms)));
        }
        match condition {
            Some(_) => Ok(self.condition_outcome.load(Ordering::SeqCst)),
            None => Ok(true),
        }
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.current_url.read().await.clone())
    }
}

/// Mock page
///
/// Answers queries from a fixed selector table; unknown selectors match nothing.
#[derive(Debug)]
pub struct MockPage {
    id: String,
    elements: RwLock<HashMap<(SelectorKind, String), Vec<Arc<MockElement>>>>,
    queries: RwLock<Vec<(SelectorKind, String)>>,
}

impl MockPage {
    /// Create a new empty mock page
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            elements: RwLock::new(HashMap::new()),
            queries: RwLock::new(Vec::new()),
        }
    }

    /// Page identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register the elements a CSS selector matches
    pub fn with_elements(self, selector: impl Into<String>, elements: Vec<Arc<MockElement>>) -> Self {
        self.with_selector(SelectorKind::Css, selector, elements)
    }

    /// Register a single element for a CSS selector
    pub fn with_element(self, selector: impl Into<String>, element: Arc<MockElement>) -> Self {
        self.with_elements(selector, vec![element])
    }

    /// Register the elements a selector of any kind matches
    pub fn with_selector(
        mut self,
        kind: SelectorKind,
        selector: impl Into<String>,
        elements: Vec<Arc<MockElement>>,
    ) -> Self {
        self.elements.get_mut().insert((kind, selector.into()), elements);
        self
    }

    /// Replace the matches of a CSS selector on a live page
    pub async fn set_elements(&self, selector: &str, elements: Vec<Arc<MockElement>>) {
        self.elements
            .write()
            .await
            .insert((SelectorKind::Css, selector.to_string()), elements);
    }

    /// Number of queries (`find` or `find_all`) received so far
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Queries received so far, in order
    pub async fn queries(&self) -> Vec<(SelectorKind, String)> {
        self.queries.read().await.clone()
    }

    async fn lookup(&self, kind: SelectorKind, selector: &str) -> Vec<Arc<MockElement>> {
        self.queries.write().await.push((kind, selector.to_string()));
        self.elements
            .read()
            .await
            .get(&(kind, selector.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Page for MockPage {
    async fn find(&self, kind: SelectorKind, selector: &str) -> Result<Option<Arc<dyn Element>>> {
        let matches = self.lookup(kind, selector).await;
        Ok(matches.into_iter().next().map(|e| e as Arc<dyn Element>))
    }

    async fn find_all(&self, kind: SelectorKind, selector: &str) -> Result<Vec<Arc<dyn Element>>> {
        let matches = self.lookup(kind, selector).await;
        Ok(matches.into_iter().map(|e| e as Arc<dyn Element>).collect())
    }
}

/// Mock element
#[derive(Debug)]
pub struct MockElement {
    id: String,
    text: String,
    attributes: HashMap<String, String>,
    visible: bool,
    clicks: AtomicUsize,
}

impl MockElement {
    /// Create a new visible element without text or attributes
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: String::new(),
            attributes: HashMap::new(),
            visible: true,
            clicks: AtomicUsize::new(0),
        }
    }

    /// Set the element text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark the element as hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Wrap in an `Arc`, the form pages store
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Element identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of clicks received
    pub fn click_count(&self) -> usize {
        self.clicks.load(Ordering::SeqCst)
    }
}

impl Default for MockElement {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Element for MockElement {
    async fn click(&self) -> Result<()> {
        self.clicks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.attributes.get(name).cloned())
    }

    async fn text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    async fn is_visible(&self) -> Result<bool> {
        Ok(self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_session_routes_pages_by_url() {
        let routed = MockPage::new().with_element("#inbox", MockElement::new().shared());
        let session = MockSession::new().with_route("http://127.0.0.1", routed);

        let page = session.page().await.unwrap();
        assert!(page.find(SelectorKind::Css, "#inbox").await.unwrap().is_none());

        session.visit("http://127.0.0.1").await.unwrap();
        let page = session.page().await.unwrap();
        assert!(page.find(SelectorKind::Css, "#inbox").await.unwrap().is_some());

        assert_eq!(session.visits().await, vec!["http://127.0.0.1".to_string()]);
        assert_eq!(session.current_url().await.unwrap(), "http://127.0.0.1");
        assert_eq!(session.page_requests(), 2);
    }

    #[tokio::test]
    async fn test_mock_session_records_scripts_and_waits() {
        let session = MockSession::new().with_condition_outcome(false);

        session.execute_script("1 + 1").await.unwrap();
        assert!(session.wait(500, None).await.unwrap());
        assert!(!session.wait(2000, Some("ready()")).await.unwrap());

        assert_eq!(session.scripts().await, vec!["1 + 1".to_string()]);
        let waits = session.waits().await;
        assert_eq!(waits.len(), 2);
        assert_eq!(waits[1], RecordedWait { timeout_ms: 2000, condition: Some("ready()".to_string()) });
    }

    #[tokio::test]
    async fn test_mock_session_failures() {
        let session = MockSession::new().failing_scripts().failing_waits();

        assert!(matches!(
            session.execute_script("x").await,
            Err(Error::ScriptExecutionFailed(_))
        ));
        assert!(matches!(session.wait(10, None).await, Err(Error::Timeout(_))));
    }

    #[tokio::test]
    async fn test_mock_element() {
        let element = MockElement::new()
            .with_text("Test text")
            .with_attribute("href", "/inbox")
            .hidden();

        assert!(!element.id().is_empty());
        assert_eq!(element.text().await.unwrap(), "Test text");
        assert_eq!(element.attribute("href").await.unwrap().as_deref(), Some("/inbox"));
        assert!(element.has_attribute("href").await.unwrap());
        assert!(!element.has_attribute("disabled").await.unwrap());
        assert!(!element.is_visible().await.unwrap());

        element.click().await.unwrap();
        element.click().await.unwrap();
        assert_eq!(element.click_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_page_keeps_selector_kinds_apart() {
        let page = MockPage::new()
            .with_selector(SelectorKind::XPath, "//li", vec![MockElement::new().shared()]);

        assert!(page.find_all(SelectorKind::Css, "//li").await.unwrap().is_empty());
        assert_eq!(page.find_all(SelectorKind::XPath, "//li").await.unwrap().len(), 1);
        assert_eq!(page.query_count().await, 2);
    }
}
