//! Element assertion helper
//!
//! Selector-based assertions and interactions against the page currently shown
//! by a session. Every call queries the page again.

use std::sync::Arc;
use tracing::{debug, instrument};

use super::scripts;
use crate::assertion::{SessionWebAssert, WebAssert};
use crate::error::ExpectedCount;
use crate::session::{SelectorKind, Session};
use crate::{Error, Result};

/// Undo the escaping of double quotes inside step arguments
pub fn fix_step_argument(argument: &str) -> String {
    argument.replace("\\\"", "\"")
}

/// Element assertion helper
#[derive(Clone)]
pub struct ElementSteps {
    session: Arc<dyn Session>,
    web_assert: Arc<dyn WebAssert>,
}

impl ElementSteps {
    /// Create a helper from a session and an assertion façade
    pub fn new(session: Arc<dyn Session>, web_assert: Arc<dyn WebAssert>) -> Self {
        Self { session, web_assert }
    }

    /// Create a helper using [`SessionWebAssert`] over the same session
    pub fn from_session(session: Arc<dyn Session>) -> Self {
        let web_assert = Arc::new(SessionWebAssert::new(session.clone()));
        Self::new(session, web_assert)
    }

    /// Session this helper drives
    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// Assertion façade this helper delegates to
    pub fn web_assert(&self) -> &Arc<dyn WebAssert> {
        &self.web_assert
    }

    /// Check that the element matching `selector` carries `attribute`
    #[instrument(skip(self))]
    pub async fn assert_element_attribute_exists(&self, selector: &str, attribute: &str) -> Result<()> {
        let attribute = fix_step_argument(attribute);
        self.web_assert
            .element_attribute_exists(SelectorKind::Css, selector, &attribute)
            .await?;
        Ok(())
    }

    /// Check that `attribute` of the element matching `selector` does not contain `value`
    #[instrument(skip(self))]
    pub async fn element_attribute_not_contains(&self, selector: &str, attribute: &str, value: &str) -> Result<()> {
        self.web_assert
            .element_attribute_not_contains(SelectorKind::Css, selector, attribute, value)
            .await
    }

    /// Click the first element matching `selector`
    #[instrument(skip(self))]
    pub async fn click_element(&self, selector: &str) -> Result<()> {
        let page = self.session.page().await?;
        let element = page
            .find(SelectorKind::Css, selector)
            .await?
            .ok_or_else(|| Error::element_not_found(SelectorKind::Css, selector))?;

        element.click().await
    }

    /// Check that `selector` matches at least `minimum` elements
    #[instrument(skip(self))]
    pub async fn assert_at_least_num_elements(&self, minimum: usize, selector: &str) -> Result<()> {
        let found = self.count_elements(selector).await?;

        if found < minimum {
            return Err(Error::count_mismatch(found, selector, ExpectedCount::AtLeast(minimum)));
        }

        Ok(())
    }

    /// Check that `selector` matches exactly `expected` elements
    #[instrument(skip(self))]
    pub async fn assert_exactly_num_element(&self, expected: usize, selector: &str) -> Result<()> {
        let found = self.count_elements(selector).await?;

        if found != expected {
            return Err(Error::count_mismatch(found, selector, ExpectedCount::Exactly(expected)));
        }

        Ok(())
    }

    /// Check that the text of the element matching `selector` contains `text`
    #[instrument(skip(self))]
    pub async fn assert_element_contains_text(&self, selector: &str, text: &str) -> Result<()> {
        let text = fix_step_argument(text);
        self.web_assert
            .element_text_contains(SelectorKind::Css, selector, &text)
            .await
    }

    /// Wait up to `seconds` for `selector` to match a visible element.
    ///
    /// The condition relies on jQuery being present in the page. Returns whether
    /// the element became visible; running out of time is not an error.
    #[instrument(skip(self))]
    pub async fn wait_for_css_element_being_visible(&self, selector: &str, seconds: u64) -> Result<bool> {
        let condition = scripts::visibility_condition(selector);
        let visible = self.session.wait(seconds.saturating_mul(1000), Some(&condition)).await?;

        debug!("Element {} visible after wait: {}", selector, visible);
        Ok(visible)
    }

    /// Count the elements matching `selector`; zero matches is a not-found error
    async fn count_elements(&self, selector: &str) -> Result<usize> {
        let page = self.session.page().await?;
        let found = page.find_all(SelectorKind::Css, selector).await?.len();

        debug!("{} element(s) match {}", found, selector);

        if found == 0 {
            return Err(Error::element_not_found(SelectorKind::Css, selector));
        }

        Ok(found)
    }
}
