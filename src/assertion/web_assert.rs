//! Session-backed web assertions

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::traits::WebAssert;
use crate::session::{Element, SelectorKind, Session};
use crate::{Error, Result};

/// Describe a selector the way failure messages name it
pub(crate) fn element_representation(kind: SelectorKind, selector: &str) -> String {
    format!("element matching {} \"{}\"", kind, selector)
}

/// Case-insensitive substring test
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Web assertions evaluated against the current page of a session
pub struct SessionWebAssert {
    session: Arc<dyn Session>,
}

impl SessionWebAssert {
    /// Create assertions bound to a session
    pub fn new(session: Arc<dyn Session>) -> Self {
        Self { session }
    }

    async fn attribute_value(&self, kind: SelectorKind, selector: &str, attribute: &str) -> Result<String> {
        let element = self.element_attribute_exists(kind, selector, attribute).await?;
        Ok(element.attribute(attribute).await?.unwrap_or_default())
    }
}

#[async_trait]
impl WebAssert for SessionWebAssert {
    #[instrument(skip(self))]
    async fn element_exists(&self, kind: SelectorKind, selector: &str) -> Result<Arc<dyn Element>> {
        let page = self.session.page().await?;
        match page.find(kind, selector).await? {
            Some(element) => Ok(element),
            None => {
                debug!("No element matches {} {}", kind, selector);
                Err(Error::element_not_found(kind, selector))
            }
        }
    }

    #[instrument(skip(self))]
    async fn element_attribute_exists(
        &self,
        kind: SelectorKind,
        selector: &str,
        attribute: &str,
    ) -> Result<Arc<dyn Element>> {
        let element = self.element_exists(kind, selector).await?;

        if !element.has_attribute(attribute).await? {
            return Err(Error::assertion(format!(
                "The attribute \"{}\" was not found in the {}.",
                attribute,
                element_representation(kind, selector)
            )));
        }

        Ok(element)
    }

    #[instrument(skip(self))]
    async fn element_attribute_contains(
        &self,
        kind: SelectorKind,
        selector: &str,
        attribute: &str,
        text: &str,
    ) -> Result<()> {
        let actual = self.attribute_value(kind, selector, attribute).await?;

        if !contains_ignore_case(&actual, text) {
            return Err(Error::assertion(format!(
                "The text \"{}\" was not found in the attribute \"{}\" of the {}.",
                text,
                attribute,
                element_representation(kind, selector)
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn element_attribute_not_contains(
        &self,
        kind: SelectorKind,
        selector: &str,
        attribute: &str,
        text: &str,
    ) -> Result<()> {
        let actual = self.attribute_value(kind, selector, attribute).await?;

        if contains_ignore_case(&actual, text) {
            return Err(Error::assertion(format!(
                "The text \"{}\" was found in the attribute \"{}\" of the {}.",
                text,
                attribute,
                element_representation(kind, selector)
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn element_text_contains(&self, kind: SelectorKind, selector: &str, text: &str) -> Result<()> {
        let element = self.element_exists(kind, selector).await?;
        let actual = element.text().await?;

        if !contains_ignore_case(&actual, text) {
            return Err(Error::assertion(format!(
                "The text \"{}\" was not found in the text of the {}.",
                text,
                element_representation(kind, selector)
            )));
        }

        Ok(())
    }
}
