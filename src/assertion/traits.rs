//! Web assertion traits

use async_trait::async_trait;
use std::sync::Arc;

use crate::session::{Element, SelectorKind};
use crate::Result;

/// Web assertion trait
///
/// Every method queries the current page again; nothing is cached between calls.
#[async_trait]
pub trait WebAssert: Send + Sync {
    /// Assert that a selector matches at least one element and return the first
    async fn element_exists(&self, kind: SelectorKind, selector: &str) -> Result<Arc<dyn Element>>;

    /// Assert that the matched element carries `attribute`
    async fn element_attribute_exists(
        &self,
        kind: SelectorKind,
        selector: &str,
        attribute: &str,
    ) -> Result<Arc<dyn Element>>;

    /// Assert that `attribute` of the matched element contains `text`
    async fn element_attribute_contains(
        &self,
        kind: SelectorKind,
        selector: &str,
        attribute: &str,
        text: &str,
    ) -> Result<()>;

    /// Assert that `attribute` of the matched element does not contain `text`
    async fn element_attribute_not_contains(
        &self,
        kind: SelectorKind,
        selector: &str,
        attribute: &str,
        text: &str,
    ) -> Result<()>;

    /// Assert that the text of the matched element contains `text`
    async fn element_text_contains(&self, kind: SelectorKind, selector: &str, text: &str) -> Result<()>;
}
