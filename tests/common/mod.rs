//! Common test utilities
//!
//! Shared fixtures for the integration tests: a mock Maildev instance and the
//! context wired to it.

#![allow(dead_code)]

use browser_steps::helpers::selectors::{EMAIL_CONTAINER, EMAIL_CONTENT, LATEST_EMAIL_TITLE, PREVIEW_IFRAME};
use browser_steps::session::{MockElement, MockPage, MockSession};
use browser_steps::FeatureContext;
use std::sync::Arc;

/// Base URL a `127.0.0.1` Maildev host resolves to
pub const MAIL_HOST: &str = "http://127.0.0.1";

/// Frame source of the newest message
pub const PREVIEW_SRC: &str = "email/9f2c/html";

/// A Maildev inbox whose newest message has `title`, plus its preview page with `body`
pub fn maildev_session(title: &str, body: &str) -> Arc<MockSession> {
    let inbox = MockPage::new()
        .with_element(LATEST_EMAIL_TITLE, MockElement::new().with_text(title).shared())
        .with_element(EMAIL_CONTAINER, MockElement::new().shared())
        .with_element(PREVIEW_IFRAME, MockElement::new().with_attribute("src", PREVIEW_SRC).shared());

    let preview = MockPage::new()
        .with_element(EMAIL_CONTENT, MockElement::new().with_text(body).shared())
        .with_elements(
            "a.button",
            vec![
                MockElement::new().with_attribute("href", "https://app.test/confirm?token=abc").shared(),
                MockElement::new().with_attribute("href", "https://app.test/unsubscribe").shared(),
            ],
        );

    Arc::new(
        MockSession::new()
            .with_route(MAIL_HOST, inbox)
            .with_route(format!("{}/{}", MAIL_HOST, PREVIEW_SRC), preview),
    )
}

/// Context over `session` with its Maildev host set to the loopback address
pub async fn maildev_context(session: Arc<MockSession>) -> FeatureContext {
    browser_steps::logging::init_tracing("debug");

    let mut context = FeatureContext::new(session);
    context.maildev_mut().set_mail_dev_host("127.0.0.1").await;
    context
}
