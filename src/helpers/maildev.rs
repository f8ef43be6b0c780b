//! Maildev helper
//!
//! Drives the Maildev web UI to inspect the most recently received message.
//! The UI is a single-page app without jQuery, so every visit injects it
//! before the selector-based waits can run.

use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::element::ElementSteps;
use super::scripts;
use super::selectors::MaildevSelectors;
use crate::assertion::web_assert::element_representation;
use crate::config::Config;
use crate::session::{SelectorKind, Session};
use crate::{Error, Result};

/// Resolve `hostname` to its first IPv4 address.
///
/// Falls back to the hostname itself when it cannot be resolved.
pub async fn resolve_host(hostname: &str) -> String {
    match tokio::net::lookup_host((hostname, 0)).await {
        Ok(addrs) => {
            let ipv4 = addrs
                .map(|addr| addr.ip())
                .find(IpAddr::is_ipv4);
            match ipv4 {
                Some(ip) => ip.to_string(),
                None => {
                    warn!("No IPv4 address for {}, using it verbatim", hostname);
                    hostname.to_string()
                }
            }
        }
        Err(e) => {
            warn!("Could not resolve {}: {}", hostname, e);
            hostname.to_string()
        }
    }
}

/// Maildev helper
pub struct MaildevSteps {
    session: Arc<dyn Session>,
    elements: ElementSteps,
    mail_host: Option<String>,
    selectors: MaildevSelectors,
    jquery_url: String,
    script_load_wait_ms: u64,
    preview_visible_timeout_secs: u64,
}

impl MaildevSteps {
    /// Create a helper with the default selectors and waits
    pub fn new(elements: ElementSteps) -> Self {
        Self::with_config(elements, &Config::default())
    }

    /// Create a helper using the selectors, script URL and waits from `config`.
    ///
    /// The mail host is not resolved here; see [`MaildevSteps::set_mail_dev_host`].
    pub fn with_config(elements: ElementSteps, config: &Config) -> Self {
        Self {
            session: elements.session().clone(),
            elements,
            mail_host: None,
            selectors: config.maildev.clone(),
            jquery_url: config.jquery_url.clone(),
            script_load_wait_ms: config.script_load_wait_ms,
            preview_visible_timeout_secs: config.preview_visible_timeout_secs,
        }
    }

    /// Resolve `hostname` and use `http://<ip>` as the Maildev base URL.
    ///
    /// Must be called before any Maildev step; until then they fail with a configuration error.
    #[instrument(skip(self))]
    pub async fn set_mail_dev_host(&mut self, hostname: &str) {
        let host = format!("http://{}", resolve_host(hostname).await);
        info!("Maildev host set to {}", host);
        self.mail_host = Some(host);
    }

    /// Configured Maildev base URL
    pub fn mail_host(&self) -> Option<&str> {
        self.mail_host.as_deref()
    }

    /// Selector table in use
    pub fn selectors(&self) -> &MaildevSelectors {
        &self.selectors
    }

    /// Check the title of the newest message in the inbox
    #[instrument(skip(self))]
    pub async fn assert_latest_unread_email_has_title(&self, title: &str) -> Result<()> {
        self.visit_maildev().await?;
        self.elements
            .assert_element_contains_text(&self.selectors.latest_email_title, title)
            .await
    }

    /// Open the newest message and navigate into its preview frame
    #[instrument(skip(self))]
    pub async fn browse_latest_received_email(&self) -> Result<()> {
        let host = self.visit_maildev().await?;

        self.elements.click_element(&self.selectors.latest_email_title).await?;
        self.elements
            .wait_for_css_element_being_visible(&self.selectors.email_container, self.preview_visible_timeout_secs)
            .await?;

        // Follow the frame source instead of switching the driver into the frame
        let page = self.session.page().await?;
        let iframe = page
            .find(SelectorKind::Css, &self.selectors.preview_iframe)
            .await?
            .ok_or_else(|| Error::element_not_found(SelectorKind::Css, self.selectors.preview_iframe.as_str()))?;
        let src = iframe.attribute("src").await?.ok_or_else(|| {
            Error::assertion(format!(
                "The attribute \"src\" was not found in the {}.",
                element_representation(SelectorKind::Css, &self.selectors.preview_iframe)
            ))
        })?;

        let preview_url = format!("{}/{}", host, src);
        info!("Opening email preview at {}", preview_url);
        self.session.visit(&preview_url).await
    }

    /// Text of the message currently shown in the preview
    #[instrument(skip(self))]
    pub async fn get_email_content(&self) -> Result<String> {
        let page = self.session.page().await?;
        let content = page
            .find(SelectorKind::Css, &self.selectors.email_content)
            .await?
            .ok_or_else(|| Error::element_not_found(SelectorKind::Css, self.selectors.email_content.as_str()))?;

        content.text().await
    }

    /// Open the Maildev inbox and load jQuery into it; returns the base URL
    async fn visit_maildev(&self) -> Result<&str> {
        let host = self
            .mail_host
            .as_deref()
            .ok_or_else(|| Error::configuration("Maildev host is not set"))?;

        info!("Visiting Maildev at {}", host);
        self.session.visit(host).await?;
        self.load_jquery().await?;

        Ok(host)
    }

    /// Inject jQuery, then give it a fixed delay to load
    async fn load_jquery(&self) -> Result<()> {
        let script = scripts::inject_script_tag(&self.jquery_url);

        let loaded = async {
            self.session.execute_script(&script).await?;
            self.session.wait(self.script_load_wait_ms, None).await
        };

        match loaded.await {
            Ok(_) => {
                debug!("Injected {}", self.jquery_url);
                Ok(())
            }
            Err(e) => {
                warn!("jQuery injection failed: {}", e);
                Err(Error::ScriptInjection)
            }
        }
    }
}
