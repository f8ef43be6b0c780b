//! Feature context
//!
//! Composes the step helpers over one session and dispatches parsed steps to them.

use std::sync::Arc;
use tracing::{error, info, instrument};

use super::definitions::Step;
use crate::config::Config;
use crate::helpers::{ElementSteps, MaildevSteps};
use crate::session::Session;
use crate::Result;

/// Step context bound to a browser session
pub struct FeatureContext {
    elements: ElementSteps,
    maildev: MaildevSteps,
}

impl FeatureContext {
    /// Create a context with the default configuration and no Maildev host
    pub fn new(session: Arc<dyn Session>) -> Self {
        let elements = ElementSteps::from_session(session);
        let maildev = MaildevSteps::new(elements.clone());
        Self { elements, maildev }
    }

    /// Create a context from `config`, resolving its Maildev host when present
    pub async fn with_config(session: Arc<dyn Session>, config: &Config) -> Self {
        let elements = ElementSteps::from_session(session);
        let mut maildev = MaildevSteps::with_config(elements.clone(), config);

        if let Some(host) = &config.mail_host {
            maildev.set_mail_dev_host(host).await;
        }

        Self { elements, maildev }
    }

    /// Element assertion helper
    pub fn elements(&self) -> &ElementSteps {
        &self.elements
    }

    /// Maildev helper
    pub fn maildev(&self) -> &MaildevSteps {
        &self.maildev
    }

    /// Maildev helper, for configuring its host
    pub fn maildev_mut(&mut self) -> &mut MaildevSteps {
        &mut self.maildev
    }

    /// Run a parsed step
    #[instrument(skip(self, step), fields(step = step.name()))]
    pub async fn run(&self, step: &Step) -> Result<()> {
        match step {
            Step::ClickElement { selector } => self.elements.click_element(selector).await,
            Step::ElementHasAttribute { selector, attribute } => {
                self.elements.assert_element_attribute_exists(selector, attribute).await
            }
            Step::ElementAttributeNotContains { selector, attribute, value } => {
                self.elements
                    .element_attribute_not_contains(selector, attribute, value)
                    .await
            }
            Step::AtLeastNumElements { minimum, selector } => {
                self.elements.assert_at_least_num_elements(*minimum, selector).await
            }
            Step::ExactlyNumElements { expected, selector } => {
                self.elements.assert_exactly_num_element(*expected, selector).await
            }
            Step::ElementContainsText { selector, text } => {
                self.elements.assert_element_contains_text(selector, text).await
            }
            Step::WaitForElementVisible { selector, seconds } => {
                self.elements
                    .wait_for_css_element_being_visible(selector, *seconds)
                    .await
                    .map(|_| ())
            }
            Step::LatestEmailHasTitle { title } => {
                self.maildev.assert_latest_unread_email_has_title(title).await
            }
            Step::BrowseLatestEmail => self.maildev.browse_latest_received_email().await,
        }
    }

    /// Parse and run one line of step text
    pub async fn run_step(&self, text: &str) -> Result<()> {
        let step = Step::parse(text)?;
        self.run(&step).await
    }

    /// Run step lines in order, stopping at the first failure.
    ///
    /// Blank lines and `#` comments are skipped. Returns the number of steps run.
    pub async fn run_scenario<I, S>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut executed = 0;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Err(e) = self.run_step(line).await {
                error!("Step failed: {}: {}", line, e);
                return Err(e);
            }

            executed += 1;
            info!("Step passed: {}", line);
        }

        Ok(executed)
    }
}
