//! Maildev UI selectors
//!
//! Every selector below is tied to the markup of the Maildev web UI (an
//! AngularJS single-page app). A UI change only touches this table.

use serde::Deserialize;

/// Title of the first message in the inbox sidebar
pub const LATEST_EMAIL_TITLE: &str =
    "body > div > div.sidebar > div.sidebar-scrollable-content > ul > li:nth-child(1) > a > span.title.ng-binding";

/// Container shown once a message is opened
pub const EMAIL_CONTAINER: &str = "body > div > div.main-container > div.email-container.ng-scope > div";

/// Frame embedding the rendered message
pub const PREVIEW_IFRAME: &str = ".preview-iframe";

/// Body of a rendered message
pub const EMAIL_CONTENT: &str = ".container-padding";

/// Selector table used by [`MaildevSteps`](super::MaildevSteps)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MaildevSelectors {
    pub latest_email_title: String,
    pub email_container: String,
    pub preview_iframe: String,
    pub email_content: String,
}

impl Default for MaildevSelectors {
    fn default() -> Self {
        Self {
            latest_email_title: LATEST_EMAIL_TITLE.to_string(),
            email_container: EMAIL_CONTAINER.to_string(),
            preview_iframe: PREVIEW_IFRAME.to_string(),
            email_content: EMAIL_CONTENT.to_string(),
        }
    }
}
