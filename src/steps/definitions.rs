//! Step definitions
//!
//! Natural-language step patterns and the typed [`Step`] they parse into.
//! Patterns are matched against the step text without its Gherkin keyword.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::str::FromStr;

use crate::{Error, Result};

/// Name and pattern of a step definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Every step definition, in matching order
pub const DEFINITIONS: &[StepDefinition] = &[
    StepDefinition {
        name: "click_element",
        pattern: r#"^I click on the "(?P<element>[^"]*)" element$"#,
    },
    StepDefinition {
        name: "assert_element_attribute_exists",
        pattern: r#"^the "(?P<element>[^"]*)" element should have an? "(?P<attribute>(?:[^"]|\\")*)" attribute$"#,
    },
    StepDefinition {
        name: "element_attribute_not_contains",
        pattern: r#"^the "(?P<attribute>[^"]*)" attribute of the "(?P<element>[^"]*)" element should not contain "(?P<value>(?:[^"]|\\")*)"$"#,
    },
    StepDefinition {
        name: "assert_at_least_num_elements",
        pattern: r#"^I should see at least (?P<num>\d+) "(?P<element>[^"]*)" elements?$"#,
    },
    StepDefinition {
        name: "assert_exactly_num_element",
        pattern: r#"^I should see exactly (?P<num>\d+) "(?P<element>[^"]*)" elements?$"#,
    },
    StepDefinition {
        name: "assert_element_contains_text",
        pattern: r#"^I should see "(?P<text>(?:[^"]|\\")*)" in the "(?P<element>[^"]*)" element$"#,
    },
    StepDefinition {
        name: "wait_for_css_element_being_visible",
        pattern: r#"^I wait for "(?P<element>[^"]*)" element being visible for (?P<seconds>\d+) seconds?$"#,
    },
    StepDefinition {
        name: "assert_latest_unread_email_has_title",
        pattern: r#"^I should see latest email unread with title "(?P<title>[^"]*)"?$"#,
    },
    StepDefinition {
        name: "browse_latest_received_email",
        pattern: r#"^I browse latest received email?$"#,
    },
];

static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEFINITIONS
        .iter()
        .map(|definition| Regex::new(definition.pattern).expect("step patterns are valid regexes"))
        .collect()
});

const KEYWORDS: &[&str] = &["Given", "When", "Then", "And", "But", "*"];

/// Drop a leading Gherkin keyword and surrounding whitespace.
///
/// A keyword only counts when whitespace follows it.
pub fn strip_keyword(text: &str) -> &str {
    let text = text.trim();
    KEYWORDS
        .iter()
        .filter_map(|keyword| text.strip_prefix(keyword))
        .find(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(text)
}

/// A parsed step, ready to run against a `FeatureContext`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    ClickElement { selector: String },
    ElementHasAttribute { selector: String, attribute: String },
    ElementAttributeNotContains { selector: String, attribute: String, value: String },
    AtLeastNumElements { minimum: usize, selector: String },
    ExactlyNumElements { expected: usize, selector: String },
    ElementContainsText { selector: String, text: String },
    WaitForElementVisible { selector: String, seconds: u64 },
    LatestEmailHasTitle { title: String },
    BrowseLatestEmail,
}

impl Step {
    /// Parse step text, with or without its Gherkin keyword
    pub fn parse(text: &str) -> Result<Self> {
        let text = strip_keyword(text);

        for (definition, regex) in DEFINITIONS.iter().zip(COMPILED.iter()) {
            if let Some(caps) = regex.captures(text) {
                return Self::from_captures(definition.name, &caps, text);
            }
        }

        Err(Error::UndefinedStep(text.to_string()))
    }

    /// Name of the definition this step came from
    pub fn name(&self) -> &'static str {
        match self {
            Step::ClickElement { .. } => "click_element",
            Step::ElementHasAttribute { .. } => "assert_element_attribute_exists",
            Step::ElementAttributeNotContains { .. } => "element_attribute_not_contains",
            Step::AtLeastNumElements { .. } => "assert_at_least_num_elements",
            Step::ExactlyNumElements { .. } => "assert_exactly_num_element",
            Step::ElementContainsText { .. } => "assert_element_contains_text",
            Step::WaitForElementVisible { .. } => "wait_for_css_element_being_visible",
            Step::LatestEmailHasTitle { .. } => "assert_latest_unread_email_has_title",
            Step::BrowseLatestEmail => "browse_latest_received_email",
        }
    }

    fn from_captures(name: &str, caps: &Captures<'_>, text: &str) -> Result<Self> {
        let step = match name {
            "click_element" => Step::ClickElement {
                selector: capture(caps, "element"),
            },
            "assert_element_attribute_exists" => Step::ElementHasAttribute {
                selector: capture(caps, "element"),
                attribute: capture(caps, "attribute"),
            },
            "element_attribute_not_contains" => Step::ElementAttributeNotContains {
                selector: capture(caps, "element"),
                attribute: capture(caps, "attribute"),
                value: capture(caps, "value"),
            },
            "assert_at_least_num_elements" => Step::AtLeastNumElements {
                minimum: number(caps, "num", text)?,
                selector: capture(caps, "element"),
            },
            "assert_exactly_num_element" => Step::ExactlyNumElements {
                expected: number(caps, "num", text)?,
                selector: capture(caps, "element"),
            },
            "assert_element_contains_text" => Step::ElementContainsText {
                selector: capture(caps, "element"),
                text: capture(caps, "text"),
            },
            "wait_for_css_element_being_visible" => Step::WaitForElementVisible {
                selector: capture(caps, "element"),
                seconds: number(caps, "seconds", text)?,
            },
            "assert_latest_unread_email_has_title" => Step::LatestEmailHasTitle {
                title: capture(caps, "title"),
            },
            "browse_latest_received_email" => Step::BrowseLatestEmail,
            _ => return Err(Error::UndefinedStep(text.to_string())),
        };

        Ok(step)
    }
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Step::parse(s)
    }
}

fn capture(caps: &Captures<'_>, group: &str) -> String {
    caps.name(group).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn number<T: FromStr>(caps: &Captures<'_>, group: &str, text: &str) -> Result<T> {
    capture(caps, group)
        .parse()
        .map_err(|_| Error::UndefinedStep(format!("{} (number out of range)", text)))
}
