//! Step parsing and dispatch tests

use std::sync::Arc;

use super::{strip_keyword, FeatureContext, Step, DEFINITIONS};
use crate::config::Config;
use crate::session::mock::{MockElement, MockPage, MockSession};
use crate::Error;

#[test]
fn test_strip_keyword() {
    assert_eq!(strip_keyword("  Given I browse latest received email "), "I browse latest received email");
    assert_eq!(strip_keyword("And I browse latest received email"), "I browse latest received email");
    assert_eq!(strip_keyword("* I browse latest received email"), "I browse latest received email");
    assert_eq!(strip_keyword("I browse latest received email"), "I browse latest received email");
    assert_eq!(strip_keyword("Andrew clicks"), "Andrew clicks");
    assert_eq!(strip_keyword("Then"), "Then");
}

#[test]
fn test_strip_keyword_accepts_any_whitespace() {
    assert_eq!(strip_keyword("Then\tI browse latest received email"), "I browse latest received email");
    assert_eq!(strip_keyword("And  \t I browse latest received email"), "I browse latest received email");
    assert_eq!(Step::parse("Then\tI browse latest received email").unwrap(), Step::BrowseLatestEmail);
    assert_eq!(
        Step::parse("When\u{a0}I click on the \"a\" element").unwrap(),
        Step::ClickElement { selector: "a".to_string() }
    );
}

#[test]
fn test_parse_maildev_steps() {
    assert_eq!(
        Step::parse(r#"Then I should see latest email unread with title "Welcome aboard""#).unwrap(),
        Step::LatestEmailHasTitle { title: "Welcome aboard".to_string() }
    );
    // The closing quote and the final letter are optional in these patterns
    assert_eq!(
        Step::parse(r#"I should see latest email unread with title "Welcome aboard"#).unwrap(),
        Step::LatestEmailHasTitle { title: "Welcome aboard".to_string() }
    );
    assert_eq!(Step::parse("When I browse latest received email").unwrap(), Step::BrowseLatestEmail);
    assert_eq!(Step::parse("When I browse latest received emai").unwrap(), Step::BrowseLatestEmail);
}

#[test]
fn test_parse_element_steps() {
    assert_eq!(
        Step::parse(r#"When I click on the ".sonata-ba-list a" element"#).unwrap(),
        Step::ClickElement { selector: ".sonata-ba-list a".to_string() }
    );
    assert_eq!(
        Step::parse(r#"Then the "a.action_bar__next" element should have a "disabled" attribute"#).unwrap(),
        Step::ElementHasAttribute {
            selector: "a.action_bar__next".to_string(),
            attribute: "disabled".to_string(),
        }
    );
    assert_eq!(
        Step::parse(r#"Then the "class" attribute of the "button" element should not contain "danger""#).unwrap(),
        Step::ElementAttributeNotContains {
            selector: "button".to_string(),
            attribute: "class".to_string(),
            value: "danger".to_string(),
        }
    );
    assert_eq!(
        Step::parse(r#"Then I should see at least 2 ".foo" elements"#).unwrap(),
        Step::AtLeastNumElements { minimum: 2, selector: ".foo".to_string() }
    );
    assert_eq!(
        Step::parse(r#"Then I should see exactly 1 ".foo" element"#).unwrap(),
        Step::ExactlyNumElements { expected: 1, selector: ".foo".to_string() }
    );
    assert_eq!(
        Step::parse(r#"Then I should see "Say \"hi\"" in the "h1" element"#).unwrap(),
        Step::ElementContainsText {
            selector: "h1".to_string(),
            text: r#"Say \"hi\""#.to_string(),
        }
    );
    assert_eq!(
        Step::parse(r#"And I wait for ".modal" element being visible for 3 seconds"#).unwrap(),
        Step::WaitForElementVisible { selector: ".modal".to_string(), seconds: 3 }
    );
}

#[test]
fn test_parse_undefined_step() {
    let err = Step::parse("Given I am on the homepage").unwrap_err();
    assert!(matches!(err, Error::UndefinedStep(ref text) if text == "I am on the homepage"));
}

#[test]
fn test_parse_number_out_of_range() {
    let err = Step::parse(r#"I should see at least 99999999999999999999999 ".foo" elements"#).unwrap_err();
    assert!(matches!(err, Error::UndefinedStep(_)));
}

#[test]
fn test_step_names_match_definitions() {
    let steps = [
        r#"I click on the "a" element"#,
        r#"the "a" element should have an "href" attribute"#,
        r#"the "href" attribute of the "a" element should not contain "x""#,
        r#"I should see at least 1 "a" element"#,
        r#"I should see exactly 1 "a" element"#,
        r#"I should see "x" in the "a" element"#,
        r#"I wait for "a" element being visible for 1 second"#,
        r#"I should see latest email unread with title "x""#,
        "I browse latest received email",
    ];

    assert_eq!(steps.len(), DEFINITIONS.len());
    for (text, definition) in steps.iter().zip(DEFINITIONS) {
        let step: Step = text.parse().unwrap();
        assert_eq!(step.name(), definition.name);
    }
}

#[tokio::test]
async fn test_run_dispatches_to_element_steps() {
    let link = MockElement::new().shared();
    let page = MockPage::new()
        .with_element("a.next", link.clone())
        .with_elements(".item", vec![MockElement::new().shared(), MockElement::new().shared()]);
    let context = FeatureContext::new(Arc::new(MockSession::new().with_page(page)));

    context.run_step(r#"When I click on the "a.next" element"#).await.unwrap();
    context.run_step(r#"Then I should see exactly 2 ".item" elements"#).await.unwrap();

    assert_eq!(link.click_count(), 1);

    let err = context
        .run_step(r#"Then I should see at least 3 ".item" elements"#)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "2 \".item\" found on the page, but should at least 3.");
}

#[tokio::test]
async fn test_run_scenario_skips_comments_and_stops_on_failure() {
    let page = MockPage::new().with_element("h1", MockElement::new().with_text("Dashboard").shared());
    let context = FeatureContext::new(Arc::new(MockSession::new().with_page(page)));

    let executed = context
        .run_scenario([
            "# heading",
            "",
            r#"Then I should see "dashboard" in the "h1" element"#,
            r#"And I should see exactly 1 "h1" element"#,
        ])
        .await
        .unwrap();
    assert_eq!(executed, 2);

    let err = context
        .run_scenario([
            r#"Then I should see exactly 1 "h1" element"#,
            r#"And I should see exactly 1 "h2" element"#,
            "And this line is never parsed",
        ])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Element matching css \"h2\" not found.");
}

#[tokio::test]
async fn test_with_config_resolves_mail_host() {
    let config = Config {
        mail_host: Some("127.0.0.1".to_string()),
        ..Config::default()
    };

    let context = FeatureContext::with_config(Arc::new(MockSession::new()), &config).await;
    assert_eq!(context.maildev().mail_host(), Some("http://127.0.0.1"));

    let context = FeatureContext::new(Arc::new(MockSession::new()));
    assert_eq!(context.maildev().mail_host(), None);
}

#[test]
fn test_run_step_blocking() {
    let context = FeatureContext::new(Arc::new(MockSession::new()));
    let err = tokio_test::block_on(context.run_step("I browse latest received email")).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
