// Integration tests for the assert/click/wait capability groups
//
// Tests cover:
// - hard operations fail with ElementNotFound, soft ones return None
// - raw CSS and XPath selectors are passed through verbatim
// - repeated waits on an unchanged page give the same outcome
// - *_with_policy variants honor the given policy


use element_wait::{Error, PollPolicy, assert, click, wait};
use scripted_page::ScriptedPage;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_assert_element_with_text_exists() -> anyhow::Result<()> {
    let page = ScriptedPage::new().with_element("//p[contains(., 'Saved')]", 1);

    assert!(assert::element_with_text_exists(&page, "p", "Saved").await?);
    assert_eq!(page.lookups(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_assert_element_with_text_exists_fails_when_missing() {
    let page = ScriptedPage::new();

    let result = assert::element_with_text_exists(&page, "p", "Saved").await;

    assert!(matches!(result, Err(Error::ElementNotFound { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_click_element_with_text_clicks_once() -> anyhow::Result<()> {
    let page = ScriptedPage::new().with_element("//a[contains(., 'Next')]", 2);

    click::element_with_text(&page, "a", "Next").await?;

    assert_eq!(page.clicks().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_click_element_with_class_uses_class_verbatim() -> anyhow::Result<()> {
    let page = ScriptedPage::new().with_element("div.MuiSelect-select", 1);

    click::element_with_class(&page, "div", ".MuiSelect-select").await?;

    assert_eq!(page.clicks(), vec!["div.MuiSelect-select".to_string()]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_element_css_and_xpath() -> anyhow::Result<()> {
    let page = ScriptedPage::new()
        .with_element("#app > .ready", 4)
        .with_element("//ul/li[3]", 1);

    let css = wait::for_element_css(&page, "#app > .ready").await?;
    let xpath = wait::for_element_xpath(&page, "//ul/li[3]").await?;

    assert_eq!(css.map(|e| e.selector().to_string()).as_deref(), Some("#app > .ready"));
    assert!(xpath.is_some());
    assert_eq!(page.lookups(), 5);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_wait_returns_none_on_exhaustion() -> anyhow::Result<()> {
    let page = ScriptedPage::new();

    assert!(wait::for_element_css(&page, ".spinner").await?.is_none());
    assert!(wait::for_element_xpath(&page, "//dialog").await?.is_none());
    assert_eq!(page.lookups(), 20);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_enabled_state_xpath_always_disabled() -> anyhow::Result<()> {
    let page = ScriptedPage::new().with_element("//button[contains(., 'Save')]", 1);

    let element = wait::for_enabled_state_xpath(&page, "button", "Save").await?;

    assert!(element.is_none());
    assert!(page.clicks().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_wait_is_idempotent_on_unchanged_page() -> anyhow::Result<()> {
    let present = ScriptedPage::new().with_element("nav.menu", 1);
    let first = wait::for_element_css(&present, "nav.menu").await?;
    let second = wait::for_element_css(&present, "nav.menu").await?;
    assert_eq!(first.is_some(), second.is_some());

    let absent = ScriptedPage::new();
    let first = wait::for_element_css(&absent, "nav.menu").await?;
    let second = wait::for_element_css(&absent, "nav.menu").await?;
    assert!(first.is_none() && second.is_none());
    // A second poll restarts the schedule from scratch
    assert_eq!(absent.lookups(), 20);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_with_policy_variants() -> anyhow::Result<()> {
    let page = ScriptedPage::new();
    let policy = PollPolicy::builder()
        .max_attempts(2)
        .interval(Duration::from_millis(100))
        .build();
    let start = Instant::now();

    let result = click::element_with_text_with_policy(&page, "button", "Go", &policy).await;
    assert!(matches!(result, Err(Error::ElementNotFound { .. })));
    assert_eq!(start.elapsed(), Duration::from_millis(100));

    let element = wait::for_element_xpath_with_policy(&page, "//footer", &policy).await?;
    assert!(element.is_none());

    let element =
        wait::for_enabled_state_xpath_with_policy(&page, "button", "Go", &policy).await?;
    assert!(element.is_none());

    let exists = assert::element_with_text_exists_with_policy(&page, "h2", "Done", &policy).await;
    assert!(exists.is_err());

    // 2 (click) + 2 (xpath) + 2x2 (enabled) + 2 (assert)
    assert_eq!(page.lookups(), 10);
    Ok(())
}
