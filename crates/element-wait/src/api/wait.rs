// Wait - Soft finds
//
// Every function here returns Ok(None) when the budget runs out. Only
// backend failures surface as errors.

use crate::actions::Actions;
use crate::api::PollPolicy;
use crate::error::Result;
use crate::finder::ElementFinder;
use crate::protocol::{Locator, Page};

/// Waits for the first element matching a raw CSS selector.
pub async fn for_element_css<P: Page>(page: &P, selector: &str) -> Result<Option<P::Element>> {
    for_element_css_with_policy(page, selector, &PollPolicy::default()).await
}

pub async fn for_element_css_with_policy<P: Page>(
    page: &P,
    selector: &str,
    policy: &PollPolicy,
) -> Result<Option<P::Element>> {
    ElementFinder::new(page)
        .with_policy(*policy)
        .find(&Locator::css(selector))
        .await
}

/// Waits for the first element matching a raw XPath selector.
pub async fn for_element_xpath<P: Page>(page: &P, selector: &str) -> Result<Option<P::Element>> {
    for_element_xpath_with_policy(page, selector, &PollPolicy::default()).await
}

pub async fn for_element_xpath_with_policy<P: Page>(
    page: &P,
    selector: &str,
    policy: &PollPolicy,
) -> Result<Option<P::Element>> {
    ElementFinder::new(page)
        .with_policy(*policy)
        .find(&Locator::xpath(selector))
        .await
}

/// Waits for a `<tag_name>` containing `text` to be present and not disabled.
///
/// The budget compounds: an outer poll re-runs a full inner poll, so with the
/// default policy this can take up to 100 lookups before returning `None`.
pub async fn for_enabled_state_xpath<P: Page>(
    page: &P,
    tag_name: &str,
    text: &str,
) -> Result<Option<P::Element>> {
    for_enabled_state_xpath_with_policy(page, tag_name, text, &PollPolicy::default()).await
}

pub async fn for_enabled_state_xpath_with_policy<P: Page>(
    page: &P,
    tag_name: &str,
    text: &str,
    policy: &PollPolicy,
) -> Result<Option<P::Element>> {
    Actions::new(page)
        .with_policy(*policy)
        .wait_for_enabled(tag_name, text)
        .await
}
