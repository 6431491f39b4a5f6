// Click - Wait for an element, then click it once
//
// Both operations fail with Error::ElementNotFound when nothing appears
// within the poll budget; no click happens in that case.

use crate::actions::Actions;
use crate::api::PollPolicy;
use crate::error::Result;
use crate::protocol::Page;

/// Clicks the first `<tag_name>` whose text contains `text`.
///
/// # Example
///
/// ```ignore
/// element_wait::click::element_with_text(&page, "button", "Submit").await?;
/// ```
pub async fn element_with_text<P: Page>(page: &P, tag_name: &str, text: &str) -> Result<()> {
    element_with_text_with_policy(page, tag_name, text, &PollPolicy::default()).await
}

pub async fn element_with_text_with_policy<P: Page>(
    page: &P,
    tag_name: &str,
    text: &str,
    policy: &PollPolicy,
) -> Result<()> {
    Actions::new(page)
        .with_policy(*policy)
        .click(tag_name, text)
        .await
}

/// Clicks the first `<tag_name>` carrying `css_class`.
///
/// The class is used verbatim, dot included: `element_with_class(&page, "div", ".MuiSelect-select")`.
pub async fn element_with_class<P: Page>(
    page: &P,
    tag_name: &str,
    css_class: &str,
) -> Result<()> {
    element_with_class_with_policy(page, tag_name, css_class, &PollPolicy::default()).await
}

pub async fn element_with_class_with_policy<P: Page>(
    page: &P,
    tag_name: &str,
    css_class: &str,
    policy: &PollPolicy,
) -> Result<()> {
    Actions::new(page)
        .with_policy(*policy)
        .click_by_class(tag_name, css_class)
        .await
}
