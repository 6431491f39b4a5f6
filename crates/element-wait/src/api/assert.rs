// Assert - Hard existence checks

use crate::actions::Actions;
use crate::api::PollPolicy;
use crate::error::Result;
use crate::protocol::Page;

/// Asserts that a `<tag_name>` containing `text` appears on `page`.
///
/// Returns `Ok(true)` once found. Fails with `Error::ElementNotFound` after the
/// default budget (10 lookups, 500ms apart).
pub async fn element_with_text_exists<P: Page>(
    page: &P,
    tag_name: &str,
    text: &str,
) -> Result<bool> {
    element_with_text_exists_with_policy(page, tag_name, text, &PollPolicy::default()).await
}

pub async fn element_with_text_exists_with_policy<P: Page>(
    page: &P,
    tag_name: &str,
    text: &str,
    policy: &PollPolicy,
) -> Result<bool> {
    Actions::new(page)
        .with_policy(*policy)
        .assert_exists(tag_name, text)
        .await
}
