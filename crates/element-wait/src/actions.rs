// Actions - User-facing operations composed from ElementFinder
//
// Error policy differs by operation and must stay that way:
// - assert_exists / click / click_by_class: absence is ElementNotFound
// - wait_for_enabled: absence is Ok(None)

use crate::api::PollPolicy;
use crate::error::Result;
use crate::finder::ElementFinder;
use crate::poll::poll;
use crate::protocol::{ElementHandle, Locator, Page};

pub(crate) const ASSERT_TEXT_EXISTS: &str = "assert::element_with_text_exists";
pub(crate) const CLICK_WITH_TEXT: &str = "click::element_with_text";
pub(crate) const CLICK_WITH_CLASS: &str = "click::element_with_class";

/// Assert, click and wait operations against a borrowed page.
///
/// # Example
///
/// ```ignore
/// use element_wait::Actions;
///
/// let actions = Actions::new(&page);
/// actions.click("button", "Submit").await?;
/// actions.assert_exists("h1", "Thank you").await?;
/// ```
pub struct Actions<'p, P: Page> {
    finder: ElementFinder<'p, P>,
}

impl<'p, P: Page> Actions<'p, P> {
    pub fn new(page: &'p P) -> Self {
        Self {
            finder: ElementFinder::new(page),
        }
    }

    /// Sets the poll policy used by every operation.
    pub fn with_policy(self, policy: PollPolicy) -> Self {
        Self {
            finder: self.finder.with_policy(policy),
        }
    }

    pub fn finder(&self) -> &ElementFinder<'p, P> {
        &self.finder
    }

    /// Asserts that a `<tag_name>` containing `text` appears within the poll budget.
    ///
    /// Returns `Ok(true)` when found; fails with `ElementNotFound` otherwise.
    pub async fn assert_exists(&self, tag_name: &str, text: &str) -> Result<bool> {
        self.finder
            .require(Locator::text_contains(tag_name, text), ASSERT_TEXT_EXISTS)
            .await?;
        Ok(true)
    }

    /// Clicks the first `<tag_name>` containing `text` once it appears.
    ///
    /// Performs exactly one click; fails with `ElementNotFound` if nothing appears.
    pub async fn click(&self, tag_name: &str, text: &str) -> Result<()> {
        let locator = Locator::text_contains(tag_name, text);
        self.click_located(locator, CLICK_WITH_TEXT).await
    }

    /// Clicks the first `<tag_name>` carrying `css_class` once it appears.
    ///
    /// Performs exactly one click; fails with `ElementNotFound` if nothing appears.
    pub async fn click_by_class(&self, tag_name: &str, css_class: &str) -> Result<()> {
        let locator = Locator::class(tag_name, css_class);
        self.click_located(locator, CLICK_WITH_CLASS).await
    }

    /// Waits for a `<tag_name>` containing `text` to be present and not disabled.
    ///
    /// The enabled-state lookup is itself a full poll, and it is re-run by an outer
    /// poll with the same policy, so the worst case is roughly the square of the
    /// budget (about 50s with the defaults). Returns `Ok(None)` when exhausted.
    pub async fn wait_for_enabled(
        &self,
        tag_name: &str,
        text: &str,
    ) -> Result<Option<P::Element>> {
        let locator = &Locator::text_contains_enabled(tag_name, text);
        let finder = &self.finder;
        poll(finder.policy(), locator, move || finder.find(locator)).await
    }

    async fn click_located(&self, locator: Locator, operation: &'static str) -> Result<()> {
        let element = self.finder.require(locator, operation).await?;
        tracing::debug!(operation, "Clicking located element");
        element.click().await
    }
}
