// ElementFinder - Lookup strategies fed into the poll loop
//
// Each strategy builds a Locator and hands a single-shot page lookup to
// poll(). Finds come in two shapes:
// - soft: absence after the budget is Ok(None)
// - hard: absence after the budget is Error::ElementNotFound

use crate::api::PollPolicy;
use crate::error::{Error, Result};
use crate::poll::poll;
use crate::protocol::{Locator, Page};

/// Finds elements on a borrowed page, retrying per a [`PollPolicy`].
///
/// Every handle returned comes from the last lookup performed, so it refers to an
/// element present at that moment, never to one seen on an earlier attempt.
pub struct ElementFinder<'p, P: Page> {
    page: &'p P,
    policy: PollPolicy,
}

impl<'p, P: Page> ElementFinder<'p, P> {
    /// Creates a finder using the default policy (10 attempts, 500ms apart).
    pub fn new(page: &'p P) -> Self {
        Self {
            page,
            policy: PollPolicy::default(),
        }
    }

    /// Sets the poll policy for lookups made by this finder.
    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    pub fn page(&self) -> &'p P {
        self.page
    }

    /// Soft find: polls for `locator`, returning `None` once the budget is spent.
    pub async fn find(&self, locator: &Locator) -> Result<Option<P::Element>> {
        let page = self.page;
        poll(&self.policy, locator, move || page.find_first(locator)).await
    }

    /// Hard find: polls for `locator`, failing with [`Error::ElementNotFound`]
    /// attributed to `operation` once the budget is spent.
    pub async fn require(&self, locator: Locator, operation: &'static str) -> Result<P::Element> {
        match self.find(&locator).await? {
            Some(element) => Ok(element),
            None => {
                tracing::debug!(operation, "Could not find {}", locator);
                Err(Error::ElementNotFound { operation, locator })
            }
        }
    }

    /// Polls for a `<tag_name>` whose text contains `text`.
    pub async fn find_by_text_contains(
        &self,
        tag_name: &str,
        text: &str,
    ) -> Result<Option<P::Element>> {
        self.find(&Locator::text_contains(tag_name, text)).await
    }

    /// Polls for a `<tag_name>` whose text contains `text` and that is not disabled.
    ///
    /// Useful for controls gated on form state, such as a submit button that
    /// stays disabled until the form validates.
    pub async fn find_by_text_contains_and_enabled(
        &self,
        tag_name: &str,
        text: &str,
    ) -> Result<Option<P::Element>> {
        self.find(&Locator::text_contains_enabled(tag_name, text)).await
    }

    /// Polls for a `<tag_name>` carrying `css_class` (passed verbatim, e.g. `".active"`).
    pub async fn find_by_class(
        &self,
        tag_name: &str,
        css_class: &str,
    ) -> Result<Option<P::Element>> {
        self.find(&Locator::class(tag_name, css_class)).await
    }
}
