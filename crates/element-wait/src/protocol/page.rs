// Page backend boundary
//
// The browser-automation driver is an external collaborator. It is reached
// through two traits: Page (one lookup against current page state) and
// ElementHandle (one click on a located element). Handles are owned by the
// backend; this crate never keeps one beyond the action it was fetched for.

use crate::error::Result;
use crate::protocol::Locator;
use async_trait::async_trait;

/// A located element, owned by the page backend.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Performs a single click on the element.
    async fn click(&self) -> Result<()>;
}

/// A page or session that can be queried for elements.
///
/// Implementations perform exactly one lookup per call, without waiting. All
/// waiting is done by this crate's poll loop.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use element_wait::{ElementHandle, Locator, Page, Result};
///
/// struct Button;
///
/// #[async_trait]
/// impl ElementHandle for Button {
///     async fn click(&self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// struct StaticPage;
///
/// #[async_trait]
/// impl Page for StaticPage {
///     type Element = Button;
///
///     async fn find_first(&self, locator: &Locator) -> Result<Option<Button>> {
///         Ok((locator.tag_name() == Some("button")).then_some(Button))
///     }
/// }
/// ```
#[async_trait]
pub trait Page: Send + Sync {
    /// Handle type returned by lookups
    type Element: ElementHandle;

    /// Returns the first element matching `locator`, or `None` if nothing matches right now.
    ///
    /// Backend failures (for example a detached session) are returned as errors and
    /// propagate through every operation of this crate unchanged.
    async fn find_first(&self, locator: &Locator) -> Result<Option<Self::Element>>;
}
