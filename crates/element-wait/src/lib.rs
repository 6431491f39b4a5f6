//! element-wait: Bounded waits for elements in dynamically rendered pages
//!
//! Client-side rendering, network latency and animation make "is this element
//! there yet?" unreliable on any single check. This crate turns that check into
//! a time-bounded wait: look up, and if nothing is there, sleep and look again,
//! up to a fixed budget (10 lookups, 500ms apart, by default).
//!
//! The browser driver is not part of this crate. Implement [`Page`] and
//! [`ElementHandle`] for whatever backend runs the browser.
//!
//! # Examples
//!
//! ## Click, then assert
//!
//! ```ignore
//! use element_wait::{assert, click};
//!
//! async fn submit(page: &MyPage) -> element_wait::Result<()> {
//!     // Fails with Error::ElementNotFound if the button never shows up
//!     click::element_with_text(page, "button", "Submit").await?;
//!     assert::element_with_text_exists(page, "h1", "Thank you").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Soft waits
//!
//! ```ignore
//! use element_wait::wait;
//!
//! async fn maybe_save(page: &MyPage) -> element_wait::Result<bool> {
//!     // None if the button never became enabled
//!     match wait::for_enabled_state_xpath(page, "button", "Save").await? {
//!         Some(button) => {
//!             button.click().await?;
//!             Ok(true)
//!         }
//!         None => Ok(false),
//!     }
//! }
//! ```
//!
//! ## Custom poll policy
//!
//! ```ignore
//! use element_wait::{Actions, PollPolicy};
//! use std::time::Duration;
//!
//! let policy = PollPolicy::builder()
//!     .max_attempts(40)
//!     .interval(Duration::from_millis(250))
//!     .build();
//! Actions::new(&page).with_policy(policy).click_by_class("div", ".MuiSelect-select").await?;
//! ```

mod actions;
pub mod api;
mod error;
mod finder;
mod poll;
pub mod protocol;

/// Default number of lookups per poll
pub use api::poll_policy::DEFAULT_MAX_ATTEMPTS;

/// Default delay between lookups in milliseconds
pub use api::poll_policy::DEFAULT_INTERVAL_MS;

// Re-export error types
pub use error::{Error, Result};

// Re-export capability groups
pub use api::{assert, click, wait};

// Re-export poll configuration
pub use api::{PollPolicy, PollPolicyBuilder};

// Re-export the poll engine and its compositions
pub use actions::Actions;
pub use finder::ElementFinder;
pub use poll::poll;

// Re-export page backend traits and locators
pub use protocol::{ElementHandle, Locator, Page, SelectorEngine};
