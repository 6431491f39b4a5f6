// Protocol types shared with page backends

pub mod locator;
pub use locator::{Locator, SelectorEngine};

pub mod page;
pub use page::{ElementHandle, Page};
