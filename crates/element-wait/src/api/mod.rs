// Public API module
//
// Capability groups mirroring how automation scripts read:
//   assert::element_with_text_exists(&page, "h1", "Welcome")
//   click::element_with_text(&page, "button", "Submit")
//   wait::for_element_css(&page, "#app.ready")
//
// Each operation takes the page first and uses the default PollPolicy; the
// `*_with_policy` variants take an explicit one.

pub mod assert;
pub mod click;
pub mod poll_policy;
pub mod wait;

pub use poll_policy::{PollPolicy, PollPolicyBuilder};
