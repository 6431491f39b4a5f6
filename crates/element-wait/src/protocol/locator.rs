// Locator - Description of which element to find
//
// A Locator is an immutable value built per call and discarded afterwards.
// It renders to a selector string understood by the page backend; the
// selector language itself (XPath/CSS parsing) belongs to the backend.
//
// Shapes:
// - TextContains: tag + contained text, optionally "not disabled" (XPath)
// - Class: tag + CSS class (CSS)
// - XPath / Css: raw selectors passed through verbatim

use std::fmt;

/// Selector language a locator renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEngine {
    /// XPath 1.0 expression
    XPath,
    /// CSS selector
    Css,
}

impl SelectorEngine {
    /// Engine prefix used by backends that accept `engine=selector` strings.
    pub fn prefix(self) -> &'static str {
        match self {
            SelectorEngine::XPath => "xpath",
            SelectorEngine::Css => "css",
        }
    }
}

/// Locator describes how to find zero or one element in the current page state.
///
/// Caller-supplied text and classes are embedded without escaping. Text containing
/// a single quote, for example, produces an XPath the backend will reject.
///
/// # Example
///
/// ```ignore
/// use element_wait::Locator;
///
/// let submit = Locator::text_contains("button", "Submit");
/// assert_eq!(submit.selector(), "//button[contains(., 'Submit')]");
///
/// let select = Locator::class("div", ".MuiSelect-select");
/// assert_eq!(select.selector(), "div.MuiSelect-select");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Elements of `tag_name` whose rendered text contains `text` (case-sensitive).
    TextContains {
        tag_name: String,
        text: String,
        require_enabled: bool,
    },
    /// Elements of `tag_name` carrying `css_class`, passed through verbatim
    /// including any leading `.` the caller supplies.
    Class { tag_name: String, css_class: String },
    /// Raw XPath selector
    XPath(String),
    /// Raw CSS selector
    Css(String),
}

impl Locator {
    /// Locates `<tag_name>` elements containing `text`.
    pub fn text_contains(tag_name: impl Into<String>, text: impl Into<String>) -> Self {
        Locator::TextContains {
            tag_name: tag_name.into(),
            text: text.into(),
            require_enabled: false,
        }
    }

    /// Locates `<tag_name>` elements containing `text` that are not disabled.
    pub fn text_contains_enabled(tag_name: impl Into<String>, text: impl Into<String>) -> Self {
        Locator::TextContains {
            tag_name: tag_name.into(),
            text: text.into(),
            require_enabled: true,
        }
    }

    /// Locates `<tag_name>` elements with the given class, e.g. `(".MuiSelect-select")`.
    pub fn class(tag_name: impl Into<String>, css_class: impl Into<String>) -> Self {
        Locator::Class {
            tag_name: tag_name.into(),
            css_class: css_class.into(),
        }
    }

    pub fn xpath(selector: impl Into<String>) -> Self {
        Locator::XPath(selector.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    /// Returns the selector language this locator renders to
    pub fn engine(&self) -> SelectorEngine {
        match self {
            Locator::TextContains { .. } | Locator::XPath(_) => SelectorEngine::XPath,
            Locator::Class { .. } | Locator::Css(_) => SelectorEngine::Css,
        }
    }

    /// Renders the selector string handed to the page backend.
    pub fn selector(&self) -> String {
        match self {
            Locator::TextContains {
                tag_name,
                text,
                require_enabled,
            } => {
                let mut selector = format!("//{}[contains(., '{}')]", tag_name, text);
                if *require_enabled {
                    selector.push_str("[not(@disabled)]");
                }
                selector
            }
            Locator::Class {
                tag_name,
                css_class,
            } => format!("{}{}", tag_name, css_class),
            Locator::XPath(selector) | Locator::Css(selector) => selector.clone(),
        }
    }

    /// Renders the selector with its engine prefix, e.g. `xpath=//button`.
    pub fn qualified_selector(&self) -> String {
        format!("{}={}", self.engine().prefix(), self.selector())
    }

    /// Returns the tag name sought, if the locator was built from one
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Locator::TextContains { tag_name, .. } | Locator::Class { tag_name, .. } => {
                Some(tag_name)
            }
            Locator::XPath(_) | Locator::Css(_) => None,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::TextContains {
                tag_name,
                text,
                require_enabled: false,
            } => write!(f, "<{}> containing \"{}\"", tag_name, text),
            Locator::TextContains {
                tag_name,
                text,
                require_enabled: true,
            } => write!(f, "enabled <{}> containing \"{}\"", tag_name, text),
            Locator::Class {
                tag_name,
                css_class,
            } => write!(f, "<{}> with class {}", tag_name, css_class),
            Locator::XPath(selector) => write!(f, "xpath '{}'", selector),
            Locator::Css(selector) => write!(f, "css '{}'", selector),
        }
    }
}
