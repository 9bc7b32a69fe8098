//! Declarative, parameterized element locators.
//!
//! A [`LocatorDescriptor`] pairs a [`LocatorStrategy`] with a pattern that may contain
//! placeholders (see [`format`]). Resolving it against a list of arguments produces a
//! [`ResolvedLocator`] that can be handed to a driver.
//!
//! ```rust
//! use page_elements_sync::locator::{resolve, LocatorDescriptor};
//!
//! # fn main() -> page_elements_sync::error::PageResult<()> {
//! const ROW: LocatorDescriptor = LocatorDescriptor::xpath("//div[@id='row%s']//input");
//! let by = resolve(&ROW, &["2"])?;
//! assert_eq!(by.value(), "//div[@id='row2']//input");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::fmt;

use thirtyfour::By;

pub mod elements;
pub mod format;
mod resolver;

pub use elements::{ContainerPageElement, PageElement};
pub use resolver::{resolve, resolve_string};

/// The W3C strategies a locator may be declared with.
///
/// Only `XPath`, `Css` and `Id` patterns can be resolved; the others exist so that a
/// catalog declaring them fails loudly at resolution time instead of silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorStrategy {
    XPath,
    Css,
    Id,
    LinkText,
    PartialLinkText,
    Name,
    Tag,
    ClassName,
}

impl LocatorStrategy {
    pub fn is_templatable(self) -> bool {
        matches!(self, LocatorStrategy::XPath | LocatorStrategy::Css | LocatorStrategy::Id)
    }
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocatorStrategy::XPath => "xpath",
            LocatorStrategy::Css => "cssSelector",
            LocatorStrategy::Id => "id",
            LocatorStrategy::LinkText => "linkText",
            LocatorStrategy::PartialLinkText => "partialLinkText",
            LocatorStrategy::Name => "name",
            LocatorStrategy::Tag => "tagName",
            LocatorStrategy::ClassName => "className",
        };
        f.write_str(name)
    }
}

/// A strategy plus an unresolved pattern. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocatorDescriptor {
    strategy: LocatorStrategy,
    pattern: Cow<'static, str>,
}

impl LocatorDescriptor {
    pub fn new<P>(strategy: LocatorStrategy, pattern: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self {
            strategy,
            pattern: pattern.into(),
        }
    }

    pub const fn xpath(pattern: &'static str) -> Self {
        Self::with_static(LocatorStrategy::XPath, pattern)
    }

    pub const fn css(pattern: &'static str) -> Self {
        Self::with_static(LocatorStrategy::Css, pattern)
    }

    pub const fn id(pattern: &'static str) -> Self {
        Self::with_static(LocatorStrategy::Id, pattern)
    }

    pub const fn link_text(pattern: &'static str) -> Self {
        Self::with_static(LocatorStrategy::LinkText, pattern)
    }

    pub const fn with_static(strategy: LocatorStrategy, pattern: &'static str) -> Self {
        Self {
            strategy,
            pattern: Cow::Borrowed(pattern),
        }
    }

    pub fn strategy(&self) -> LocatorStrategy {
        self.strategy
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for LocatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By.{}: {}", self.strategy, self.pattern)
    }
}

/// A locator with every placeholder substituted.
///
/// Only valid at the moment it was resolved: arguments such as generated ids may change
/// between calls, so resolve again rather than caching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocator {
    strategy: LocatorStrategy,
    value: String,
}

impl ResolvedLocator {
    pub fn new<S: Into<String>>(strategy: LocatorStrategy, value: S) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    pub fn xpath<S: Into<String>>(value: S) -> Self {
        Self::new(LocatorStrategy::XPath, value)
    }

    pub fn css<S: Into<String>>(value: S) -> Self {
        Self::new(LocatorStrategy::Css, value)
    }

    pub fn id<S: Into<String>>(value: S) -> Self {
        Self::new(LocatorStrategy::Id, value)
    }

    pub fn strategy(&self) -> LocatorStrategy {
        self.strategy
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The WebDriver selector for this locator.
    pub fn to_by(&self) -> By<'_> {
        match self.strategy {
            LocatorStrategy::XPath => By::XPath(&self.value),
            LocatorStrategy::Css => By::Css(&self.value),
            LocatorStrategy::Id => By::Id(&self.value),
            LocatorStrategy::LinkText => By::LinkText(&self.value),
            LocatorStrategy::PartialLinkText => By::PartialLinkText(&self.value),
            LocatorStrategy::Name => By::Name(&self.value),
            LocatorStrategy::Tag => By::Tag(&self.value),
            LocatorStrategy::ClassName => By::ClassName(&self.value),
        }
    }
}

impl fmt::Display for ResolvedLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By.{}: {}", self.strategy, self.value)
    }
}
