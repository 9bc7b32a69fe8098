use std::fmt::Debug;

use crate::config::WaitConfig;
use crate::error::{PageError, PageResult};
use crate::locator::ResolvedLocator;

/// The capabilities the locator and wait layers need from a browser driver.
///
/// A driver handle is owned by one logical test flow and passed by reference into
/// every call. [`WebDriverSession`](crate::WebDriverSession) implements this over the
/// W3C WebDriver protocol; tests can implement it over an in-memory page.
pub trait WebDriverCommands {
    /// A reference to an element obtained from this driver.
    type Element: Clone + Debug;

    /// Find the first element matching `by`, failing with
    /// [`PageError::NoSuchElement`] if there is none.
    fn find_element(&self, by: &ResolvedLocator) -> PageResult<Self::Element>;

    /// Find all elements matching `by`, in document order. May be empty.
    fn find_elements(&self, by: &ResolvedLocator) -> PageResult<Vec<Self::Element>>;

    fn is_displayed(&self, element: &Self::Element) -> PageResult<bool>;

    fn is_enabled(&self, element: &Self::Element) -> PageResult<bool>;

    fn is_selected(&self, element: &Self::Element) -> PageResult<bool>;

    fn tag_name(&self, element: &Self::Element) -> PageResult<String>;

    fn get_attribute(&self, element: &Self::Element, name: &str) -> PageResult<Option<String>>;

    fn text(&self, element: &Self::Element) -> PageResult<String>;

    /// Scroll so that the element is as close to the centre of the viewport as possible.
    fn scroll_into_view_centered(&self, element: &Self::Element) -> PageResult<()>;

    fn click(&self, element: &Self::Element) -> PageResult<()>;

    fn send_keys(&self, element: &Self::Element, text: &str) -> PageResult<()>;

    /// True if the element is no longer attached to the document.
    fn is_stale(&self, element: &Self::Element) -> PageResult<bool> {
        match self.tag_name(element) {
            Ok(_) => Ok(false),
            Err(PageError::StaleElementReference(_)) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Polling configuration used by waits that do not override it.
    fn wait_config(&self) -> WaitConfig {
        WaitConfig::default()
    }
}
