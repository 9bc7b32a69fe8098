//! Instantaneous checks that look at the page once without waiting.
//!
//! The page may be mutating while these run, so a reference going stale (or the
//! element disappearing between lookups) counts as "not there" rather than an error.

use log::{debug, info};

use crate::driver::WebDriverCommands;
use crate::error::{absorb_transient, PageResult};
use crate::locator::ResolvedLocator;

pub fn is_element_present<D>(driver: &D, by: &ResolvedLocator) -> PageResult<bool>
where
    D: WebDriverCommands + ?Sized,
{
    info!("Check if element is present by locator[{}]", by);
    let results = match driver.find_elements(by) {
        Ok(results) => results,
        Err(e) if e.is_transient() => {
            info!("Not found any elements by locator[{}]", by);
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    if log::log_enabled!(log::Level::Debug) {
        for result in &results {
            let class = absorb_transient(driver.get_attribute(result, "class"), None)?;
            let text = absorb_transient(driver.text(result), String::new())?;
            debug!("Found element of class [{}] and text [{}]", class.unwrap_or_default(), text);
        }
    }
    Ok(!results.is_empty())
}

/// Present and displayed, after scrolling the element to the middle of the viewport.
pub fn is_element_visible<D>(driver: &D, by: &ResolvedLocator) -> PageResult<bool>
where
    D: WebDriverCommands + ?Sized,
{
    if !is_element_present(driver, by)? {
        return Ok(false);
    }
    let element = match driver.find_element(by) {
        Ok(element) => element,
        Err(e) if e.is_transient() => return Ok(false),
        Err(e) => return Err(e),
    };
    absorb_transient(
        scroll_until_element_is_fully_visible(driver, &element).and_then(|_| driver.is_displayed(&element)),
        false,
    )
}

pub fn scroll_until_element_is_fully_visible<D>(driver: &D, element: &D::Element) -> PageResult<()>
where
    D: WebDriverCommands + ?Sized,
{
    debug!("Scroll until element [{:?}] is as close to the center of the screen as possible", element);
    driver.scroll_into_view_centered(element)
}
