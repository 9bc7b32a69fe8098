use std::time::Duration;

use log::{debug, warn};

use crate::config::WaitConfig;
use crate::driver::WebDriverCommands;
use crate::error::{absorb_transient, PageError, PageResult};
use crate::locator::ResolvedLocator;
use crate::query::conditions::{self, ConditionKind, Target, Targets};
use crate::query::ElementPollerTicker;
use crate::timeout::TimeoutTier;

/// Blocking explicit waits using the builder pattern.
///
/// Each condition comes in two shapes: by locator, which looks the element up again on
/// every poll, and by element reference (the `_element` / `_elements` variants).
///
/// Waits for something to appear fail with [`PageError::ConditionTimeout`]. Waits for
/// something to go away or change selection state return `Ok(false)` on timeout.
///
/// An element reference that goes stale during a visibility, clickable or selection
/// wait fails with [`PageError::StaleElementReference`] straight away. Wait by locator
/// when the page may re-render.
///
/// # Example:
/// ```rust,no_run
/// # use page_elements_sync::prelude::*;
/// #
/// # fn main() -> PageResult<()> {
/// #     let driver = WebDriverSession::start("http://localhost:4444", Browser::Chrome)?;
/// let submit = ResolvedLocator::xpath("//button[@id='submit']");
/// let button = driver.wait_until().timeout(TimeoutTier::Minimum).clickable(&submit)?;
/// driver.click(&button)?;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Waiter<'d, D: WebDriverCommands + ?Sized> {
    driver: &'d D,
    tier: TimeoutTier,
    config: WaitConfig,
    message: String,
}

impl<'d, D> Waiter<'d, D>
where
    D: WebDriverCommands + ?Sized,
{
    pub fn new(driver: &'d D) -> Self {
        let config = driver.wait_config();
        Self {
            driver,
            tier: config.default_tier,
            config,
            message: String::new(),
        }
    }

    /// Wait for at most this tier instead of the configured default.
    pub fn timeout(mut self, tier: TimeoutTier) -> Self {
        self.tier = tier;
        self
    }

    /// Poll at this interval instead of the configured one. Intervals shorter than
    /// [`MIN_POLL_INTERVAL`](crate::config::MIN_POLL_INTERVAL) are raised to it.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Provide a human-readable message to add to the timeout error.
    pub fn error(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn tier(&self) -> TimeoutTier {
        self.tier
    }

    /// Poll `f` until it returns `Some`, or until the tier elapses.
    fn run_poller<T, F>(&self, kind: ConditionKind, target: &str, mut f: F) -> PageResult<Option<T>>
    where
        F: FnMut(&D) -> PageResult<Option<T>>,
    {
        debug!("Wait for {} with {} for {}", kind, target, self.tier);
        let mut ticker = ElementPollerTicker::new(self.config.poller(self.tier));
        loop {
            if let Some(value) = f(self.driver)? {
                return Ok(Some(value));
            }

            if !ticker.tick() {
                debug!("Gave up waiting for {} with {} after {:?}", kind, target, ticker.elapsed());
                return Ok(None);
            }
        }
    }

    fn timeout_error(&self, kind: ConditionKind, target: String) -> PageError {
        PageError::ConditionTimeout {
            condition: kind.to_string(),
            target,
            tier: self.tier,
            message: if self.message.is_empty() {
                String::new()
            } else {
                format!(": {}", self.message)
            },
        }
    }

    /// Conditions that must succeed: timing out is an error.
    fn required<T, F>(self, kind: ConditionKind, target: String, f: F) -> PageResult<T>
    where
        F: FnMut(&D) -> PageResult<Option<T>>,
    {
        match self.run_poller(kind, &target, f)? {
            Some(value) => Ok(value),
            None => Err(self.timeout_error(kind, target)),
        }
    }

    /// Conditions whose negative outcome is a legitimate answer.
    fn boolean<F>(self, kind: ConditionKind, target: String, f: F) -> PageResult<bool>
    where
        F: FnMut(&D) -> PageResult<Option<()>>,
    {
        let met = self.run_poller(kind, &target, f)?.is_some();
        if !met {
            warn!("Condition {} not met for {} within {}", kind, target, self.tier);
        }
        Ok(met)
    }

    /// Poll a custom predicate until it returns `Some`.
    ///
    /// No-such-element and stale reference errors from the predicate count as "not yet".
    pub fn until<T, F>(self, description: &str, mut f: F) -> PageResult<T>
    where
        F: FnMut(&D) -> PageResult<Option<T>>,
    {
        self.required(ConditionKind::Custom, description.to_string(), move |d: &D| {
            absorb_transient(f(d), None)
        })
    }

    pub fn present(self, by: &ResolvedLocator) -> PageResult<D::Element> {
        let target = Target::Locator(by);
        self.required(ConditionKind::Presence, target.describe(), |d| conditions::presence(d, &target))
    }

    /// Wait for a previously found element to still be attached.
    pub fn present_element(self, element: &D::Element) -> PageResult<D::Element> {
        let target = Target::Element(element);
        self.required(ConditionKind::Presence, target.describe(), |d| conditions::presence(d, &target))
    }

    pub fn all_present(self, by: &ResolvedLocator) -> PageResult<Vec<D::Element>> {
        let targets = Targets::Locator(by);
        self.required(ConditionKind::AllPresent, targets.describe(), |d| conditions::all_present(d, &targets))
    }

    pub fn all_present_elements(self, elements: &[D::Element]) -> PageResult<Vec<D::Element>> {
        let targets = Targets::Elements(elements);
        self.required(ConditionKind::AllPresent, targets.describe(), |d| conditions::all_present(d, &targets))
    }

    /// Wait for the element to be displayed, scrolling it to the centre of the
    /// viewport before each check.
    pub fn visible(self, by: &ResolvedLocator) -> PageResult<D::Element> {
        let target = Target::Locator(by);
        self.required(ConditionKind::Visibility, target.describe(), |d| conditions::visibility(d, &target))
    }

    pub fn visible_element(self, element: &D::Element) -> PageResult<D::Element> {
        let target = Target::Element(element);
        self.required(ConditionKind::Visibility, target.describe(), |d| conditions::visibility(d, &target))
    }

    pub fn all_visible(self, by: &ResolvedLocator) -> PageResult<Vec<D::Element>> {
        let targets = Targets::Locator(by);
        self.required(ConditionKind::AllVisible, targets.describe(), |d| conditions::all_visible(d, &targets))
    }

    pub fn all_visible_elements(self, elements: &[D::Element]) -> PageResult<Vec<D::Element>> {
        let targets = Targets::Elements(elements);
        self.required(ConditionKind::AllVisible, targets.describe(), |d| conditions::all_visible(d, &targets))
    }

    /// Wait for the element to be visible and enabled.
    pub fn clickable(self, by: &ResolvedLocator) -> PageResult<D::Element> {
        let target = Target::Locator(by);
        self.required(ConditionKind::Clickable, target.describe(), |d| conditions::clickable(d, &target))
    }

    pub fn clickable_element(self, element: &D::Element) -> PageResult<D::Element> {
        let target = Target::Element(element);
        self.required(ConditionKind::Clickable, target.describe(), |d| conditions::clickable(d, &target))
    }

    /// True once no element matches or the match is hidden.
    pub fn invisible(self, by: &ResolvedLocator) -> PageResult<bool> {
        let target = Target::Locator(by);
        self.boolean(ConditionKind::Invisibility, target.describe(), |d| conditions::invisibility(d, &target))
    }

    pub fn invisible_element(self, element: &D::Element) -> PageResult<bool> {
        let target = Target::Element(element);
        self.boolean(ConditionKind::Invisibility, target.describe(), |d| conditions::invisibility(d, &target))
    }

    pub fn all_invisible(self, by: &ResolvedLocator) -> PageResult<bool> {
        let targets = Targets::Locator(by);
        self.boolean(ConditionKind::AllInvisible, targets.describe(), |d| conditions::all_invisible(d, &targets))
    }

    pub fn all_invisible_elements(self, elements: &[D::Element]) -> PageResult<bool> {
        let targets = Targets::Elements(elements);
        self.boolean(ConditionKind::AllInvisible, targets.describe(), |d| conditions::all_invisible(d, &targets))
    }

    /// True once nothing matches the locator any more.
    pub fn not_present(self, by: &ResolvedLocator) -> PageResult<bool> {
        let target = Target::Locator(by);
        self.boolean(ConditionKind::NotPresent, target.describe(), |d| conditions::not_present(d, &target))
    }

    /// True once the element has been detached from the document.
    pub fn stale(self, element: &D::Element) -> PageResult<bool> {
        let target = Target::Element(element);
        self.boolean(ConditionKind::NotPresent, target.describe(), |d| conditions::not_present(d, &target))
    }

    /// Make sure the locator actually locates an input, or this never succeeds.
    pub fn selected(self, by: &ResolvedLocator) -> PageResult<bool> {
        let target = Target::Locator(by);
        self.boolean(ConditionKind::Selected, target.describe(), |d| {
            conditions::selection_state(d, &target, true)
        })
    }

    pub fn selected_element(self, element: &D::Element) -> PageResult<bool> {
        let target = Target::Element(element);
        self.boolean(ConditionKind::Selected, target.describe(), |d| {
            conditions::selection_state(d, &target, true)
        })
    }

    pub fn not_selected(self, by: &ResolvedLocator) -> PageResult<bool> {
        let target = Target::Locator(by);
        self.boolean(ConditionKind::NotSelected, target.describe(), |d| {
            conditions::selection_state(d, &target, false)
        })
    }

    pub fn not_selected_element(self, element: &D::Element) -> PageResult<bool> {
        let target = Target::Element(element);
        self.boolean(ConditionKind::NotSelected, target.describe(), |d| {
            conditions::selection_state(d, &target, false)
        })
    }
}

/// Trait for enabling the Waiter interface on a driver.
pub trait DriverWaitable: WebDriverCommands {
    /// Return a Waiter for more powerful explicit waits, bounded by the driver's
    /// default tier unless overridden.
    fn wait_until(&self) -> Waiter<'_, Self>;
}

impl<D: WebDriverCommands> DriverWaitable for D {
    fn wait_until(&self) -> Waiter<'_, Self> {
        Waiter::new(self)
    }
}
